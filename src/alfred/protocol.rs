/// Script Filter JSON feedback understood by the launcher.
use serde::{Deserialize, Serialize};

// ─── Feedback Document ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Text shown in the result row
    pub title: String,
    /// Secondary line naming the convention
    pub subtitle: String,
    /// Whether the row can be actioned
    pub valid: bool,
    /// Stable identifier the launcher uses to learn usage frequency
    pub uid: String,
    pub icon: Icon,
    /// Value passed on when the row is selected
    pub arg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub path: String,
}
