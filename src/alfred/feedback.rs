use crate::alfred::protocol::*;
use crate::case::registry::Conversion;

/// Build the launcher feedback for `text`: one row per listed conversion.
pub fn build(text: &str, icon_dir: &str) -> Feedback {
    let items = Conversion::LISTED
        .into_iter()
        .filter_map(|conversion| {
            let listing = conversion.listing()?;
            let converted = conversion.apply(text);
            Some(FeedbackItem {
                title: converted.clone(),
                subtitle: listing.subtitle.into(),
                valid: true,
                uid: listing.uid.into(),
                icon: Icon {
                    path: icon_path(icon_dir, listing.icon),
                },
                arg: converted,
            })
        })
        .collect();
    Feedback { items }
}

fn icon_path(icon_dir: &str, file: &str) -> String {
    let dir = icon_dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
