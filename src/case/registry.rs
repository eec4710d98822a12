use std::fmt;
use std::str::FromStr;

use super::render;

/// Every named conversion the tool knows about.
///
/// Conversions resolve by function name (`to_snake_case`) or by launcher
/// identifier (`snakecase`). Names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    Snake,
    SnakeGraceful,
    StripUnderscores,
    Pascal,
    Cobra,
    Camel,
    Dot,
    Dash,
    Slash,
    Space,
    Toggle,
    AllCaps,
    AllLower,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion '{0}'")]
pub struct UnknownConversion(pub String);

/// Launcher metadata for conversions that appear in the feedback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub uid: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

impl Conversion {
    pub const ALL: [Conversion; 13] = [
        Conversion::Snake,
        Conversion::SnakeGraceful,
        Conversion::StripUnderscores,
        Conversion::Pascal,
        Conversion::Cobra,
        Conversion::Camel,
        Conversion::Dot,
        Conversion::Dash,
        Conversion::Slash,
        Conversion::Space,
        Conversion::Toggle,
        Conversion::AllCaps,
        Conversion::AllLower,
    ];

    /// Conversions shown to the launcher, in display order.
    pub const LISTED: [Conversion; 10] = [
        Conversion::Snake,
        Conversion::Pascal,
        Conversion::Cobra,
        Conversion::Camel,
        Conversion::Dot,
        Conversion::Dash,
        Conversion::Slash,
        Conversion::Space,
        Conversion::AllCaps,
        Conversion::AllLower,
    ];

    pub fn function_name(self) -> &'static str {
        match self {
            Conversion::Snake => "to_snake_case",
            Conversion::SnakeGraceful => "to_snake_case_graceful",
            Conversion::StripUnderscores => "strip_wrapping_underscores",
            Conversion::Pascal => "to_pascal_case",
            Conversion::Cobra => "to_cap_snake_case",
            Conversion::Camel => "to_camel_case",
            Conversion::Dot => "to_dot_case",
            Conversion::Dash => "to_dash_case",
            Conversion::Slash => "to_slash",
            Conversion::Space => "to_separate_words",
            Conversion::Toggle => "toggle_case",
            Conversion::AllCaps => "allcaps",
            Conversion::AllLower => "alllower",
        }
    }

    pub fn listing(self) -> Option<Listing> {
        let (uid, subtitle, icon) = match self {
            Conversion::Snake => ("snakecase", "Snake (snake_case)", "snake.png"),
            Conversion::Pascal => ("pascalcase", "Pascal (PascalCase)", "pascal.png"),
            Conversion::Cobra => ("cobracase", "Cobra (Cobra_Case)", "cobra.png"),
            Conversion::Camel => ("camelcase", "Camel (camelCase)", "camel.png"),
            Conversion::Dot => ("dotcase", "Dot (dot.case)", "dot.png"),
            Conversion::Dash => ("dashcase", "Kebab (kebab-case)", "kebab.png"),
            Conversion::Slash => ("slashcase", "Slash (slash/case)", "slash.png"),
            Conversion::Space => ("spacecase", "Separate Words", "space.png"),
            Conversion::AllCaps => ("allcaps", "ALL CAPS", "upper.png"),
            Conversion::AllLower => ("alllower", "all lowercase", "lower.png"),
            Conversion::SnakeGraceful | Conversion::StripUnderscores | Conversion::Toggle => {
                return None
            }
        };
        Some(Listing {
            uid,
            subtitle,
            icon,
        })
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Conversion::Snake => render::to_snake_case(text),
            Conversion::SnakeGraceful => render::to_snake_case_graceful(text),
            Conversion::StripUnderscores => render::strip_wrapping_underscores(text),
            Conversion::Pascal => render::to_pascal_case(text),
            Conversion::Cobra => render::to_cap_snake_case(text),
            Conversion::Camel => render::to_camel_case(text),
            Conversion::Dot => render::to_dot_case(text),
            Conversion::Dash => render::to_dash_case(text),
            Conversion::Slash => render::to_slash_case(text),
            Conversion::Space => render::to_separate_words(text),
            Conversion::Toggle => render::toggle_case(text),
            Conversion::AllCaps => render::all_caps(text),
            Conversion::AllLower => render::all_lower(text),
        }
    }
}

impl FromStr for Conversion {
    type Err = UnknownConversion;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "to_slash_case" {
            return Ok(Conversion::Slash);
        }
        Conversion::ALL
            .into_iter()
            .find(|c| {
                c.function_name() == name || c.listing().is_some_and(|l| l.uid == name)
            })
            .ok_or_else(|| UnknownConversion(name.to_string()))
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}
