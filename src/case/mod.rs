pub mod registry;
pub mod render;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Any run of the recognised word delimiters.
static DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-. _]+").unwrap());
static ASCII_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static UNDERSCORE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(\w)").unwrap());

/// Collapse every run of `-`, `.`, space or `_` into a single underscore.
pub fn collapse_delimiters(text: &str) -> String {
    DELIMITERS.replace_all(text, "_").into_owned()
}

/// Insert `_` before each ASCII capital that follows a character other than
/// `_`. This is a heuristic, not a tokenizer: `ABc` becomes `A_Bc`.
pub fn mark_case_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in ASCII_UPPER.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if text[..m.start()].chars().next_back().is_some_and(|c| c != '_') {
            out.push('_');
        }
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Replace each `_<word char>` pair with the uppercased word char.
pub fn join_underscored_words(text: &str) -> String {
    UNDERSCORE_WORD
        .replace_all(text, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// True when the text has at least one cased character and none of them
/// are lowercase.
pub fn is_all_upper(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Uppercase the first character if it is lowercase.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

/// Lowercase the first character.
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_delimiters() {
        assert_eq!(collapse_delimiters("a - b..c__d"), "a_b_c_d");
        assert_eq!(collapse_delimiters("  lead"), "_lead");
        assert_eq!(collapse_delimiters("plain"), "plain");
    }

    #[test]
    fn test_mark_case_boundaries() {
        assert_eq!(mark_case_boundaries("helloWorld"), "hello_World");
        assert_eq!(mark_case_boundaries("HelloWorld"), "Hello_World");
        assert_eq!(mark_case_boundaries("_Hello"), "_Hello");
        assert_eq!(mark_case_boundaries("ABc"), "A_Bc");
    }

    #[test]
    fn test_mark_case_boundaries_ignores_non_ascii_capitals() {
        assert_eq!(mark_case_boundaries("straßeÄpfel"), "straßeÄpfel");
    }

    #[test]
    fn test_join_underscored_words() {
        assert_eq!(join_underscored_words("hello_world_x"), "helloWorldX");
        assert_eq!(join_underscored_words("_lead"), "Lead");
        assert_eq!(join_underscored_words("a_1"), "a1");
    }

    #[test]
    fn test_is_all_upper() {
        assert!(is_all_upper("HELLO_WORLD"));
        assert!(is_all_upper("ABC1"));
        assert!(!is_all_upper("HELLo"));
        assert!(!is_all_upper("123_"));
        assert!(!is_all_upper(""));
    }

    #[test]
    fn test_first_char_helpers() {
        assert_eq!(upper_first("hello"), "Hello");
        assert_eq!(upper_first("_x"), "_x");
        assert_eq!(lower_first("Hello"), "hello");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first(""), "");
    }
}
