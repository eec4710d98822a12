//! Renderers from arbitrary text into each naming convention.
//!
//! Every renderer is a pure function of its input and returns an empty
//! string for empty input. Word boundaries come from the delimiter and
//! capital-letter heuristics in the parent module.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    collapse_delimiters, is_all_upper, join_underscored_words, lower_first, mark_case_boundaries,
    upper_first,
};

static PASCAL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:[A-Z][a-z]+)*$").unwrap());
static SNAKE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+(?:_[a-z]+)*$").unwrap());
static CAMEL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+(?:[A-Z][a-z]+)*$").unwrap());

// ─── Snake family ──────────────────────────────────────────────────────────

/// `HelloWorld`, `hello-world`, `HELLO WORLD` → `hello_world`.
///
/// Entirely uppercase input is treated as case-insensitive and only
/// lowercased, so `HTTP_SERVER` does not become `h_t_t_p_s_e_r_v_e_r`.
pub fn to_snake_case(text: &str) -> String {
    let text = collapse_delimiters(text);
    if is_all_upper(&text) {
        return text.to_lowercase();
    }
    mark_case_boundaries(&text).to_lowercase()
}

/// Like [`to_snake_case`] but keeps the original casing of every letter.
pub fn to_snake_case_graceful(text: &str) -> String {
    let text = collapse_delimiters(text);
    if is_all_upper(&text) {
        return text;
    }
    mark_case_boundaries(&text)
}

pub fn strip_wrapping_underscores(text: &str) -> String {
    text.trim_matches('_').to_string()
}

fn replace_separator(text: &str, separator: &str) -> String {
    to_snake_case(text).replace('_', separator)
}

pub fn to_dot_case(text: &str) -> String {
    replace_separator(text, ".")
}

pub fn to_dash_case(text: &str) -> String {
    replace_separator(text, "-")
}

pub fn to_slash_case(text: &str) -> String {
    replace_separator(text, "/")
}

pub fn to_separate_words(text: &str) -> String {
    replace_separator(text, " ")
}

// ─── Capitalised forms ─────────────────────────────────────────────────────

pub fn to_pascal_case(text: &str) -> String {
    upper_first(&join_underscored_words(&to_snake_case(text)))
}

pub fn to_camel_case(text: &str) -> String {
    lower_first(&to_pascal_case(text))
}

/// `hello world` → `Hello_World`.
///
/// Letters keep their case: the text is joined into Pascal form without
/// lowercasing, then split again at every capital.
pub fn to_cap_snake_case(text: &str) -> String {
    let pascal = upper_first(&join_underscored_words(&collapse_delimiters(text)));
    mark_case_boundaries(&pascal)
}

// ─── Whole-string transforms ───────────────────────────────────────────────

/// Flip between the three common identifier styles:
/// PascalCase → snake_case → camelCase → PascalCase.
///
/// Only plain ASCII words are recognised; anything else comes back untouched.
pub fn toggle_case(text: &str) -> String {
    if PASCAL_WORD.is_match(text) {
        to_snake_case(text)
    } else if SNAKE_WORD.is_match(text) {
        to_camel_case(text)
    } else if CAMEL_WORD.is_match(text) {
        to_pascal_case(text)
    } else {
        text.to_string()
    }
}

pub fn all_caps(text: &str) -> String {
    text.to_uppercase()
}

pub fn all_lower(text: &str) -> String {
    text.to_lowercase()
}
