// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Injection site classification.
//!
//! Decides whether a string literal is worth segmenting: either it sits in
//! the pattern position of a `preg_*` call, or (when `parse_all_strings` is
//! enabled) its text looks like a complete delimited regex on its own.

use std::sync::LazyLock;

use regex::Regex;

/// Functions whose first argument is a pattern string.
pub const PREG_STRING_ARG: &[&str] = &[
    "\\preg_filter",
    "\\preg_grep",
    "\\preg_match",
    "\\preg_match_all",
    "\\preg_replace",
    "\\preg_replace_callback",
    "\\preg_split",
];

/// Functions whose first argument may also be an array of pattern strings.
pub const PREG_ARRAY_ARG: &[&str] = &["\\preg_filter", "\\preg_replace", "\\preg_replace_callback"];

/// Delimiters the heuristic accepts as the first character of a literal.
pub const POPULAR_DELIMITERS: &[char] = &['!', '#', '%', '&', '/', '=', '@', '_', '|', '~'];

/// Flag letters the heuristic accepts after the closing delimiter.
pub const FLAG_LETTERS: &str = "imsuxADSUX";

/// Where a literal sits relative to the call that receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSite {
    /// The literal is the whole first positional argument of `function`.
    Argument { function: String },
    /// The literal is an element of an array that is the whole first
    /// positional argument of `function`.
    ArrayElement { function: String },
    /// Anywhere else.
    Other,
}

impl CallSite {
    /// Fully-qualified name of the receiving function, if any.
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::Argument { function } | Self::ArrayElement { function } => Some(function),
            Self::Other => None,
        }
    }
}

/// Whole-literal patterns, one per popular delimiter.
///
/// The escaped character may be anything but a line terminator.
#[allow(clippy::expect_used)]
static POPULAR_PATTERNS: LazyLock<Vec<(char, Regex)>> = LazyLock::new(|| {
    POPULAR_DELIMITERS
        .iter()
        .map(|&d| {
            let d_escaped = regex::escape(&d.to_string());
            let pattern = format!(
                r"\A{d_escaped}(?:[^\\{d_escaped}]+|\\[^\n\r\x{{85}}\x{{2028}}\x{{2029}}])+{d_escaped}[{FLAG_LETTERS}]*\z"
            );
            (d, Regex::new(&pattern).expect("valid regex pattern"))
        })
        .collect()
});

/// Check whether the call site alone makes the literal a pattern.
pub fn is_recognized_call(site: &CallSite) -> bool {
    match site {
        CallSite::Argument { function } => PREG_STRING_ARG.contains(&function.as_str()),
        CallSite::ArrayElement { function } => PREG_ARRAY_ARG.contains(&function.as_str()),
        CallSite::Other => false,
    }
}

/// Check whether the text on its own looks like a delimited regex.
///
/// The first character must be a popular delimiter (no whitespace skipping)
/// and the whole text must be delimiter, body, delimiter, flags.
pub fn looks_like_regex(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };

    POPULAR_PATTERNS
        .iter()
        .find(|(d, _)| *d == first)
        .is_some_and(|(_, re)| re.is_match(text))
}

/// Decide whether a literal should be segmented.
pub fn is_injection_site(site: &CallSite, text: &str, parse_all_strings: bool) -> bool {
    if text.chars().nth(2).is_none() {
        return false;
    }
    if is_recognized_call(site) {
        return true;
    }
    parse_all_strings && looks_like_regex(text)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
