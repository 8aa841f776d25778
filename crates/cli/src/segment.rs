// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delimited regex segmentation.
//!
//! Given the decoded text of a string literal, finds the pattern delimiters,
//! the body between them and the sub-ranges of that body that make up the
//! embedded regex. Escaped delimiters split the body into several segments,
//! so the backslash in front of them never reaches the regex analyzer.
//!
//! All offsets are byte offsets into the literal text. Every character the
//! scanner compares against is looked up with its own width, so non-ASCII
//! delimiters produce valid `str` ranges.

use std::ops::Range;

/// Opening and closing delimiter of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub start: char,
    pub end: char,
}

impl Delimiters {
    /// Pair a start delimiter with its closing counterpart.
    ///
    /// Brackets mirror (`(` closes with `)`); anything else closes with itself.
    pub fn for_start(start: char) -> Self {
        let end = match start {
            '(' => ')',
            '[' => ']',
            '{' => '}',
            '<' => '>',
            other => other,
        };
        Self { start, end }
    }

    /// True for mirrored bracket delimiters, which nest.
    pub fn is_bracket(&self) -> bool {
        self.start != self.end
    }
}

/// One embeddable piece of the pattern body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Byte range into the literal text.
    pub range: Range<usize>,
    /// Text of all earlier segments, concatenated.
    pub prefix: String,
    /// Text of all later segments, concatenated.
    pub suffix: String,
}

impl Segment {
    /// The slice of `literal` this segment covers.
    pub fn text<'a>(&self, literal: &'a str) -> &'a str {
        &literal[self.range.clone()]
    }
}

/// Result of segmenting a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub delimiters: Delimiters,
    /// Byte range strictly between the delimiters.
    pub body: Range<usize>,
    /// At least one segment, ordered and disjoint.
    pub segments: Vec<Segment>,
    /// An `x` follows the closing delimiter.
    pub extended: bool,
}

impl Segmentation {
    /// Text after the closing delimiter (the mode flags).
    pub fn flags<'a>(&self, literal: &'a str) -> &'a str {
        &literal[self.body.end + self.delimiters.end.len_utf8()..]
    }
}

/// Segment a literal holding a delimited regex.
///
/// Returns `None` when the text is too short, the first non-whitespace
/// character cannot be a delimiter, or the body is never closed.
pub fn segment(text: &str) -> Option<Segmentation> {
    // Two characters or fewer, counted as chars, not bytes.
    if text.chars().nth(2).is_none() {
        return None;
    }

    let start_pos = text.find(|c: char| !is_space(c))?;
    let start = text[start_pos..].chars().next()?;
    if start.is_ascii_alphanumeric() || start == '\\' {
        return None;
    }

    let delimiters = Delimiters::for_start(start);
    let body_start = start_pos + start.len_utf8();
    let body_end = find_body_end(text, body_start, delimiters)?;
    let extended = text[body_end + delimiters.end.len_utf8()..].contains('x');

    let ranges = split_ranges(text, body_start..body_end, delimiters);

    Some(Segmentation {
        delimiters,
        body: body_start..body_end,
        segments: with_context(text, ranges),
        extended,
    })
}

/// Whitespace accepted before the start delimiter.
///
/// Includes vertical tab, unlike `char::is_ascii_whitespace`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Find the offset of the closing delimiter, honouring escapes and nesting.
fn find_body_end(text: &str, body_start: usize, delimiters: Delimiters) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = text[body_start..].char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            // A trailing lone backslash leaves the body unterminated.
            chars.next()?;
            continue;
        }
        if c == delimiters.end {
            depth -= 1;
            if depth == 0 {
                return Some(body_start + offset);
            }
        } else if delimiters.is_bracket() && c == delimiters.start {
            depth += 1;
        }
    }

    None
}

/// Split the body at every backslash that escapes the delimiter.
///
/// Each later range starts at the escaped delimiter itself, so only the
/// backslash is left out. Bracket delimiters never split.
fn split_ranges(text: &str, body: Range<usize>, delimiters: Delimiters) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut from = body.start;

    if !delimiters.is_bracket() {
        let mut chars = text[body.clone()].char_indices();
        while let Some((offset, c)) = chars.next() {
            if c != '\\' {
                continue;
            }
            if let Some((_, escaped)) = chars.next()
                && escaped == delimiters.start
            {
                let split = body.start + offset;
                ranges.push(from..split);
                from = split + 1;
            }
        }
    }

    ranges.push(from..body.end);
    ranges
}

/// Attach the text of the other segments as prefix and suffix context.
fn with_context(text: &str, ranges: Vec<Range<usize>>) -> Vec<Segment> {
    let texts: Vec<&str> = ranges.iter().map(|r| &text[r.clone()]).collect();

    ranges
        .into_iter()
        .enumerate()
        .map(|(i, range)| Segment {
            range,
            prefix: texts[..i].concat(),
            suffix: texts[i + 1..].concat(),
        })
        .collect()
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
