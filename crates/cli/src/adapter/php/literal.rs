// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String literal decoding.
//!
//! Turns the source spelling of a PHP string into the value it represents,
//! keeping a map from every decoded byte back to its source offset so ranges
//! found in the value can be reported against the file.

use std::ops::Range;

/// Decoded literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub value: String,
    /// Source offset for each byte of `value`, plus one trailing entry for
    /// the end of the contents.
    pub offsets: Vec<usize>,
    /// The literal interpolates variables, so its value is not static.
    pub interpolated: bool,
}

struct Builder {
    value: String,
    offsets: Vec<usize>,
}

impl Builder {
    fn with_capacity(len: usize) -> Self {
        Self {
            value: String::with_capacity(len),
            offsets: Vec::with_capacity(len + 1),
        }
    }

    fn push(&mut self, c: char, source: usize) {
        self.value.push(c);
        self.offsets.extend(std::iter::repeat_n(source, c.len_utf8()));
    }

    fn finish(mut self, end: usize, interpolated: bool) -> Decoded {
        self.offsets.push(end);
        Decoded {
            value: self.value,
            offsets: self.offsets,
            interpolated,
        }
    }
}

/// Decode the contents (between the quotes) of a single-quoted string.
///
/// Only `\\` and `\'` are escapes; every other backslash is literal.
pub fn decode_single_quoted(src: &str, contents: Range<usize>) -> Decoded {
    let text = &src[contents.clone()];
    let mut out = Builder::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let at = contents.start + i;
        if c == '\\'
            && let Some(&(_, next @ ('\\' | '\''))) = chars.peek()
        {
            chars.next();
            out.push(next, at);
            continue;
        }
        out.push(c, at);
    }

    out.finish(contents.end, false)
}

/// Decode the contents (between the quotes) of a double-quoted string.
///
/// Unknown escapes are kept verbatim, as PHP does. Octal and `\x` escapes
/// above 0x7F decode to the Latin-1 character of that value.
pub fn decode_double_quoted(src: &str, contents: Range<usize>) -> Decoded {
    let text = &src[contents.clone()];
    let bytes = text.as_bytes();
    let mut out = Builder::with_capacity(text.len());
    let mut interpolated = false;
    let mut i = 0;

    while i < text.len() {
        let at = contents.start + i;
        let b = bytes[i];

        if b == b'$' && bytes.get(i + 1).is_some_and(|&n| is_name_start(n)) {
            interpolated = true;
        }
        if b == b'{' && bytes.get(i + 1) == Some(&b'$') {
            interpolated = true;
        }

        if b != b'\\' || i + 1 >= text.len() {
            let Some(c) = text[i..].chars().next() else {
                break;
            };
            out.push(c, at);
            i += c.len_utf8();
            continue;
        }

        let simple = match bytes[i + 1] {
            b'n' => Some('\n'),
            b't' => Some('\t'),
            b'r' => Some('\r'),
            b'v' => Some('\x0B'),
            b'e' => Some('\x1B'),
            b'f' => Some('\x0C'),
            b'\\' => Some('\\'),
            b'$' => Some('$'),
            b'"' => Some('"'),
            _ => None,
        };
        if let Some(c) = simple {
            out.push(c, at);
            i += 2;
            continue;
        }

        if let Some((c, len)) = numeric_escape(&text[i + 1..]) {
            out.push(c, at);
            i += 1 + len;
            continue;
        }

        // Unknown escape: keep the backslash, the next character is handled
        // on the following iteration.
        out.push('\\', at);
        i += 1;
    }

    out.finish(contents.end, interpolated)
}

/// Decode an octal, `\x` or `\u{}` escape. `rest` starts after the backslash.
/// Returns the character and the number of bytes consumed from `rest`.
fn numeric_escape(rest: &str) -> Option<(char, usize)> {
    let bytes = rest.as_bytes();
    match bytes.first()? {
        b'0'..=b'7' => {
            let len = bytes
                .iter()
                .take(3)
                .take_while(|b| matches!(b, b'0'..=b'7'))
                .count();
            let value = u32::from_str_radix(&rest[..len], 8).ok()? & 0xFF;
            Some((char::from_u32(value)?, len))
        }
        b'x' => {
            let len = bytes[1..]
                .iter()
                .take(2)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if len == 0 {
                return None;
            }
            let value = u32::from_str_radix(&rest[1..1 + len], 16).ok()?;
            Some((char::from_u32(value)?, 1 + len))
        }
        b'u' if bytes.get(1) == Some(&b'{') => {
            let close = rest.find('}')?;
            let digits = &rest[2..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(digits, 16).ok()?;
            Some((char::from_u32(value)?, close + 1))
        }
        _ => None,
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

impl Decoded {
    /// Map a range of the decoded value to a range of the source.
    pub fn source_range(&self, range: Range<usize>) -> Range<usize> {
        crate::adapter::map_range(&self.offsets, range)
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
