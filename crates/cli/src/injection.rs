// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex injection pipeline.
//!
//! Ties the pieces together for one literal: classify the call site, segment
//! the decoded value, and map every segment back into host source.

use std::ops::Range;

use crate::adapter::{Adapter, HostLiteral, LineIndex};
use crate::classify;
use crate::segment::{self, Delimiters, Segmentation};

/// Options controlling which literals are considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectOptions {
    /// Also consider literals outside recognized calls that look like a regex.
    pub parse_all_strings: bool,
}

/// Regex language injected into a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain PCRE.
    Regex,
    /// PCRE in extended mode, where `#` starts a comment.
    RegexComment,
}

impl Dialect {
    /// Dialect implied by a segmentation's mode flags.
    pub fn of(segmentation: &Segmentation) -> Self {
        if segmentation.extended {
            Self::RegexComment
        } else {
            Self::Regex
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::RegexComment => "regex_comment",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of an injected pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedSegment {
    /// Byte range into the decoded literal value.
    pub value_range: Range<usize>,
    /// Byte range into the host source file.
    pub source_range: Range<usize>,
    pub text: String,
    pub prefix: String,
    pub suffix: String,
}

/// A regex found inside a host string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// Source byte range of the literal contents.
    pub span: Range<usize>,
    /// Decoded literal value.
    pub value: String,
    /// 1-based line of the literal contents.
    pub line: usize,
    /// 1-based byte column of the literal contents.
    pub column: usize,
    pub delimiters: Delimiters,
    /// Mode flags after the closing delimiter.
    pub flags: String,
    pub dialect: Dialect,
    pub segments: Vec<InjectedSegment>,
}

/// Analyze a single literal, returning its injection if it hosts one.
pub fn analyze(literal: &HostLiteral, options: &InjectOptions, lines: &LineIndex) -> Option<Injection> {
    if literal.interpolated {
        return None;
    }

    let value = literal.value.as_str();
    if !classify::is_injection_site(&literal.site, value, options.parse_all_strings) {
        return None;
    }

    let segmentation = segment::segment(value)?;
    let dialect = Dialect::of(&segmentation);

    let segments = segmentation
        .segments
        .iter()
        .map(|s| InjectedSegment {
            value_range: s.range.clone(),
            source_range: literal.source_range(s.range.clone()),
            text: s.text(value).to_string(),
            prefix: s.prefix.clone(),
            suffix: s.suffix.clone(),
        })
        .collect();

    let (line, column) = lines.line_col(literal.span.start);
    Some(Injection {
        span: literal.span.clone(),
        value: literal.value.clone(),
        line,
        column,
        delimiters: segmentation.delimiters,
        flags: segmentation.flags(value).to_string(),
        dialect,
        segments,
    })
}

/// Find every injection in a host source file.
pub fn find_injections(adapter: &dyn Adapter, content: &str, options: &InjectOptions) -> Vec<Injection> {
    if !options.parse_all_strings && !adapter.may_contain_calls(content) {
        tracing::debug!(adapter = adapter.name(), "no recognized calls, skipping content");
        return Vec::new();
    }

    let lines = LineIndex::new(content);
    adapter
        .literals(content)
        .iter()
        .filter_map(|literal| analyze(literal, options, &lines))
        .collect()
}

#[cfg(test)]
#[path = "injection_tests.rs"]
mod tests;
