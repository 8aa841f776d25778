// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host language adapters.
//!
//! An adapter turns a source file into the string literals it contains,
//! each tagged with the [`CallSite`] it occupies. The injection pipeline only
//! ever sees [`HostLiteral`] values, never language syntax.

use std::ops::Range;
use std::path::Path;

pub mod common;
pub mod glob;
pub mod php;

pub use php::PhpAdapter;

use crate::classify::CallSite;
use crate::config::Config;

/// A string literal found in host source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLiteral {
    /// Source byte range of the literal contents (inside the quotes).
    pub span: Range<usize>,
    /// Decoded value of the literal.
    pub value: String,
    /// Source offset of every byte of `value`, plus a trailing end entry.
    pub offsets: Vec<usize>,
    /// Position of the literal relative to the call receiving it.
    pub site: CallSite,
    /// The value depends on runtime interpolation and cannot host a pattern.
    pub interpolated: bool,
}

impl HostLiteral {
    /// Map a range of the decoded value to a source byte range.
    pub fn source_range(&self, range: Range<usize>) -> Range<usize> {
        map_range(&self.offsets, range)
    }
}

/// Map a decoded range through a per-byte offset table.
///
/// Out-of-bounds ends clamp to the final (end of contents) entry.
pub fn map_range(offsets: &[usize], range: Range<usize>) -> Range<usize> {
    let last = offsets.len().saturating_sub(1);
    let at = |i: usize| offsets.get(i.min(last)).copied().unwrap_or_default();
    at(range.start)..at(range.end)
}

/// Behavior a host language provides to the scanner.
pub trait Adapter: Send + Sync {
    /// Adapter name, used in logs.
    fn name(&self) -> &'static str;

    /// File extensions (without dots) this adapter handles.
    fn extensions(&self) -> &[String];

    /// Cheap pre-check: can this content contain a recognized call at all?
    ///
    /// Only consulted when the heuristic for all strings is disabled.
    fn may_contain_calls(&self, _content: &str) -> bool {
        true
    }

    /// All string literals in `content`, in source order.
    fn literals(&self, content: &str) -> Vec<HostLiteral>;
}

/// Registry selecting an adapter by file extension.
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Registry with every adapter at its default settings.
    pub fn new() -> Self {
        Self {
            adapters: vec![Box::new(PhpAdapter::new())],
        }
    }

    /// Registry configured from project settings.
    pub fn from_config(config: &Config) -> Self {
        Self {
            adapters: vec![Box::new(PhpAdapter::with_extensions(
                config.php.extensions.clone(),
            ))],
        }
    }

    /// Adapter responsible for `path`, if any.
    pub fn for_path(&self, path: &Path) -> Option<&dyn Adapter> {
        let ext = path.extension()?.to_str()?;
        self.adapters
            .iter()
            .find(|a| a.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|a| a.as_ref())
    }

    /// Every extension handled by some adapter.
    pub fn extensions(&self) -> Vec<String> {
        self.adapters
            .iter()
            .flat_map(|a| a.extensions().iter().cloned())
            .collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset to line/column conversion.
pub struct LineIndex {
    /// Offset of the first byte of every line.
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', content.as_bytes()).map(|i| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line and byte column of `offset`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&s| s <= offset).saturating_sub(1);
        (line + 1, offset - self.starts[line] + 1)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
