// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exclude pattern utilities shared by the walker and adapters.

use std::path::Path;

use globset::GlobSet;

/// Check a path (relative to the scan root) against exclude globs.
///
/// Besides the full path, every ancestor directory is tried, so a pattern
/// naming a directory (`**/generated`) excludes everything below it.
pub fn is_excluded(path: &Path, patterns: &GlobSet) -> bool {
    if patterns.is_empty() {
        return false;
    }
    path.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .any(|p| patterns.is_match(p))
}

/// Normalize exclude patterns to glob patterns.
///
/// - `dir/` becomes `dir/**`
/// - `dir` (no wildcard) becomes `dir/**`
/// - anything with a wildcard is kept as-is
pub fn normalize_exclude_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(|p| {
            if p.contains('*') {
                p.clone()
            } else {
                format!("{}/**", p.trim_end_matches('/'))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
