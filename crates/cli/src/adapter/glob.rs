// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob set construction.

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Build a GlobSet from pattern strings, skipping invalid ones.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => tracing::warn!("invalid glob pattern {}: {}", pattern, e),
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}
