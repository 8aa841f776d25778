// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the starting directory up to the git root looking for pregion.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Find pregion.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                // Stop at git root
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
