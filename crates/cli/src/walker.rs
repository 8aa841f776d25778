// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file discovery.
//!
//! Walks scan roots with the `ignore` crate, so `.gitignore` and hidden-file
//! rules apply, then filters by extension and exclude globs.

use std::path::{Path, PathBuf};

use globset::GlobSet;
use ignore::WalkBuilder;

use crate::adapter::common::patterns::{is_excluded, normalize_exclude_patterns};
use crate::adapter::glob::build_glob_set;

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth below each root (None = unlimited).
    pub max_depth: Option<usize>,
    /// Exclude patterns, as written in config (`vendor/`, `**/*.tpl.php`).
    pub exclude_patterns: Vec<String>,
    /// Extensions (without dots) to keep. Empty keeps everything.
    pub extensions: Vec<String>,
    /// Respect `.gitignore` files.
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            exclude_patterns: Vec::new(),
            extensions: Vec::new(),
            git_ignore: true,
            hidden: true,
        }
    }
}

/// A file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    /// Path relative to the root it was found under.
    pub relative: PathBuf,
}

/// Walk statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub files_excluded: usize,
    pub errors: usize,
}

pub struct FileWalker {
    config: WalkerConfig,
    excludes: GlobSet,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let excludes = build_glob_set(&normalize_exclude_patterns(&config.exclude_patterns));
        Self { config, excludes }
    }

    /// Collect matching files below `root`, sorted by path.
    ///
    /// A `root` naming a file yields that file alone, regardless of its
    /// extension. Unreadable entries are counted and logged, not fatal.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut stats = WalkStats::default();

        if root.is_file() {
            stats.files_found = 1;
            let relative = root.file_name().map(PathBuf::from).unwrap_or_default();
            let file = WalkedFile {
                path: root.to_path_buf(),
                relative,
            };
            return (vec![file], stats);
        }

        let walker = WalkBuilder::new(root)
            .max_depth(self.config.max_depth)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(false)
            .require_git(false)
            .hidden(self.config.hidden)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    stats.errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            if !self.has_wanted_extension(&path) {
                continue;
            }
            if is_excluded(&relative, &self.excludes) {
                tracing::debug!("excluded {}", relative.display());
                stats.files_excluded += 1;
                continue;
            }
            files.push(WalkedFile { path, relative });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        stats.files_found = files.len();
        (files, stats)
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
