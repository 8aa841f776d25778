// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel scan runner with error recovery.
//!
//! Scans files in parallel using rayon, isolating errors so one unreadable
//! file or adapter panic doesn't prevent other files from being scanned.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::adapter::AdapterRegistry;
use crate::file_reader::FileContent;
use crate::injection::{InjectOptions, Injection, find_injections};
use crate::walker::WalkedFile;

/// Result of scanning one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path as displayed in reports.
    pub path: PathBuf,
    pub injections: Vec<Injection>,
    /// Why the file could not be scanned.
    pub error: Option<String>,
}

impl FileReport {
    fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            injections: Vec::new(),
            error: Some(error),
        }
    }
}

/// The scan runner executes the injection pipeline over many files.
pub struct ScanRunner {
    options: InjectOptions,
}

impl ScanRunner {
    pub fn new(options: InjectOptions) -> Self {
        Self { options }
    }

    /// Scan all files and return one report per file, sorted by path.
    ///
    /// Files without an adapter are skipped. Errors are isolated: a read
    /// failure or panic only marks that file's report.
    pub fn run(&self, files: &[WalkedFile], registry: &AdapterRegistry) -> Vec<FileReport> {
        let mut reports: Vec<FileReport> = files
            .par_iter()
            .filter_map(|file| {
                let adapter = registry.for_path(&file.path)?;
                let display = display_path(file);

                let content = match FileContent::read(&file.path) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::warn!("cannot read {}: {}", file.path.display(), e);
                        return Some(FileReport::failed(display, e.to_string()));
                    }
                };
                let Some(text) = content.as_str() else {
                    tracing::debug!("skipping non-UTF-8 file {}", file.path.display());
                    return None;
                };

                // Catch panics to ensure error isolation
                let scanned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    find_injections(adapter, text, &self.options)
                }));
                match scanned {
                    Ok(injections) => {
                        tracing::debug!(
                            "scanned {} ({} injections)",
                            file.path.display(),
                            injections.len()
                        );
                        Some(FileReport {
                            path: display,
                            injections,
                            error: None,
                        })
                    }
                    Err(_) => Some(FileReport::failed(
                        display,
                        "internal error: scan panicked".to_string(),
                    )),
                }
            })
            .collect();

        reports.sort_by(|a, b| a.path.cmp(&b.path));
        reports
    }
}

/// Path as walked, without a leading `./`.
fn display_path(file: &WalkedFile) -> PathBuf {
    file.path
        .strip_prefix(".")
        .unwrap_or(&file.path)
        .to_path_buf()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
