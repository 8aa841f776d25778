// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file reading.
//!
//! Small files are read into a `String`; large ones are memory-mapped and
//! validated as UTF-8 on access. Non-UTF-8 files cannot hold PHP string
//! values we could report ranges for, so callers skip them.

// memmap2 requires unsafe. The handle is freshly opened and the mapping is
// never written; a file changing underneath a scan only yields stale results.
#![allow(unsafe_code)]

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a source file.
pub enum FileContent {
    /// Small file read into memory.
    Owned(String),
    /// Large file memory-mapped.
    Mapped(Mmap),
    /// Small file that is not valid UTF-8.
    NotText,
}

impl FileContent {
    /// Read a file, choosing the strategy by size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            return match fs::read_to_string(path) {
                Ok(s) => Ok(FileContent::Owned(s)),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(FileContent::NotText),
                Err(e) => Err(e),
            };
        }

        let file = File::open(path)?;
        // SAFETY: see the module-level note on unsafe_code.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(FileContent::Mapped(mmap))
    }

    /// Content as text, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(s) => Some(s),
            FileContent::Mapped(m) => std::str::from_utf8(m).ok(),
            FileContent::NotText => None,
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
