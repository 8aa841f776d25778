// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting.
//!
//! Renders scan results and single-literal segmentations as colored text or
//! JSON.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::runner::FileReport;
use crate::segment::Segmentation;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Everything a scan produced.
pub struct ScanSummary<'a> {
    pub files_scanned: usize,
    pub reports: &'a [FileReport],
}

impl ScanSummary<'_> {
    /// Number of injections across all files.
    pub fn injection_count(&self) -> usize {
        self.reports.iter().map(|r| r.injections.len()).sum()
    }

    /// Reports that describe a failed file.
    pub fn errors(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| r.error.is_some())
    }
}

/// Trait for rendering results into an output format.
pub trait ReportFormatter {
    /// Write the result of `pregion scan`.
    fn write_scan(&self, out: &mut dyn WriteColor, summary: &ScanSummary) -> io::Result<()>;

    /// Write the result of `pregion segment`. `None` means not applicable.
    fn write_segmentation(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        segmentation: Option<&Segmentation>,
    ) -> io::Result<()>;
}

/// Formatter for the requested output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
