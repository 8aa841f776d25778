// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::injection::{Dialect, InjectedSegment, Injection};
use crate::segment::Segmentation;

use super::{ReportFormatter, ScanSummary};

/// Text format formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_scan(&self, out: &mut dyn WriteColor, summary: &ScanSummary) -> io::Result<()> {
        for report in summary.reports {
            let path = report.path.display().to_string();
            for injection in &report.injections {
                write_injection(out, &path, injection)?;
            }
        }

        for report in summary.errors() {
            out.set_color(&scheme::path())?;
            write!(out, "{}", report.path.display())?;
            out.reset()?;
            write!(out, ": ")?;
            out.set_color(&scheme::error())?;
            write!(out, "error")?;
            out.reset()?;
            writeln!(out, ": {}", report.error.as_deref().unwrap_or_default())?;
        }

        let count = summary.injection_count();
        writeln!(
            out,
            "{} {} in {} {} scanned",
            count,
            plural(count, "injection", "injections"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
        )
    }

    fn write_segmentation(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        segmentation: Option<&Segmentation>,
    ) -> io::Result<()> {
        let Some(seg) = segmentation else {
            return writeln!(out, "not applicable");
        };

        write_label(out, "delimiters")?;
        writeln!(out, "{} {}", seg.delimiters.start, seg.delimiters.end)?;
        write_label(out, "flags")?;
        writeln!(out, "{}", seg.flags(text))?;
        write_label(out, "dialect")?;
        writeln!(out, "{}", Dialect::of(seg))?;

        for segment in &seg.segments {
            write_label(out, "segment")?;
            write!(out, "{}..{} ", segment.range.start, segment.range.end)?;
            write_pattern(out, segment.text(text))?;
            writeln!(out)?;
            write_context(out, &segment.prefix, &segment.suffix)?;
        }
        Ok(())
    }
}

fn write_injection(out: &mut dyn WriteColor, path: &str, injection: &Injection) -> io::Result<()> {
    out.set_color(&scheme::path())?;
    write!(out, "{}:{}:{}", path, injection.line, injection.column)?;
    out.reset()?;
    write!(out, ": ")?;
    out.set_color(&scheme::label())?;
    write!(out, "{}", injection.dialect)?;
    out.reset()?;
    writeln!(out, " {}", injection.value)?;

    for segment in &injection.segments {
        write_segment(out, segment)?;
    }
    Ok(())
}

fn write_segment(out: &mut dyn WriteColor, segment: &InjectedSegment) -> io::Result<()> {
    write!(
        out,
        "  {}..{} ",
        segment.source_range.start, segment.source_range.end
    )?;
    write_pattern(out, &segment.text)?;
    writeln!(out)?;
    write_context(out, &segment.prefix, &segment.suffix)
}

fn write_context(out: &mut dyn WriteColor, prefix: &str, suffix: &str) -> io::Result<()> {
    for (label, text) in [("prefix", prefix), ("suffix", suffix)] {
        if text.is_empty() {
            continue;
        }
        write!(out, "    ")?;
        write_label(out, label)?;
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

fn write_label(out: &mut dyn WriteColor, label: &str) -> io::Result<()> {
    out.set_color(&scheme::label())?;
    write!(out, "{}:", label)?;
    out.reset()?;
    write!(out, " ")
}

fn write_pattern(out: &mut dyn WriteColor, text: &str) -> io::Result<()> {
    out.set_color(&scheme::pattern())?;
    write!(out, "{}", text)?;
    out.reset()
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
