// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::{self, Write};

use serde_json::{Value, json};
use termcolor::WriteColor;

use crate::injection::{Dialect, Injection};
use crate::segment::{Delimiters, Segmentation};

use super::{ReportFormatter, ScanSummary};

/// JSON format formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_scan(&self, out: &mut dyn WriteColor, summary: &ScanSummary) -> io::Result<()> {
        let injections: Vec<Value> = summary
            .reports
            .iter()
            .flat_map(|report| {
                let file = report.path.to_string_lossy().replace('\\', "/");
                report
                    .injections
                    .iter()
                    .map(move |injection| injection_json(&file, injection))
            })
            .collect();

        let errors: Vec<Value> = summary
            .errors()
            .map(|report| {
                json!({
                    "file": report.path.to_string_lossy().replace('\\', "/"),
                    "message": report.error,
                })
            })
            .collect();

        let output = json!({
            "files_scanned": summary.files_scanned,
            "injections": injections,
            "errors": errors,
        });
        write_value(out, &output)
    }

    fn write_segmentation(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        segmentation: Option<&Segmentation>,
    ) -> io::Result<()> {
        let Some(seg) = segmentation else {
            return write_value(out, &json!({ "applicable": false }));
        };

        let segments: Vec<Value> = seg
            .segments
            .iter()
            .map(|s| {
                json!({
                    "start": s.range.start,
                    "end": s.range.end,
                    "text": s.text(text),
                    "prefix": s.prefix,
                    "suffix": s.suffix,
                })
            })
            .collect();

        let output = json!({
            "applicable": true,
            "dialect": Dialect::of(seg).as_str(),
            "delimiters": delimiters_json(seg.delimiters),
            "flags": seg.flags(text),
            "body": { "start": seg.body.start, "end": seg.body.end },
            "segments": segments,
        });
        write_value(out, &output)
    }
}

fn injection_json(file: &str, injection: &Injection) -> Value {
    let segments: Vec<Value> = injection
        .segments
        .iter()
        .map(|s| {
            json!({
                "start": s.source_range.start,
                "end": s.source_range.end,
                "text": s.text,
                "prefix": s.prefix,
                "suffix": s.suffix,
            })
        })
        .collect();

    json!({
        "file": file,
        "line": injection.line,
        "column": injection.column,
        "dialect": injection.dialect.as_str(),
        "delimiters": delimiters_json(injection.delimiters),
        "flags": injection.flags,
        "segments": segments,
    })
}

fn delimiters_json(delimiters: Delimiters) -> Value {
    json!({
        "start": delimiters.start.to_string(),
        "end": delimiters.end.to_string(),
    })
}

fn write_value(out: &mut dyn WriteColor, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
