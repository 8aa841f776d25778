// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::classify::CallSite;
use crate::color::ColorMode;

/// Find regular expressions embedded in PHP string literals
#[derive(Parser)]
#[command(name = "pregion")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PREGION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan PHP sources for embedded patterns
    Scan(ScanArgs),
    /// Segment a single string literal value
    Segment(SegmentArgs),
    /// Initialize pregion configuration
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files or directories to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Treat every string that looks like a delimited regex as a pattern
    #[arg(long)]
    pub parse_all_strings: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = 100, value_name = "N")]
    pub max_depth: usize,
}

impl ScanArgs {
    /// Color mode after applying `--no-color`.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color
        }
    }
}

#[derive(clap::Args)]
pub struct SegmentArgs {
    /// Decoded literal value to segment
    pub text: String,

    /// Position of the literal relative to the receiving call
    #[arg(long, default_value = "none")]
    pub site: SiteKind,

    /// Function receiving the literal
    #[arg(long, default_value = "preg_match", value_name = "NAME")]
    pub function: String,

    /// Fall back to the regex heuristic outside recognized calls
    #[arg(long)]
    pub parse_all_strings: bool,

    /// Skip call site classification and segment unconditionally
    #[arg(long)]
    pub engine_only: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

impl SegmentArgs {
    /// Call site described by `--site` and `--function`.
    ///
    /// Names are taken as fully qualified; a missing leading `\` is added.
    pub fn call_site(&self) -> CallSite {
        let function = if self.function.starts_with('\\') {
            self.function.clone()
        } else {
            format!("\\{}", self.function)
        };
        match self.site {
            SiteKind::None => CallSite::Other,
            SiteKind::Call => CallSite::Argument { function },
            SiteKind::Array => CallSite::ArrayElement { function },
        }
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `--site` argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SiteKind {
    /// Not inside a recognized call
    #[default]
    None,
    /// Whole first argument of the call
    Call,
    /// Element of an array passed as first argument
    Array,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
