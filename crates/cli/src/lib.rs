// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pregion: find regular expressions embedded in PHP string literals.
//!
//! The core is [`segment::segment`], which splits a delimited pattern into
//! the pieces a regex analyzer should see, and [`classify::is_injection_site`],
//! which decides whether a literal holds a pattern at all. The remaining
//! modules wire both into a file scanner.

pub mod adapter;
pub mod classify;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod injection;
pub mod report;
pub mod runner;
pub mod segment;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
