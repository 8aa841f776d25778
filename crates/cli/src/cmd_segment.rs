// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pregion segment` command implementation.
//!
//! Runs the classifier and the segmentation engine on one literal value.

use termcolor::StandardStream;

use pregion::classify;
use pregion::cli::{Cli, SegmentArgs};
use pregion::config;
use pregion::error::ExitCode;
use pregion::report;
use pregion::segment::segment;

/// Run the `pregion segment` command.
pub fn run(cli: &Cli, args: &SegmentArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let parse_all_strings = args.parse_all_strings || config.scan.parse_all_strings;

    let applicable = args.engine_only
        || classify::is_injection_site(&args.call_site(), &args.text, parse_all_strings);
    let segmentation = if applicable {
        segment(&args.text)
    } else {
        tracing::debug!("literal is not an injection site");
        None
    };

    let stdout = StandardStream::stdout(args.color.resolve());
    let mut out = stdout.lock();
    report::formatter_for(args.output).write_segmentation(
        &mut out,
        &args.text,
        segmentation.as_ref(),
    )?;

    Ok(if segmentation.is_some() {
        ExitCode::Success
    } else {
        ExitCode::NotApplicable
    })
}
