// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pregion::cli::{Cli, Command};
use pregion::error::exit_code_for;

mod cmd_init;
mod cmd_scan;
mod cmd_segment;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Scan(args) => cmd_scan::run(&cli, args),
        Command::Segment(args) => cmd_segment::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("pregion: {:#}", e);
            exit_code_for(&e).into()
        }
    }
}

/// Log to stderr, filtered by `PREGION_LOG` (default: warn, or debug with -v).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PREGION_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
