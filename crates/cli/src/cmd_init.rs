// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pregion init` command implementation.

use anyhow::Context;

use pregion::cli::{Cli, InitArgs};
use pregion::config::{CONFIG_FILE, DEFAULT_TEMPLATE};
use pregion::error::ExitCode;

/// Run the `pregion init` command.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.join(CONFIG_FILE),
    };

    if path.exists() && !args.force {
        eprintln!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&path, DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(ExitCode::Success)
}
