// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pregion scan` command implementation.

use std::path::PathBuf;

use termcolor::StandardStream;

use pregion::adapter::AdapterRegistry;
use pregion::cli::{Cli, ScanArgs};
use pregion::config;
use pregion::error::{Error, ExitCode};
use pregion::injection::InjectOptions;
use pregion::report::{self, ScanSummary};
use pregion::runner::ScanRunner;
use pregion::walker::{FileWalker, WalkerConfig};

/// Run the `pregion scan` command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let registry = AdapterRegistry::from_config(&config);
    let options = InjectOptions {
        parse_all_strings: args.parse_all_strings || config.scan.parse_all_strings,
    };
    let walker = FileWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth),
        exclude_patterns: config.scan.exclude.clone(),
        extensions: registry.extensions(),
        ..Default::default()
    });

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let mut files = Vec::new();
    for root in &roots {
        if !root.exists() {
            return Err(Error::Walk {
                path: root.clone(),
                message: "no such file or directory".to_string(),
            }
            .into());
        }
        let (found, stats) = walker.walk_collect(root);
        tracing::debug!(
            "{}: {} files, {} excluded, {} errors",
            root.display(),
            stats.files_found,
            stats.files_excluded,
            stats.errors
        );
        files.extend(found);
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);

    let reports = ScanRunner::new(options).run(&files, &registry);
    let summary = ScanSummary {
        files_scanned: reports.len(),
        reports: &reports,
    };

    let stdout = StandardStream::stdout(args.color_mode().resolve());
    let mut out = stdout.lock();
    report::formatter_for(args.output).write_scan(&mut out, &summary)?;

    Ok(ExitCode::Success)
}
