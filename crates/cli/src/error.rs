// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors surfaced by the library outside the pure core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("cannot walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// `segment` found no applicable pattern.
    NotApplicable = 1,
    /// Configuration could not be loaded.
    ConfigError = 2,
    /// Unexpected failure.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Exit code for an error bubbling out of a command.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        Some(Error::Config { .. }) => ExitCode::ConfigError,
        _ => ExitCode::InternalError,
    }
}
