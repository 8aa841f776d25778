// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the output color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice for stdout.
    pub fn resolve(self) -> ColorChoice {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self {
            Self::Always => resolve_color(true, false),
            Self::Never => ColorChoice::Never,
            Self::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
            Self::Auto => resolve_color(false, no_color),
        }
    }
}

/// Combine an explicit force flag with `NO_COLOR`. `NO_COLOR` wins.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// File paths.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Embedded pattern text.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Dialect tags and context labels.
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Errors.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
