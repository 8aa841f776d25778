// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! Reads `pregion.toml`. Every section is optional; unknown keys are
//! reported as warnings rather than errors so older binaries keep working
//! with newer config files.

use std::path::Path;

use serde::Deserialize;

use crate::adapter::php::DEFAULT_EXTENSIONS;
use crate::error::{Error, Result};

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "pregion.toml";

/// Only supported config version.
pub const CONFIG_VERSION: i64 = 1;

/// Content written by `pregion init`.
pub const DEFAULT_TEMPLATE: &str = r#"version = 1

[scan]
# Treat every string that looks like a delimited regex as a pattern,
# not only preg_* arguments.
parse_all_strings = false
exclude = ["vendor/"]

[php]
extensions = ["php", "phtml", "inc"]
"#;

/// Project configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: i64,
    pub scan: ScanConfig,
    pub php: PhpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            scan: ScanConfig::default(),
            php: PhpConfig::default(),
        }
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Fall back to the regex heuristic for literals outside `preg_*` calls.
    pub parse_all_strings: bool,
    /// Paths to skip, as globs or directory names.
    pub exclude: Vec<String>,
}

/// `[php]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhpConfig {
    /// File extensions scanned as PHP, without dots.
    pub extensions: Vec<String>,
}

impl Default for PhpConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Known keys, per table. The empty name is the top level.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "scan", "php"]),
    ("scan", &["parse_all_strings", "exclude"]),
    ("php", &["extensions"]),
];

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != CONFIG_VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version, CONFIG_VERSION
            ),
        });
    }

    Ok(config)
}

/// Load a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Load a config file, logging a warning for every unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if let Ok(value) = toml::from_str::<toml::Table>(&content) {
        for key in unknown_keys(&value) {
            tracing::warn!("{}: unknown config key `{}`", path.display(), key);
        }
    }

    parse(&content, path)
}

/// Config for a run: the explicit file if given, otherwise the one
/// discovered from `start_dir`, otherwise defaults.
///
/// An explicit path that cannot be read is a config error.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let Some(path) = explicit else {
        return match crate::discovery::find_config(start_dir) {
            Some(found) => load_with_warnings(&found),
            None => Ok(Config::default()),
        };
    };

    load_with_warnings(path).map_err(|e| match e {
        Error::Io { path, source } => Error::Config {
            path,
            message: source.to_string(),
        },
        other => other,
    })
}

/// Dotted names of keys not recognized by this version.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        if !is_known("", key) {
            unknown.push(key.clone());
            continue;
        }
        if let toml::Value::Table(section) = value {
            for sub in section.keys() {
                if !is_known(key, sub) {
                    unknown.push(format!("{key}.{sub}"));
                }
            }
        }
    }
    unknown
}

fn is_known(table: &str, key: &str) -> bool {
    KNOWN_KEYS
        .iter()
        .find(|(name, _)| *name == table)
        .is_some_and(|(_, keys)| keys.contains(&key))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
