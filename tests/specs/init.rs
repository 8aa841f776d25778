// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `pregion init`.

use crate::prelude::*;

#[test]
fn init_creates_config_in_current_directory() {
    let temp = Project::empty();

    pregion_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created"));

    let config = std::fs::read_to_string(temp.path().join("pregion.toml")).unwrap();
    assert!(config.starts_with("version = 1\n"));
    assert!(config.contains("[scan]"));
    assert!(config.contains("[php]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing\n");

    pregion_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    let config = std::fs::read_to_string(temp.path().join("pregion.toml")).unwrap();
    assert!(config.contains("# existing"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing\n");

    pregion_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join("pregion.toml")).unwrap();
    assert!(!config.contains("# existing"));
    assert!(config.contains("parse_all_strings = false"));
}

#[test]
fn init_writes_to_explicit_config_path() {
    let temp = Project::empty();

    pregion_cmd()
        .args(["init", "-C", "custom.toml"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("custom.toml").exists());
    assert!(!temp.path().join("pregion.toml").exists());
}

#[test]
fn generated_config_is_accepted_by_scan() {
    let temp = Project::empty();
    pregion_cmd().args(["init"]).current_dir(temp.path()).assert().success();

    pregion_cmd()
        .args(["scan"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
