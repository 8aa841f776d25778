// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration loading.

use crate::prelude::*;

#[test]
fn invalid_toml_is_config_error() {
    let temp = Project::empty();
    temp.config("version = \n");

    pregion_cmd()
        .args(["scan"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::empty();
    temp.config("version = 7\n");

    pregion_cmd()
        .args(["scan"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version"));
}

#[test]
fn unknown_keys_warn_but_scan_runs() {
    let temp = Project::empty();
    temp.config("version = 1\n[scan]\ncolour = true\n");

    pregion_cmd()
        .args(["scan"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scan.colour"));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::empty();

    pregion_cmd()
        .args(["scan", "-C", "nope.toml"])
        .current_dir(temp.path())
        .assert()
        .code(2);
}

#[test]
fn config_env_var_selects_file() {
    let temp = Project::empty();
    temp.file("settings/pregion.toml", "version = 1\n[scan]\nparse_all_strings = true\n");
    temp.file("a.php", "<?php $re = '/x+/';");

    pregion_cmd()
        .args(["scan", "--no-color"])
        .env("PREGION_CONFIG", "settings/pregion.toml")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("a.php:1:14: regex /x+/\n"));
}

#[test]
fn configured_extensions_replace_defaults() {
    let temp = Project::empty();
    temp.config("version = 1\n[php]\nextensions = [\"module\"]\n");
    temp.file("hooks.module", "<?php preg_match('/hook/', $s);");
    temp.file("a.php", "<?php preg_match('/php/', $s);");

    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("hooks.module:1:19: regex /hook/\n"))
        .stdout(predicates::str::contains("/php/").not());
}

#[test]
fn configured_excludes_apply() {
    let temp = Project::empty();
    temp.config("version = 1\n[scan]\nexclude = [\"generated\"]\n");
    temp.file("generated/Proxy.php", "<?php preg_match('/proxy/', $s);");
    temp.file("src/A.php", "<?php preg_match('/a/', $s);");

    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("/proxy/").not())
        .stdout(predicates::str::contains("1 injection in 1 file scanned\n"));
}

#[test]
fn verbose_flag_enables_debug_logging() {
    let temp = Project::empty();
    temp.file("a.php", "<?php preg_match('/a/', $s);");

    pregion_cmd()
        .args(["scan", "-v"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("DEBUG"));
}
