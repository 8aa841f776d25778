// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `pregion scan`.

use crate::prelude::*;

#[test]
fn scan_reports_patterns_in_preg_calls() {
    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "src/Controller.php:7:24: regex /^[a-z]+$/i\n",
        ))
        .stdout(predicates::str::contains("  86..94 ^[a-z]+$\n"))
        .stdout(predicates::str::contains("7 injections in 2 files scanned\n"));
}

#[test]
fn scan_skips_excluded_and_foreign_files() {
    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout(predicates::str::contains("vendored").not())
        .stdout(predicates::str::contains("ignored").not())
        .stdout(predicates::str::contains("html").not());
}

#[test]
fn scan_skips_interpolated_and_non_call_strings() {
    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout(predicates::str::contains("/not/").not())
        .stdout(predicates::str::contains("$prefix").not());
}

#[test]
fn scan_json_lists_every_injection() {
    let output = pregion_cmd()
        .args(["scan", "-o", "json"])
        .current_dir(fixture("basic"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["errors"], serde_json::json!([]));

    let injections = json["injections"].as_array().unwrap();
    assert_eq!(injections.len(), 7);

    let first = &injections[0];
    assert_eq!(first["file"], "src/Controller.php");
    assert_eq!(first["line"], 7);
    assert_eq!(first["column"], 24);
    assert_eq!(first["dialect"], "regex");
    assert_eq!(first["flags"], "i");
    assert_eq!(first["delimiters"]["start"], "/");
    assert_eq!(first["segments"][0]["text"], "^[a-z]+$");
}

#[test]
fn scan_json_marks_extended_patterns() {
    let output = pregion_cmd()
        .args(["scan", "-o", "json", "src/Controller.php"])
        .current_dir(fixture("basic"))
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let extended: Vec<_> = json["injections"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["dialect"] == "regex_comment")
        .collect();
    assert_eq!(extended.len(), 1);
    assert_eq!(extended[0]["line"], 13);
    assert_eq!(extended[0]["flags"], "x");
}

#[test]
fn scan_splits_escaped_delimiters() {
    let output = pregion_cmd()
        .args(["scan", "-o", "json", "src/Controller.php"])
        .current_dir(fixture("basic"))
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let split = json["injections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["line"] == 12)
        .unwrap();
    let segments = split["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["text"], "a");
    assert_eq!(segments[0]["suffix"], "#b");
    assert_eq!(segments[1]["text"], "#b");
    assert_eq!(segments[1]["prefix"], "a");
}

#[test]
fn scan_array_patterns_of_preg_replace() {
    pregion_cmd()
        .args(["scan", "--no-color", "src/Controller.php"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout(predicates::str::contains("src/Controller.php:10:26: regex #\\s+#\n"))
        .stdout(predicates::str::contains("src/Controller.php:10:35: regex ~-{2,}~\n"));
}

#[test]
fn scan_inline_template_tags() {
    pregion_cmd()
        .args(["scan", "--no-color", "src/view.phtml"])
        .current_dir(fixture("basic"))
        .assert()
        .success()
        .stdout(predicates::str::contains("src/view.phtml:2:22: regex /\\s+/\n"))
        .stdout(predicates::str::contains("1 injection in 1 file scanned\n"));
}

#[test]
fn scan_heuristic_is_off_by_default() {
    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(fixture("heuristic"))
        .assert()
        .success()
        .stdout(predicates::str::contains("0 injections in 1 file scanned\n"));
}

#[test]
fn parse_all_strings_flag_enables_heuristic() {
    pregion_cmd()
        .args(["scan", "--no-color", "--parse-all-strings"])
        .current_dir(fixture("heuristic"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "patterns.php:2:11: regex /^[^@\\s]+@[^@\\s]+$/\n",
        ))
        .stdout(predicates::str::contains("/usr/local/bin").not())
        .stdout(predicates::str::contains("1 injection in 1 file scanned\n"));
}

#[test]
fn scan_missing_path_is_internal_error() {
    let temp = Project::empty();
    pregion_cmd()
        .args(["scan", "does-not-exist"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("does-not-exist"));
}

#[test]
fn scan_respects_gitignore() {
    let temp = Project::empty();
    temp.file(".gitignore", "cache/\n");
    temp.file("cache/Compiled.php", "<?php preg_match('/cached/', $s);");
    temp.file("src/App.php", "<?php preg_match('/app/', $s);");

    pregion_cmd()
        .args(["scan", "--no-color"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("src/App.php:1:19: regex /app/\n"))
        .stdout(predicates::str::contains("cached").not());
}
