// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `pregion segment`.

use crate::prelude::*;

fn segment_cmd(temp: &Project) -> std::process::Command {
    let mut cmd = pregion_cmd();
    cmd.current_dir(temp.path()).args(["segment", "--color", "never"]);
    cmd
}

#[test]
fn recognized_call_is_segmented() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--site", "call", "--function", "preg_match", "/ab+c/i"])
        .assert()
        .success()
        .stdout(
            "delimiters: / /\n\
             flags: i\n\
             dialect: regex\n\
             segment: 1..5 ab+c\n",
        );
}

#[test]
fn default_site_is_not_applicable() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .arg("/abc/")
        .assert()
        .code(1)
        .stdout("not applicable\n");
}

#[test]
fn heuristic_applies_with_parse_all_strings() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--parse-all-strings", "~^\\d+$~"])
        .assert()
        .success()
        .stdout(predicates::str::contains("segment: 1..6 ^\\d+$\n"));
}

#[test]
fn config_enables_heuristic() {
    let temp = Project::empty();
    temp.config("version = 1\n[scan]\nparse_all_strings = true\n");
    segment_cmd(&temp).arg("/abc/").assert().success();
}

#[test]
fn array_site_requires_array_accepting_function() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--site", "array", "--function", "preg_match", "/a/"])
        .assert()
        .code(1);
    segment_cmd(&temp)
        .args(["--site", "array", "--function", "preg_replace", "/a/"])
        .assert()
        .success();
}

#[test]
fn engine_only_skips_classification() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--engine-only", "(a(b)c)"])
        .assert()
        .success()
        .stdout(predicates::str::contains("delimiters: ( )\n"))
        .stdout(predicates::str::contains("segment: 1..6 a(b)c\n"));
}

#[test]
fn escaped_delimiter_splits_output() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--engine-only", "#a\\#b#"])
        .assert()
        .success()
        .stdout(predicates::str::contains("segment: 1..2 a\n    suffix: #b\n"))
        .stdout(predicates::str::contains("segment: 3..5 #b\n    prefix: a\n"));
}

#[test]
fn unterminated_pattern_is_not_applicable() {
    let temp = Project::empty();
    segment_cmd(&temp)
        .args(["--engine-only", "/abc"])
        .assert()
        .code(1)
        .stdout("not applicable\n");
}

#[test]
fn json_output_describes_segmentation() {
    let temp = Project::empty();
    let output = segment_cmd(&temp)
        .args(["-o", "json", "--site", "call", "/a b # c\n/x"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["applicable"], true);
    assert_eq!(json["dialect"], "regex_comment");
    assert_eq!(json["flags"], "x");
    assert_eq!(json["segments"][0]["text"], "a b # c\n");
}

#[test]
fn json_output_for_not_applicable() {
    let temp = Project::empty();
    let output = segment_cmd(&temp)
        .args(["-o", "json", "ab"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output), serde_json::json!({ "applicable": false }));
}
