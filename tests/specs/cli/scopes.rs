// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scopes and types command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("cmt");
    cmd.current_dir(temp.path())
        .env("CMT_CONFIG_HOME", temp.path())
        .env_remove("CMT_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

fn repo(subjects: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init", "-q"]);
    for subject in subjects {
        git(temp.path(), &["commit", "--allow-empty", "-q", "-m", subject]);
    }
    temp
}

// =============================================================================
// scopes
// =============================================================================

#[test]
fn scopes_lists_unique_sorted_scopes() {
    let temp = repo(&[
        "[fix](parser): handle eof",
        "[feat](cli): add flag",
        "[fix](parser): again",
        "[docs]: no scope",
        "Initial import",
    ]);
    cmt(&temp)
        .arg("scopes")
        .assert()
        .success()
        .stdout("cli\nparser\n");
}

#[test]
fn scopes_max_count_limits_history() {
    let temp = repo(&["[feat](old): first", "[feat](new): second"]);
    cmt(&temp)
        .args(["scopes", "-n", "1"])
        .assert()
        .success()
        .stdout("new\n");
}

#[test]
fn scopes_max_count_from_config() {
    let temp = repo(&["[feat](old): first", "[feat](new): second"]);
    fs::write(temp.path().join(".cmt.toml"), "[scopes]\nmax_count = 1\n").unwrap();
    cmt(&temp).arg("scopes").assert().success().stdout("new\n");

    // The flag wins over the config.
    cmt(&temp)
        .args(["scopes", "--max-count", "2"])
        .assert()
        .success()
        .stdout("new\nold\n");
}

#[test]
fn scopes_json_output() {
    let temp = repo(&["[ci](actions): pin runner"]);
    let output = cmt(&temp).args(["scopes", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["scopes"], serde_json::json!(["actions"]));
}

#[test]
fn scopes_outside_repository_is_empty_but_succeeds() {
    let temp = TempDir::new().unwrap();
    cmt(&temp)
        .arg("scopes")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = cmt(&temp).args(["scopes", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"success\":false,\"scopes\":[]}\n"
    );
}

#[test]
fn scopes_directory_flag() {
    let temp = repo(&["[build](deps): bump"]);
    let other = TempDir::new().unwrap();
    let dir = temp.path().to_str().unwrap();
    cmt(&other)
        .args(["-C", dir, "scopes"])
        .assert()
        .success()
        .stdout("deps\n");
}

// =============================================================================
// types
// =============================================================================

#[test]
fn types_lists_labels_in_order() {
    let temp = TempDir::new().unwrap();
    let output = cmt(&temp).arg("types").output().unwrap();
    assert!(output.status.success());
    let labels: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect();
    assert_eq!(
        labels,
        vec![
            "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
            "revert"
        ]
    );
}

#[test]
fn types_json_output() {
    let temp = TempDir::new().unwrap();
    let output = cmt(&temp).args(["types", "-o", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["type"], "feat");
    assert_eq!(json[0]["title"], "Features");
    assert_eq!(json[0]["description"], "A new feature");
}
