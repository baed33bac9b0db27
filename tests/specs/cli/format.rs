// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format command tests.
//!
//! Each test runs in its own temp directory with `CMT_CONFIG_HOME` pointed
//! at it so no user configuration leaks in.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("cmt");
    cmd.current_dir(temp.path())
        .env("CMT_CONFIG_HOME", temp.path())
        .env_remove("CMT_LOG");
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

const DETAILS: &str = "Previously, all the properties in oldStyles are set to empty value once. \
Using AngularJS with jQuery 3.3.1, this disables the CSS transition as reported in jquery/jquery#4185.";

// =============================================================================
// Canonical layout
// =============================================================================

#[test]
fn format_header_only() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args(["format", "-t", "style", "-m", "fix eslint error"]));
    assert_eq!(out, "[style]: fix eslint error\n");
}

#[test]
fn format_full_message() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args([
        "format",
        "-t",
        "fix",
        "-s",
        "ngStyle",
        "-m",
        "skip setting empty value when new style has the property",
        "-d",
        DETAILS,
        "-r",
        "16709",
    ]));
    similar_asserts::assert_eq!(
        out.as_str(),
        "\
[fix](ngStyle): skip setting empty value when new style has the property

Previously, all the properties in oldStyles are set to empty value once.
Using AngularJS with jQuery 3.3.1, this disables the CSS transition as
reported in jquery/jquery#4185.

Related: #16709
"
    );
}

#[test]
fn format_breaking_change_is_wrapped_with_marker() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args([
        "format",
        "-t",
        "feat",
        "-s",
        "router",
        "-m",
        "drop reload shortcut",
        "-b",
        "The shortcut $router.reload() is removed. Call $route.reload() directly when a page needs to be reloaded after the URL changes.",
        "-r",
        "7925, #15002",
    ]));
    similar_asserts::assert_eq!(
        out.as_str(),
        "\
[feat](router): drop reload shortcut

Broken: The shortcut $router.reload() is removed. Call $route.reload()
directly when a page needs to be reloaded after the URL changes.
Related: #7925
Related: #15002
"
    );
}

#[test]
fn format_type_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args(["format", "-t", "DOCS", "-m", "readme"]));
    assert_eq!(out, "[docs]: readme\n");
}

// =============================================================================
// Wrapping
// =============================================================================

#[test]
fn format_no_wrap_keeps_details_on_one_line() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args(["format", "-t", "fix", "-m", "x", "--no-wrap", "-d", DETAILS]));
    assert_eq!(out, format!("[fix]: x\n\n{DETAILS}\n"));
}

#[test]
fn format_project_config_disables_wrap() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".cmt.toml"), "wrap = false\n").unwrap();

    let out = stdout(cmt(&temp).args(["format", "-t", "fix", "-m", "x", "-d", DETAILS]));
    assert_eq!(out, format!("[fix]: x\n\n{DETAILS}\n"));

    let out = stdout(cmt(&temp).args(["format", "-t", "fix", "-m", "x", "--wrap", "-d", DETAILS]));
    assert!(out.contains("once.\nUsing"), "{out}");
}

#[test]
fn format_user_config_disables_wrap() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "wrap = false\n").unwrap();
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();

    let out = stdout(
        cmt(&temp)
            .current_dir(&work)
            .args(["format", "-t", "fix", "-m", "x", "-d", DETAILS]),
    );
    assert_eq!(out, format!("[fix]: x\n\n{DETAILS}\n"));
}

#[test]
fn format_directory_flag_selects_config() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join(".cmt.toml"), "wrap = false\n").unwrap();

    let out = stdout(cmt(&temp).args(["-C", "project", "format", "-t", "fix", "-m", "x", "-d", DETAILS]));
    assert_eq!(out, format!("[fix]: x\n\n{DETAILS}\n"));
}

// =============================================================================
// Output formats and errors
// =============================================================================

#[test]
fn format_json_output() {
    let temp = TempDir::new().unwrap();
    let out = stdout(cmt(&temp).args(["format", "-t", "perf", "-s", "db", "-m", "cache", "-r", "4", "-o", "json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["type"], "perf");
    assert_eq!(json["scope"], "db");
    assert_eq!(json["related"], "#4");
}

#[yare::parameterized(
    unknown_type = { &["format", "-t", "feature", "-m", "x"], "unknown change type: 'feature'" },
    missing_subject = { &["format", "-t", "fix"], "--subject" },
    blank_subject = { &["format", "-t", "fix", "-m", " "], "cannot be empty" },
)]
fn format_rejects(args: &[&str], message: &str) {
    let temp = TempDir::new().unwrap();
    cmt(&temp)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[test]
fn format_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".cmt.toml"), "wrap = [").unwrap();
    cmt(&temp)
        .args(["format", "-t", "fix", "-m", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: config error"));
}
