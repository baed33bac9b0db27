// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn cmt() -> Command {
    cargo_bin_cmd!("cmt")
}

/// A cmt command running in `temp` with the user config isolated to it.
pub fn cmt_in(temp: &TempDir) -> Command {
    let mut cmd = cmt();
    cmd.current_dir(temp.path())
        .env("CMT_CONFIG_HOME", temp.path())
        .env_remove("CMT_LOG");
    cmd
}

/// Helper to write a project config into `temp`
pub fn write_project_config(temp: &TempDir, content: &str) {
    std::fs::write(temp.path().join(".cmt.toml"), content).unwrap();
}
