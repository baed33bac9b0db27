// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope suggestions from version-control history.
//!
//! Previously used scopes are read from the subjects of existing commits.
//! The query never fails outright: when git is unavailable or the directory
//! is not a repository the result is simply unsuccessful and empty.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;

use cmt_core::CommitMessage;

use crate::error::{Error, Result};

/// Outcome of a scope query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeResult {
    /// Whether the history could be read.
    pub success: bool,
    /// Unique, sorted, non-blank scopes.
    pub scopes: BTreeSet<String>,
}

/// Query for the scopes used in a repository's history.
#[derive(Debug, Clone)]
pub struct ScopeQuery {
    dir: PathBuf,
    max_count: Option<usize>,
}

impl ScopeQuery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ScopeQuery {
            dir: dir.into(),
            max_count: None,
        }
    }

    /// Limit the query to the most recent `max_count` commits.
    pub fn max_count(mut self, max_count: Option<usize>) -> Self {
        self.max_count = max_count;
        self
    }

    /// Run the query.
    pub fn execute(&self) -> ScopeResult {
        match self.read_subjects() {
            Ok(subjects) => {
                let scopes = collect_scopes(subjects.lines());
                tracing::debug!(count = scopes.len(), "collected scopes from history");
                ScopeResult {
                    success: true,
                    scopes,
                }
            }
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), "scope query failed: {}", e);
                ScopeResult::default()
            }
        }
    }

    fn git_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--all".to_string(),
            "--format=%s".to_string(),
        ];
        if let Some(n) = self.max_count {
            args.push(format!("--max-count={n}"));
        }
        args
    }

    fn read_subjects(&self) -> Result<String> {
        let output = Command::new("git")
            .current_dir(&self.dir)
            .args(self.git_args())
            .output()
            .map_err(|e| Error::Git(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Extract the scopes of every subject that follows the header grammar.
pub fn collect_scopes<'a>(subjects: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    subjects
        .into_iter()
        .filter_map(|subject| CommitMessage::parse(subject).ok())
        .map(|message| message.scope().to_string())
        .filter(|scope| !scope.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "scopes_tests.rs"]
mod tests;
