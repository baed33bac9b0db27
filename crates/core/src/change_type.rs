// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change categories recognised in the message header.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Category of a change, written as `[label]` at the start of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// Documentation only changes.
    Docs,
    /// Formatting changes that do not affect meaning.
    Style,
    /// Neither fixes a bug nor adds a feature.
    Refactor,
    /// Improves performance.
    Perf,
    /// Adds or corrects tests.
    Test,
    /// Build system or external dependencies.
    Build,
    /// CI configuration and scripts.
    Ci,
    /// Other changes that don't modify src or test files.
    Chore,
    /// Reverts a previous commit.
    Revert,
}

impl ChangeType {
    /// Every change type, in the order they are offered to users.
    pub const ALL: [ChangeType; 11] = [
        ChangeType::Feat,
        ChangeType::Fix,
        ChangeType::Docs,
        ChangeType::Style,
        ChangeType::Refactor,
        ChangeType::Perf,
        ChangeType::Test,
        ChangeType::Build,
        ChangeType::Ci,
        ChangeType::Chore,
        ChangeType::Revert,
    ];

    /// Returns the label written between the header brackets.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Feat => "feat",
            ChangeType::Fix => "fix",
            ChangeType::Docs => "docs",
            ChangeType::Style => "style",
            ChangeType::Refactor => "refactor",
            ChangeType::Perf => "perf",
            ChangeType::Test => "test",
            ChangeType::Build => "build",
            ChangeType::Ci => "ci",
            ChangeType::Chore => "chore",
            ChangeType::Revert => "revert",
        }
    }

    /// Returns the changelog-style section title.
    pub fn title(&self) -> &'static str {
        match self {
            ChangeType::Feat => "Features",
            ChangeType::Fix => "Bug Fixes",
            ChangeType::Docs => "Documentation",
            ChangeType::Style => "Styles",
            ChangeType::Refactor => "Code Refactoring",
            ChangeType::Perf => "Performance Improvements",
            ChangeType::Test => "Tests",
            ChangeType::Build => "Builds",
            ChangeType::Ci => "Continuous Integrations",
            ChangeType::Chore => "Chores",
            ChangeType::Revert => "Reverts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChangeType::Feat => "A new feature",
            ChangeType::Fix => "A bug fix",
            ChangeType::Docs => "Documentation only changes",
            ChangeType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)"
            }
            ChangeType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            ChangeType::Perf => "A code change that improves performance",
            ChangeType::Test => "Adding missing tests or correcting existing tests",
            ChangeType::Build => {
                "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)"
            }
            ChangeType::Ci => {
                "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)"
            }
            ChangeType::Chore => "Other changes that don't modify src or test files",
            ChangeType::Revert => "Reverts a previous commit",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(ChangeType::Feat),
            "fix" => Ok(ChangeType::Fix),
            "docs" => Ok(ChangeType::Docs),
            "style" => Ok(ChangeType::Style),
            "refactor" => Ok(ChangeType::Refactor),
            "perf" => Ok(ChangeType::Perf),
            "test" => Ok(ChangeType::Test),
            "build" => Ok(ChangeType::Build),
            "ci" => Ok(ChangeType::Ci),
            "chore" => Ok(ChangeType::Chore),
            "revert" => Ok(ChangeType::Revert),
            _ => Err(Error::ChangeTypeUnknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "change_type_tests.rs"]
mod tests;
