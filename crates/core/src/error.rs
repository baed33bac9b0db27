// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cmt-core operations.

use thiserror::Error;

/// All possible errors that can occur in cmt-core operations.
///
/// Malformed messages are not errors: they parse in fallback mode. The only
/// hard failure is a well-formed header naming a category that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "unknown change type: '{0}'\n  hint: valid types are: feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert"
    )]
    ChangeTypeUnknown(String),
}

/// A specialized Result type for cmt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
