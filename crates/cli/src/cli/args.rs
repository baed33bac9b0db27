// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

use cmt_core::Fields;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// The fields of a commit message as given on the command line.
#[derive(Args, Clone, Debug, Default)]
pub struct MessageArgs {
    /// Change type (feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub r#type: String,

    /// Scope of the change
    #[arg(long, short)]
    pub scope: Option<String>,

    /// One-line summary
    #[arg(long, short = 'm', value_parser = non_empty_string)]
    pub subject: String,

    /// Body paragraph
    #[arg(long, short)]
    pub details: Option<String>,

    /// Breaking-change note
    #[arg(long, short)]
    pub broken: Option<String>,

    /// Related issues (comma-separated or repeated)
    #[arg(long, short)]
    pub related: Vec<String>,

    /// Keep paragraphs on one line
    #[arg(long, conflicts_with = "wrap")]
    pub no_wrap: bool,

    /// Wrap paragraphs even when the config disables wrapping
    #[arg(long)]
    pub wrap: bool,
}

impl MessageArgs {
    /// Collect the raw fields, resolving the wrap flag against the
    /// configured default.
    pub fn to_fields(&self, wrap_by_default: bool) -> Fields {
        let wrap_text = if self.no_wrap {
            false
        } else {
            self.wrap || wrap_by_default
        };
        Fields {
            change_type: self.r#type.clone(),
            scope: self.scope.clone().unwrap_or_default(),
            subject: self.subject.clone(),
            details: self.details.clone().unwrap_or_default(),
            broken: self.broken.clone().unwrap_or_default(),
            related: self.related.join(","),
            wrap_text,
        }
    }
}
