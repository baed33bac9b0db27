// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use cmt_core::CommitMessage;

use crate::error::{Error, Result};

use super::{is_stdin, read_message, Context};

pub fn run(ctx: &Context, file: Option<&Path>, in_place: bool) -> Result<()> {
    if in_place && is_stdin(file) {
        return Err(Error::InPlaceWithoutFile);
    }
    let text = read_message(ctx, file)?;
    let formatted = reformat(&text)?;

    match file {
        Some(path) if in_place => {
            let path = ctx.resolve(path);
            if formatted == text.trim_end() {
                tracing::debug!(path = %path.display(), "message already canonical");
            } else {
                fs::write(&path, format!("{formatted}\n"))?;
                tracing::info!(path = %path.display(), "rewrote message");
            }
        }
        _ => println!("{formatted}"),
    }
    Ok(())
}

const COMMENT_CHAR: char = '#';
const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// Parse `text` and render it back in canonical form.
///
/// Git comment lines are dropped first, along with everything below the
/// scissors line, since a `commit-msg` hook sees the file before git
/// cleans it up.
pub(crate) fn reformat(text: &str) -> Result<String> {
    Ok(CommitMessage::parse(&strip_comments(text))?.format())
}

fn strip_comments(text: &str) -> String {
    text.lines()
        .take_while(|line| line.trim_end() != SCISSORS_LINE)
        .filter(|line| !line.starts_with(COMMENT_CHAR))
        .map(|line| format!("{line}\n"))
        .collect()
}

#[cfg(test)]
#[path = "reformat_tests.rs"]
mod tests;
