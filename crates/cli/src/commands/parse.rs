// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use cmt_core::CommitMessage;

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{read_message, Context};

pub fn run(ctx: &Context, file: Option<&Path>, output: OutputFormat) -> Result<()> {
    let text = read_message(ctx, file)?;
    println!("{}", render(&text, output)?);
    Ok(())
}

pub(crate) fn render(text: &str, output: OutputFormat) -> Result<String> {
    let message = CommitMessage::parse(text)?;
    if message.is_fallback() {
        tracing::debug!("no header found, keeping text as details");
    }
    match output {
        OutputFormat::Text => Ok(render_text(&message)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&message)?),
    }
}

/// One `name: value` entry per field; continuation lines are indented.
fn render_text(message: &CommitMessage) -> String {
    let change_type = message
        .change_type()
        .map_or("(none)", |change_type| change_type.as_str());
    let related = message.related_issues().collect::<Vec<_>>().join(" ");
    let wrap = message.wrap_text().to_string();

    let mut out = String::new();
    for (name, value) in [
        ("type", change_type),
        ("scope", message.scope()),
        ("subject", message.subject()),
        ("details", message.details()),
        ("broken", message.broken()),
        ("related", related.as_str()),
        ("wrap", wrap.as_str()),
    ] {
        push_field(&mut out, name, value);
    }
    out.pop();
    out
}

fn push_field(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push(':');
    for (i, line) in value.lines().enumerate() {
        out.push_str(if i == 0 { " " } else { "\n  " });
        out.push_str(line);
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
