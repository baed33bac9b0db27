// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cmt_core::CommitMessage;

use crate::cli::{MessageArgs, OutputFormat};
use crate::error::{Error, Result};

use super::Context;

pub fn run(ctx: &Context, args: &MessageArgs, output: OutputFormat) -> Result<()> {
    println!("{}", render(ctx, args, output)?);
    Ok(())
}

/// Build the message and render it in the requested format.
pub(crate) fn render(ctx: &Context, args: &MessageArgs, output: OutputFormat) -> Result<String> {
    if args.r#type.trim().is_empty() {
        return Err(Error::FieldRequired { field: "type" });
    }
    if args.subject.trim().is_empty() {
        return Err(Error::FieldRequired { field: "subject" });
    }
    let fields = args.to_fields(ctx.config.wrap);
    let message = CommitMessage::from_fields(&fields)?;
    match output {
        OutputFormat::Text => Ok(message.format()),
        OutputFormat::Json => Ok(serde_json::to_string(&message)?),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
