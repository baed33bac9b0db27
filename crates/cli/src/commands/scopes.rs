// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::scopes::{ScopeQuery, ScopeResult};

use super::Context;

pub fn run(ctx: &Context, max_count: Option<usize>, output: OutputFormat) -> Result<()> {
    let result = ScopeQuery::new(&ctx.dir)
        .max_count(max_count.or(ctx.config.scopes.max_count))
        .execute();
    let out = render(&result, output)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

/// One scope per line, or the whole result as JSON.
pub(crate) fn render(result: &ScopeResult, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(result
            .scopes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

#[cfg(test)]
#[path = "scopes_tests.rs"]
mod tests;
