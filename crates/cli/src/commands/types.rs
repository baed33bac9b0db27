// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use cmt_core::ChangeType;

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Serialize)]
struct TypeEntry {
    #[serde(rename = "type")]
    change_type: ChangeType,
    title: &'static str,
    description: &'static str,
}

pub fn run(output: OutputFormat) -> Result<()> {
    println!("{}", render(output)?);
    Ok(())
}

pub(crate) fn render(output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(ChangeType::ALL
            .iter()
            .map(|t| format!("{:<8}  {}", t.as_str(), t.description()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<TypeEntry> = ChangeType::ALL
                .iter()
                .map(|&t| TypeEntry {
                    change_type: t,
                    title: t.title(),
                    description: t.description(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
