// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cmtrs - Library behind the `cmt` commit message tool.
//!
//! The message model itself lives in [`cmt_core`]; this crate adds the
//! command line surface, configuration, logging and the git-backed scope
//! query.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument definitions for every subcommand
//! - [`Config`] - Settings from `.cmt.toml` or the user config file
//! - [`ScopeQuery`] - Scopes used in earlier commits
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use cmtrs::Cli;
//!
//! let cli = Cli::parse_from(["cmt", "format", "-t", "fix", "-m", "handle eof"]);
//! cmtrs::run(cli)?;
//! ```

mod cli;
mod commands;
mod env;

pub mod config;
pub mod error;
pub mod logging;
pub mod scopes;

pub use cli::{Cli, Command, MessageArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use scopes::{ScopeQuery, ScopeResult};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command;
    if let Command::Completion { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "cmt", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::load(cli.directory)?;
    tracing::debug!(dir = %ctx.dir.display(), wrap = ctx.config.wrap, "resolved context");

    match command {
        Command::Format { message, output } => commands::format::run(&ctx, &message, output),
        Command::Parse { file, output } => commands::parse::run(&ctx, file.as_deref(), output),
        Command::Reformat { file, in_place } => {
            commands::reformat::run(&ctx, file.as_deref(), in_place)
        }
        Command::Scopes { max_count, output } => commands::scopes::run(&ctx, max_count, output),
        Command::Types { output } => commands::types::run(output),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
