// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::MessageArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "cmt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write, read and tidy bracketed commit messages")]
#[command(
    long_about = "Write, read and tidy bracketed commit messages.\n\n\
    Messages look like `[fix](scope): subject`, followed by an optional body,\n\
    an optional `Broken: ` note and `Related: ` issue lines."
)]
pub struct Cli {
    /// Run as if cmt was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a commit message from its fields
    #[command(after_help = "\
Examples:
  cmt format -t fix -s parser -m \"handle eof\"       Header only
  cmt format -t feat -m \"add flag\" -r 12,34         With related issues
  cmt format -t feat -m \"drop v1\" -b \"v1 is gone\"   With a breaking change
  cmt format -t docs -m \"readme\" --no-wrap -d \"...\" Keep the body on one line")]
    Format {
        #[command(flatten)]
        message: MessageArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Split a commit message into its fields
    Parse {
        /// Message file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Rewrite a commit message in canonical form
    #[command(after_help = "\
Examples:
  cmt reformat msg.txt                 Print the canonical form
  cmt reformat --in-place \"$1\"         Use as a commit-msg hook")]
    Reformat {
        /// Message file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Write the result back to the file
        #[arg(long, short = 'i')]
        in_place: bool,
    },

    /// List scopes used in previous commits
    Scopes {
        /// Only look at the most recent N commits
        #[arg(long, short = 'n')]
        max_count: Option<usize>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// List the change types
    Types {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
