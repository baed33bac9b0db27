// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod format;
pub mod parse;
pub mod reformat;
pub mod scopes;
pub mod types;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Where a command runs and the configuration that applies there.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory (from `-C` or the process cwd).
    pub dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolve the working directory and load its configuration.
    pub fn load(directory: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let dir = match directory {
            Some(d) if d.is_absolute() => d,
            Some(d) => cwd.join(d),
            None => cwd,
        };
        let config = Config::discover(&dir)?;
        Ok(Context { dir, config })
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }
}

/// Returns true if `file` names standard input.
fn is_stdin(file: Option<&Path>) -> bool {
    file.is_none_or(|f| f == Path::new("-"))
}

/// Read a message from `file`, or from stdin when it is absent or `-`.
pub fn read_message(ctx: &Context, file: Option<&Path>) -> Result<String> {
    match file {
        Some(f) if !is_stdin(Some(f)) => Ok(fs::read_to_string(ctx.resolve(f))?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
