// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is read from the first of:
//! - `.cmt.toml` in the working directory or one of its parents
//! - `cmt/config.toml` under the user config directory
//!
//! When neither exists the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const PROJECT_CONFIG_FILE_NAME: &str = ".cmt.toml";
const USER_CONFIG_DIR_NAME: &str = "cmt";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Settings that shape how messages are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wrap body and breaking-change paragraphs unless `--no-wrap` is given.
    #[serde(default = "default_wrap")]
    pub wrap: bool,
    /// Scope suggestion settings.
    #[serde(default)]
    pub scopes: ScopesConfig,
}

/// Settings for the scope suggestion query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopesConfig {
    /// Only look at the most recent N commits (default: entire history).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
}

fn default_wrap() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wrap: default_wrap(),
            scopes: ScopesConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Loads the configuration that applies to `dir`, falling back to the
    /// defaults when no file is found.
    pub fn discover(dir: &Path) -> Result<Self> {
        match find_config_file(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Config::load(&path)
            }
            None => Ok(Config::default()),
        }
    }
}

/// Find the config file for `dir`: a project file walking up, then the
/// user file.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    find_project_config(dir).or_else(|| user_config_path().filter(|path| path.is_file()))
}

/// Find `.cmt.toml` by walking up from `dir`.
fn find_project_config(dir: &Path) -> Option<PathBuf> {
    let mut current = dir.to_path_buf();
    loop {
        let candidate = current.join(PROJECT_CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Path of the user-level config file.
///
/// Uses `CMT_CONFIG_HOME` if set, then `XDG_CONFIG_HOME`, then the platform
/// config directory.
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(home) = env::config_home() {
        return Some(home.join(USER_CONFIG_FILE_NAME));
    }
    env::xdg_config_home()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(USER_CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
