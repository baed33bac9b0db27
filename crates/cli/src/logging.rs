// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `CMT_LOG` (e.g. `CMT_LOG=debug`), defaulting to
//! warnings only so normal output stays clean.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env::vars;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_env(vars::CMT_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();
}
