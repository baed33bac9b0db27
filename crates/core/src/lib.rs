// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cmt-core: Shared library for the cmt commit message tool
//!
//! This crate provides the commit message model, its canonical text format,
//! and the parser that reads that text back. Everything here is pure and
//! free of I/O.

pub mod change_type;
pub mod conventions;
pub mod error;
pub mod message;
pub mod normalize;

pub use change_type::ChangeType;
pub use conventions::{Conventions, CONVENTIONS};
pub use error::{Error, Result};
pub use message::{CommitMessage, Fields};
