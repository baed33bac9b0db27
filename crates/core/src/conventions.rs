// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed layout conventions of the commit message format.

/// Markers, delimiters and widths shared by formatting and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    /// Column at which body and breaking-change paragraphs wrap.
    pub wrap_width: usize,
    /// Leading marker of the breaking-change block.
    pub broken_prefix: &'static str,
    /// Leading marker of each related-issue footer line.
    pub related_prefix: &'static str,
    /// Separator of related issues in their stored form.
    pub issue_delimiter: char,
    /// Prefix added to bare issue numbers.
    pub issue_number_prefix: &'static str,
}

/// The conventions every message is written and read with.
pub const CONVENTIONS: Conventions = Conventions {
    // https://stackoverflow.com/a/2120040/5138796
    wrap_width: 72,
    broken_prefix: "Broken: ",
    related_prefix: "Related: ",
    issue_delimiter: ',',
    issue_number_prefix: "#",
};
