// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The structured commit message and its text form.
//!
//! A message renders as:
//!
//! ```text
//! [fix](ngStyle): skip setting empty value when new style has the property
//!
//! Previously, all the properties in oldStyles are set to empty value once.
//! Using AngularJS with jQuery 3.3.1, this disables the CSS transition as
//! reported in jquery/jquery#4185.
//!
//! Broken: the old behaviour is gone.
//! Related: #16709
//! ```
//!
//! [`CommitMessage::parse`] reads that text back into the same fields.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::change_type::ChangeType;
use crate::conventions::CONVENTIONS;
use crate::error::Result;
use crate::normalize::{
    fits_wrapped_layout, normalize, normalize_broken_change, normalize_header, normalize_issue,
    normalize_issues, normalize_paragraph, normalize_paragraph_wrapped, to_lf,
};

// Header grammar: `[label](scope): subject`, scope optional.
// The pattern is hard-coded and covered by the parse tests.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^\[([a-z]+)\](?:\((.+?)\))?: (.+)$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );

/// Raw field values as a user enters them, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    /// Change type label, matched case-insensitively.
    pub change_type: String,
    pub scope: String,
    pub subject: String,
    pub details: String,
    pub broken: String,
    /// Comma-separated issue references.
    pub related: String,
    /// Wrap body paragraphs at the conventional width.
    pub wrap_text: bool,
}

impl Default for Fields {
    fn default() -> Self {
        Fields {
            change_type: String::new(),
            scope: String::new(),
            subject: String::new(),
            details: String::new(),
            broken: String::new(),
            related: String::new(),
            wrap_text: true,
        }
    }
}

/// A commit message split into its header, body and footer fields.
///
/// All fields are normalized on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    #[serde(rename = "type")]
    change_type: Option<ChangeType>,
    scope: String,
    subject: String,
    details: String,
    broken: String,
    related: String,
    wrap_text: bool,
}

impl CommitMessage {
    /// Build a message from raw field values, normalizing each one.
    pub fn new(
        change_type: ChangeType,
        scope: &str,
        subject: &str,
        details: &str,
        broken: &str,
        related: &str,
        wrap_text: bool,
    ) -> Self {
        CommitMessage {
            change_type: Some(change_type),
            scope: normalize_paragraph(scope),
            subject: normalize_paragraph(subject),
            details: normalize_paragraph_wrapped(details, wrap_text),
            broken: normalize_broken_change(broken, wrap_text),
            related: normalize_issues(related),
            wrap_text,
        }
    }

    /// Build a message from a bundle of raw fields, resolving the type label.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let change_type = fields.change_type.trim().parse::<ChangeType>()?;
        Ok(CommitMessage::new(
            change_type,
            &fields.scope,
            &fields.subject,
            &fields.details,
            &fields.broken,
            &fields.related,
            fields.wrap_text,
        ))
    }

    /// Message for text that does not follow the header grammar. The text is
    /// kept whole as details so nothing the user wrote is lost.
    fn fallback(message: &str) -> Self {
        CommitMessage {
            change_type: None,
            scope: String::new(),
            subject: String::new(),
            details: to_lf(message),
            broken: String::new(),
            related: String::new(),
            wrap_text: true,
        }
    }

    /// Parse text produced by [`CommitMessage::format`], or written by hand in
    /// the same layout.
    ///
    /// Text whose first line is not a header parses in fallback mode: no
    /// type, and the whole text as details. A header whose bracket label is
    /// not a known change type is an error.
    pub fn parse(message: &str) -> Result<Self> {
        let text = to_lf(message);
        let lines: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();

        let Some(captures) = lines.first().and_then(|line| HEADER_RE.captures(line)) else {
            return Ok(CommitMessage::fallback(&text));
        };

        let change_type = captures[1].parse::<ChangeType>()?;
        let scope = captures.get(2).map_or("", |m| m.as_str());
        let subject = captures.get(3).map_or("", |m| m.as_str());

        if lines.len() < 2 {
            return Ok(CommitMessage::new(change_type, scope, subject, "", "", "", true));
        }

        let (details, pos) = scan_details(&lines, 1);
        let (broken, pos) = scan_broken(&lines, pos);
        let related = scan_related(&lines, pos);

        Ok(CommitMessage::new(
            change_type,
            scope,
            subject,
            &details.text,
            &broken.text,
            &related,
            details.wrapped && broken.wrapped,
        ))
    }

    /// Render the canonical text form, without a trailing newline.
    pub fn format(&self) -> String {
        let Some(change_type) = self.change_type else {
            return self.details.clone();
        };

        let mut out = normalize_header(change_type, &self.scope, &self.subject);
        out.push('\n');

        if !self.details.trim().is_empty() {
            out.push('\n');
            out.push_str(&self.details);
            out.push('\n');
        }

        let has_broken = !self.broken.trim().is_empty();
        let has_related = !self.related.trim().is_empty();
        if has_broken || has_related {
            out.push('\n');
        }
        if has_broken {
            out.push_str(&self.broken);
            out.push('\n');
        }
        if has_related {
            for issue in self.related.split(CONVENTIONS.issue_delimiter) {
                out.push_str(CONVENTIONS.related_prefix);
                out.push_str(&normalize_issue(issue));
                out.push('\n');
            }
        }

        out.pop();
        out
    }

    /// The change type, or `None` for a message parsed in fallback mode.
    pub fn change_type(&self) -> Option<ChangeType> {
        self.change_type
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Breaking-change note including its `Broken: ` marker.
    pub fn broken(&self) -> &str {
        &self.broken
    }

    /// Related issues joined with the issue delimiter.
    pub fn related(&self) -> &str {
        &self.related
    }

    /// Iterate over the individual related issue references.
    pub fn related_issues(&self) -> impl Iterator<Item = &str> {
        self.related
            .split(CONVENTIONS.issue_delimiter)
            .filter(|issue| !issue.is_empty())
    }

    pub fn wrap_text(&self) -> bool {
        self.wrap_text
    }

    /// Returns true if the text this came from had no recognisable header.
    pub fn is_fallback(&self) -> bool {
        self.change_type.is_none()
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Lines taken from one region of the message.
#[derive(Debug, PartialEq, Eq)]
struct Block {
    text: String,
    /// False once a line shows the region was not written wrapped.
    wrapped: bool,
}

/// A breaking-change line starts with the marker; a line holding only the
/// marker counts too, since trimming drops its trailing space.
fn is_broken_change(line: &str) -> bool {
    line.starts_with(CONVENTIONS.broken_prefix) || line == CONVENTIONS.broken_prefix.trim_end()
}

/// Wrapped layout for breaking-change lines, where the marker is glued to
/// the first word and the pair may exceed the width.
fn fits_broken_layout(line: &str) -> bool {
    fits_wrapped_layout(line)
        || line
            .strip_prefix(CONVENTIONS.broken_prefix)
            .is_some_and(|word| !word.contains(char::is_whitespace))
}

fn is_related_issue(line: &str) -> bool {
    line.starts_with(CONVENTIONS.related_prefix) || line == CONVENTIONS.related_prefix.trim_end()
}

/// Collect lines from `start` until `stop` matches, returning the block and
/// the position of the first line not taken. `fits` decides whether a line
/// is consistent with wrapped output.
fn scan_until(
    lines: &[&str],
    start: usize,
    stop: impl Fn(&str) -> bool,
    fits: impl Fn(&str) -> bool,
) -> (Block, usize) {
    let mut block = Block {
        text: String::new(),
        wrapped: true,
    };
    let mut pos = start;
    while let Some(line) = lines.get(pos).copied().filter(|line| !stop(*line)) {
        if !fits(line) {
            block.wrapped = false;
        }
        block.text.push_str(line);
        block.text.push('\n');
        pos += 1;
    }
    (block, pos)
}

/// Body lines, up to the first footer line.
fn scan_details(lines: &[&str], start: usize) -> (Block, usize) {
    scan_until(
        lines,
        start,
        |line| is_broken_change(line) || is_related_issue(line),
        fits_wrapped_layout,
    )
}

/// Breaking-change lines, up to the first related-issue line, with the
/// marker removed.
fn scan_broken(lines: &[&str], start: usize) -> (Block, usize) {
    let (mut block, pos) = scan_until(lines, start, is_related_issue, fits_broken_layout);
    let bare_marker = CONVENTIONS.broken_prefix.trim_end();
    let rest = block.text.strip_prefix(CONVENTIONS.broken_prefix).or_else(|| {
        block
            .text
            .strip_prefix(bare_marker)
            .filter(|rest| rest.starts_with('\n'))
    });
    if let Some(rest) = rest {
        block.text = rest.to_string();
    }
    (block, pos)
}

/// Issue references from the remaining `Related: ` lines, delimiter-joined.
fn scan_related(lines: &[&str], start: usize) -> String {
    let issues: Vec<&str> = lines
        .iter()
        .skip(start)
        .filter_map(|line| line.strip_prefix(CONVENTIONS.related_prefix))
        .map(str::trim)
        .filter(|issue| !issue.is_empty())
        .collect();
    normalize(&issues.join(&CONVENTIONS.issue_delimiter.to_string()))
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
