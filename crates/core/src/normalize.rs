// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization for commit message fields.
//!
//! Every field goes through these functions once when a message is built,
//! whether the values come from a user or from parsing earlier output.

use crate::change_type::ChangeType;
use crate::conventions::CONVENTIONS;

/// Trim surrounding whitespace. Absent input is the empty string.
pub fn normalize(text: &str) -> String {
    text.trim().to_string()
}

/// Trim, then drop every carriage return so line splitting only sees `\n`.
pub fn to_lf(text: &str) -> String {
    text.trim().replace('\r', "")
}

/// Collapse a multi-line paragraph into one logical line.
pub fn normalize_paragraph(text: &str) -> String {
    to_lf(text).replace('\n', " ")
}

/// Collapse a paragraph and, when `wrap` is set, re-wrap it at the
/// conventional width.
pub fn normalize_paragraph_wrapped(text: &str, wrap: bool) -> String {
    let paragraph = normalize_paragraph(text);
    if wrap {
        wrap_paragraph(&paragraph, CONVENTIONS.wrap_width)
    } else {
        paragraph
    }
}

/// Greedily wrap text so no line exceeds `width` characters.
///
/// Lines only break at whitespace and runs of whitespace become a single
/// space. A word longer than `width` is kept whole on its own line.
/// Wrapping text that was already wrapped, after collapsing its newlines,
/// gives the same text back.
pub fn wrap_paragraph(text: &str, width: usize) -> String {
    wrap_words(text.split_whitespace(), width)
}

/// Greedily pack `words` into lines of at most `width` characters.
fn wrap_words<'a>(words: impl IntoIterator<Item = &'a str>, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in words {
        let word_width = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// Check whether a line could have come out of [`wrap_paragraph`].
///
/// Wrapped lines hold single-space separated words and only exceed the
/// width when they are one unbreakable word.
pub(crate) fn fits_wrapped_layout(line: &str) -> bool {
    let mut previous_space = true;
    for c in line.chars() {
        if c.is_whitespace() {
            if c != ' ' || previous_space {
                return false;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
    }
    if previous_space && !line.is_empty() {
        return false;
    }

    line.chars().count() <= CONVENTIONS.wrap_width || !line.contains(' ')
}

/// Normalize a breaking-change note, making sure it carries the marker.
///
/// When wrapping, the marker stays on the same line as the first word of
/// the note, even if that word alone fills the line.
pub fn normalize_broken_change(text: &str, wrap: bool) -> String {
    let broken = normalize_paragraph(text);
    let marker = CONVENTIONS.broken_prefix;
    let note = broken
        .strip_prefix(marker)
        .unwrap_or(&broken)
        .trim_start();
    if note.is_empty() || note == marker.trim_end() {
        return String::new();
    }
    if !wrap {
        return format!("{marker}{note}");
    }

    let mut words = note.split_whitespace();
    let lead = match words.next() {
        Some(first) => format!("{marker}{first}"),
        None => return String::new(),
    };
    wrap_words(std::iter::once(lead.as_str()).chain(words), CONVENTIONS.wrap_width)
}

/// Check if text is a non-empty run of decimal digits.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Canonicalize a single issue reference: bare numbers gain a `#`.
pub fn normalize_issue(text: &str) -> String {
    let issue = normalize(text);
    if is_numeric(&issue) {
        format!("{}{}", CONVENTIONS.issue_number_prefix, issue)
    } else {
        issue
    }
}

/// Canonicalize a delimited list of issue references, dropping blanks.
pub fn normalize_issues(text: &str) -> String {
    let delimiter = CONVENTIONS.issue_delimiter;
    normalize(text)
        .split(delimiter)
        .map(normalize_issue)
        .filter(|issue| !issue.is_empty())
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Assemble the header line: `[type](scope): subject`.
pub fn normalize_header(change_type: ChangeType, scope: &str, subject: &str) -> String {
    let mut header = format!("[{}]", change_type.as_str());
    if !scope.trim().is_empty() {
        header.push('(');
        header.push_str(scope);
        header.push(')');
    }
    header.push_str(": ");
    header.push_str(subject);
    header
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
