//! Locating a lorem token in an editor line
//!
//! Hosts that only know the cursor position hand over the current line and a column.
//! The token is the part of the word left of the cursor that starts at its first
//! `lorem`, so `xlorem3` yields `lorem3` and replacing it keeps the `x`.
//! Columns are character offsets; ranges returned are byte offsets into the line.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static TRAILING_COMMAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"lorem\S*\z").unwrap());

/// Token found left of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorCommand<'a> {
    /// `None` when the word under the cursor has no `lorem` in it
    pub command: Option<&'a str>,
    /// Byte range to replace; empty at the cursor when there is no command
    pub range: Range<usize>,
}

/// Find the command ending at `column`
pub fn command_at(line: &str, column: usize) -> CursorCommand<'_> {
    let cursor = byte_offset(line, column);
    let before = &line[..cursor];
    match TRAILING_COMMAND.find(before) {
        Some(found) => CursorCommand {
            command: Some(found.as_str()),
            range: found.start()..cursor,
        },
        None => CursorCommand {
            command: None,
            range: cursor..cursor,
        },
    }
}

/// Byte offset of a character column, clamped to the end of the line
pub fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

/// Leading whitespace of a line
pub fn leading_indent(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}

/// Indent every non-empty line after the first
pub fn indent_continuation(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
    out
}
