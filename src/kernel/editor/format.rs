//! Markdown formatting engine.
//!
//! Pure functions from `(buffer, selection, operation)` to a new buffer and the
//! selection the editing surface should show afterwards. Nothing here touches
//! editor state.

use crate::models::{Buffer, Selection};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatOp {
    Bold,
    Italic,
    Code,
    UnorderedList,
    OrderedList,
    Heading(HeadingLevel),
    Link,
    Quote,
    Formula,
}

impl FormatOp {
    /// Toolbar order.
    pub const ALL: [FormatOp; 14] = [
        FormatOp::Bold,
        FormatOp::Italic,
        FormatOp::Code,
        FormatOp::UnorderedList,
        FormatOp::OrderedList,
        FormatOp::Heading(HeadingLevel(1)),
        FormatOp::Heading(HeadingLevel(2)),
        FormatOp::Heading(HeadingLevel(3)),
        FormatOp::Heading(HeadingLevel(4)),
        FormatOp::Heading(HeadingLevel(5)),
        FormatOp::Heading(HeadingLevel(6)),
        FormatOp::Link,
        FormatOp::Quote,
        FormatOp::Formula,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormatOp::Bold => "bold",
            FormatOp::Italic => "italic",
            FormatOp::Code => "code",
            FormatOp::UnorderedList => "unordered-list",
            FormatOp::OrderedList => "ordered-list",
            FormatOp::Heading(level) => match level.get() {
                1 => "heading1",
                2 => "heading2",
                3 => "heading3",
                4 => "heading4",
                5 => "heading5",
                _ => "heading6",
            },
            FormatOp::Link => "link",
            FormatOp::Quote => "quote",
            FormatOp::Formula => "formula",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormatOp::Bold => "Bold",
            FormatOp::Italic => "Italic",
            FormatOp::Code => "Code",
            FormatOp::UnorderedList => "Unordered List",
            FormatOp::OrderedList => "Ordered List",
            FormatOp::Heading(level) => match level.get() {
                1 => "H1",
                2 => "H2",
                3 => "H3",
                4 => "H4",
                5 => "H5",
                _ => "H6",
            },
            FormatOp::Link => "Link",
            FormatOp::Quote => "Quote",
            FormatOp::Formula => "Formula",
        }
    }

    /// Wraps `text` in this operation's markup.
    ///
    /// Returns the formatted text and how many chars the caret steps back from
    /// the end of it. The step is non-zero only for empty `text`, so typing
    /// continues between the markers.
    fn wrap(&self, text: &str) -> (String, usize) {
        let empty = text.is_empty();
        let back = |n: usize| if empty { n } else { 0 };
        match self {
            FormatOp::Bold => (format!("**{text}**"), back(2)),
            FormatOp::Italic => (format!("*{text}*"), back(1)),
            FormatOp::Code => (format!("`{text}`"), back(1)),
            FormatOp::UnorderedList => (format!("- {text}"), 0),
            FormatOp::OrderedList => (format!("1. {text}"), 0),
            FormatOp::Heading(level) => {
                let hashes = "#".repeat(level.get() as usize);
                (format!("{hashes} {text}"), 0)
            }
            FormatOp::Link => (format!("[{text}](url)"), back(6)),
            FormatOp::Quote => (format!("> {text}"), 0),
            FormatOp::Formula => {
                let body = if empty { "formula" } else { text };
                (format!("$${body}$$"), back(7))
            }
        }
    }
}

impl fmt::Display for FormatOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormatOp(pub String);

impl fmt::Display for UnknownFormatOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format operation: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFormatOp {}

impl FromStr for FormatOp {
    type Err = UnknownFormatOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "bold" => FormatOp::Bold,
            "italic" => FormatOp::Italic,
            "code" => FormatOp::Code,
            "unordered-list" => FormatOp::UnorderedList,
            "ordered-list" => FormatOp::OrderedList,
            "link" => FormatOp::Link,
            "quote" => FormatOp::Quote,
            "formula" => FormatOp::Formula,
            other => other
                .strip_prefix("heading")
                .and_then(|n| n.parse::<u8>().ok())
                .and_then(HeadingLevel::new)
                .map(FormatOp::Heading)
                .ok_or_else(|| UnknownFormatOp(s.to_string()))?,
        };
        Ok(op)
    }
}

/// Result of a buffer transformation: the new text and the selection to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub buffer: Buffer,
    pub selection: Selection,
}

/// Applies `op` to the selected span of `buffer`.
///
/// Quote always replaces the span from the start of the selection's line
/// through the selection end. Its text is the selection, or the line up to the
/// caret when nothing is selected. Every other operation wraps exactly the selected span (multi-line
/// spans are wrapped once, as one block).
pub fn apply(buffer: &Buffer, selection: Selection, op: FormatOp) -> Formatted {
    let selection = selection.clamp(buffer.len_chars());
    let (start, end) = (selection.start(), selection.end());

    if op == FormatOp::Quote {
        let line_start = buffer.line_start(start);
        let selected = buffer.slice(start, end);
        // A caret quotes its line up to the caret.
        let quoted = if selected.is_empty() {
            buffer.slice(line_start, end)
        } else {
            selected
        };
        let (formatted, _) = op.wrap(quoted);
        let caret = line_start + formatted.chars().count();
        return Formatted {
            buffer: buffer.splice(line_start, end, &formatted),
            selection: Selection::caret(caret),
        };
    }

    let (formatted, back) = op.wrap(buffer.slice(start, end));
    let caret = start + formatted.chars().count() - back;
    Formatted {
        buffer: buffer.splice(start, end, &formatted),
        selection: Selection::caret(caret),
    }
}

/// Indents with `unit`.
///
/// A caret inserts `unit` and moves past it. A non-empty selection gets `unit`
/// in front of every line it covers and stays selected over the indented block.
pub fn indent(buffer: &Buffer, selection: Selection, unit: &str) -> Formatted {
    let selection = selection.clamp(buffer.len_chars());
    let (start, end) = (selection.start(), selection.end());

    if selection.is_empty() {
        let caret = start + unit.chars().count();
        return Formatted {
            buffer: buffer.splice(start, end, unit),
            selection: Selection::caret(caret),
        };
    }

    let indented = buffer
        .slice(start, end)
        .split('\n')
        .map(|line| format!("{unit}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let new_end = start + indented.chars().count();
    Formatted {
        buffer: buffer.splice(start, end, &indented),
        selection: Selection::new(start, new_end),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/format.rs"]
mod tests;
