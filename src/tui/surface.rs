//! Plain-text editing surface.
//!
//! Plays the part of a native text area: it keeps its own copy of the text and
//! its own caret, edits them directly on keystrokes and reports the whole new
//! text to the editor kernel. The kernel pushes content back with
//! [`TextSurface::set_text`] and caret targets with [`TextSurface::set_selection`].

use crate::core::Command;
use crate::models::Selection;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOutcome {
    /// The text changed; carries the new full text.
    TextChanged(String),
    SelectionChanged,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    text: String,
    anchor: usize,
    cursor: usize,
}

impl TextSurface {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            anchor: 0,
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.anchor, self.cursor)
    }

    /// Replaces the text. The caret is kept where it was, clamped into range.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
        let len = self.len_chars();
        self.anchor = self.anchor.min(len);
        self.cursor = self.cursor.min(len);
    }

    pub fn set_selection(&mut self, selection: Selection) {
        let selection = selection.clamp(self.len_chars());
        self.anchor = selection.start();
        self.cursor = selection.end();
    }

    pub fn insert_str(&mut self, s: &str) -> SurfaceOutcome {
        let sel = self.selection();
        let start = self.byte(sel.start());
        let end = self.byte(sel.end());
        self.text.replace_range(start..end, s);
        self.cursor = sel.start() + s.chars().count();
        self.anchor = self.cursor;
        SurfaceOutcome::TextChanged(self.text.clone())
    }

    /// Runs a text-surface command. Editor commands are not handled here.
    pub fn apply(&mut self, command: Command) -> SurfaceOutcome {
        match command {
            Command::CursorLeft => self.move_to(self.left_target(), false),
            Command::CursorRight => self.move_to(self.right_target(), false),
            Command::CursorUp => self.move_to(self.vertical_target(true), false),
            Command::CursorDown => self.move_to(self.vertical_target(false), false),
            Command::CursorLineStart => self.move_to(self.line_start(self.cursor), false),
            Command::CursorLineEnd => self.move_to(self.line_end(self.cursor), false),
            Command::SelectLeft => self.move_to(self.prev_boundary(self.cursor), true),
            Command::SelectRight => self.move_to(self.next_boundary(self.cursor), true),
            Command::SelectUp => self.move_to(self.vertical_target(true), true),
            Command::SelectDown => self.move_to(self.vertical_target(false), true),
            Command::SelectAll => {
                self.anchor = 0;
                self.cursor = self.len_chars();
                SurfaceOutcome::SelectionChanged
            }
            Command::InsertNewline => self.insert_str("\n"),
            Command::DeleteBackward => self.delete(true),
            Command::DeleteForward => self.delete(false),
            Command::Indent
            | Command::Undo
            | Command::Redo
            | Command::Format(_)
            | Command::Quit => SurfaceOutcome::Unchanged,
        }
    }

    /// Caret as `(row, display column)`.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let line_start = self.line_start(self.cursor);
        let row = self.text[..self.byte(line_start)].matches('\n').count();
        let prefix = &self.text[self.byte(line_start)..self.byte(self.cursor)];
        (row, prefix.width())
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn move_to(&mut self, pos: usize, extend: bool) -> SurfaceOutcome {
        let before = (self.anchor, self.cursor);
        self.cursor = pos;
        if !extend {
            self.anchor = pos;
        }
        if before == (self.anchor, self.cursor) {
            SurfaceOutcome::Unchanged
        } else {
            SurfaceOutcome::SelectionChanged
        }
    }

    fn left_target(&self) -> usize {
        let sel = self.selection();
        if sel.is_empty() {
            self.prev_boundary(self.cursor)
        } else {
            sel.start()
        }
    }

    fn right_target(&self) -> usize {
        let sel = self.selection();
        if sel.is_empty() {
            self.next_boundary(self.cursor)
        } else {
            sel.end()
        }
    }

    fn delete(&mut self, backward: bool) -> SurfaceOutcome {
        let mut sel = self.selection();
        if sel.is_empty() {
            sel = if backward {
                Selection::new(self.prev_boundary(self.cursor), self.cursor)
            } else {
                Selection::new(self.cursor, self.next_boundary(self.cursor))
            };
        }
        if sel.is_empty() {
            return SurfaceOutcome::Unchanged;
        }
        self.anchor = sel.start();
        self.cursor = sel.end();
        self.insert_str("")
    }

    /// Char offsets of every grapheme boundary, including 0 and the end.
    fn boundaries(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.text.len() + 1);
        let mut pos = 0;
        out.push(0);
        for g in self.text.graphemes(true) {
            pos += g.chars().count();
            out.push(pos);
        }
        out
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.boundaries()
            .into_iter()
            .filter(|&b| b < pos)
            .last()
            .unwrap_or(0)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let len = self.len_chars();
        self.boundaries()
            .into_iter()
            .find(|&b| b > pos)
            .unwrap_or(len)
    }

    fn line_start(&self, pos: usize) -> usize {
        let before = &self.text[..self.byte(pos)];
        match before.rfind('\n') {
            Some(b) => before[..=b].chars().count(),
            None => 0,
        }
    }

    fn line_end(&self, pos: usize) -> usize {
        let from = self.byte(pos);
        match self.text[from..].find('\n') {
            Some(b) => pos + self.text[from..from + b].chars().count(),
            None => self.len_chars(),
        }
    }

    fn vertical_target(&self, up: bool) -> usize {
        let start = self.line_start(self.cursor);
        let col = self.cursor - start;
        if up {
            if start == 0 {
                return 0;
            }
            let prev_start = self.line_start(start - 1);
            (prev_start + col).min(start - 1)
        } else {
            let end = self.line_end(self.cursor);
            if end >= self.len_chars() {
                return self.len_chars();
            }
            let next_start = end + 1;
            (next_start + col).min(self.line_end(next_start))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/surface.rs"]
mod tests;
