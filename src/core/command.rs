//! Semantic commands, independent of the keys that trigger them.
//!
//! Text-surface commands move the caret or edit the surface's own copy of the
//! text; editor commands go straight to the editor kernel.

use crate::kernel::editor::FormatOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Caret movement ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,

    // ==================== Selection ====================
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectAll,

    // ==================== Text surface edits ====================
    InsertNewline,
    DeleteBackward,
    DeleteForward,

    // ==================== Editor ====================
    Indent,
    Undo,
    Redo,
    Format(FormatOp),

    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::SelectLeft => "selectLeft",
            Command::SelectRight => "selectRight",
            Command::SelectUp => "selectUp",
            Command::SelectDown => "selectDown",
            Command::SelectAll => "selectAll",
            Command::InsertNewline => "insertNewline",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Indent => "indent",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Format(op) => op.name(),
            Command::Quit => "quit",
        }
    }

    /// Inverse of [`Command::name`]. Format operations use their toolbar names.
    pub fn from_name(name: &str) -> Option<Command> {
        let command = match name {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "selectLeft" => Command::SelectLeft,
            "selectRight" => Command::SelectRight,
            "selectUp" => Command::SelectUp,
            "selectDown" => Command::SelectDown,
            "selectAll" => Command::SelectAll,
            "insertNewline" => Command::InsertNewline,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "indent" => Command::Indent,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "quit" => Command::Quit,
            other => Command::Format(other.parse().ok()?),
        };
        Some(command)
    }

    /// Commands handled by the editor kernel rather than the text surface.
    pub fn is_editor_command(&self) -> bool {
        matches!(
            self,
            Command::Indent | Command::Undo | Command::Redo | Command::Format(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
