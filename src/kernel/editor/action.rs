use super::format::FormatOp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// The editing surface replaced its whole text (a keystroke, paste, cut).
    ContentChanged {
        text: String,
    },
    /// The editing surface moved its caret or selection. Not recorded.
    SetSelection {
        start: usize,
        end: usize,
    },
    Format {
        op: FormatOp,
        start: usize,
        end: usize,
    },
    Indent {
        start: usize,
        end: usize,
    },
    Undo,
    Redo,
    /// The host finished drawing the buffer at `version`.
    Rendered {
        version: u64,
    },
}

impl EditorAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::ContentChanged { .. } => "content_changed",
            EditorAction::SetSelection { .. } => "set_selection",
            EditorAction::Format { .. } => "format",
            EditorAction::Indent { .. } => "indent",
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::Rendered { .. } => "rendered",
        }
    }
}
