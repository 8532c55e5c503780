use crate::models::Selection;

/// Side effects the host must carry out after a dispatch.
///
/// Content and caret are separate effects: `Render` comes back from the action
/// that committed the text, `MoveCaret` only from the `Rendered` acknowledgement
/// for that same version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The buffer changed; redraw it (editing surface, preview, word count).
    Render { version: u64 },
    /// Apply this selection to the editing surface's native caret.
    MoveCaret(Selection),
}
