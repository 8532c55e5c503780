use crate::kernel::Effect;
use crate::models::{Buffer, Selection};

use super::action::EditorAction;
use super::format::{self, FormatOp, Formatted, UnknownFormatOp};
use super::state::EditorState;

impl EditorState {
    /// Routes one user intent. Returns whether the state changed plus the
    /// effects the host has to carry out.
    pub fn dispatch_action(&mut self, action: EditorAction) -> (bool, Vec<Effect>) {
        let name = action.name();
        let result = match action {
            EditorAction::ContentChanged { text } => self.replace_content(text),
            EditorAction::SetSelection { start, end } => self.set_selection(start, end),
            EditorAction::Format { op, start, end } => self.apply_format(op, start, end),
            EditorAction::Indent { start, end } => self.apply_indent(start, end),
            EditorAction::Undo => self.step_history(true),
            EditorAction::Redo => self.step_history(false),
            EditorAction::Rendered { version } => self.on_rendered(version),
        };

        if result.0 {
            tracing::debug!(
                action = name,
                version = self.version,
                history_cursor = ?self.history.cursor(),
                words = self.word_count,
                "editor action applied"
            );
        }
        result
    }

    // ==================== Host-facing API ====================

    pub fn content_changed(&mut self, text: impl Into<String>) -> (bool, Vec<Effect>) {
        self.dispatch_action(EditorAction::ContentChanged { text: text.into() })
    }

    pub fn format(&mut self, op: FormatOp, start: usize, end: usize) -> (bool, Vec<Effect>) {
        self.dispatch_action(EditorAction::Format { op, start, end })
    }

    /// Format request by toolbar name (`"bold"`, `"heading3"`, ...). Unknown
    /// names are a caller bug and are rejected without touching state.
    pub fn format_named(
        &mut self,
        name: &str,
        start: usize,
        end: usize,
    ) -> Result<(bool, Vec<Effect>), UnknownFormatOp> {
        let op: FormatOp = name.parse()?;
        Ok(self.format(op, start, end))
    }

    pub fn indent(&mut self, start: usize, end: usize) -> (bool, Vec<Effect>) {
        self.dispatch_action(EditorAction::Indent { start, end })
    }

    pub fn undo(&mut self) -> (bool, Vec<Effect>) {
        self.dispatch_action(EditorAction::Undo)
    }

    pub fn redo(&mut self) -> (bool, Vec<Effect>) {
        self.dispatch_action(EditorAction::Redo)
    }

    /// Second phase of a caret update: call once the view shows `version`.
    /// Yields the caret target if it still belongs to that content.
    pub fn rendered(&mut self, version: u64) -> Option<Selection> {
        let (_, effects) = self.dispatch_action(EditorAction::Rendered { version });
        effects.into_iter().find_map(|effect| match effect {
            Effect::MoveCaret(selection) => Some(selection),
            Effect::Render { .. } => None,
        })
    }

    // ==================== Reducers ====================

    fn replace_content(&mut self, text: String) -> (bool, Vec<Effect>) {
        if self.buffer.as_str() == text {
            return (false, Vec::new());
        }
        self.commit(Buffer::from(text))
    }

    fn set_selection(&mut self, start: usize, end: usize) -> (bool, Vec<Effect>) {
        let selection = self.requested_selection(start, end);
        if selection == self.selection {
            return (false, Vec::new());
        }
        self.selection = selection;
        (true, Vec::new())
    }

    fn apply_format(&mut self, op: FormatOp, start: usize, end: usize) -> (bool, Vec<Effect>) {
        let selection = self.requested_selection(start, end);
        let formatted = format::apply(&self.buffer, selection, op);
        tracing::trace!(op = %op, start, end, "format");
        self.commit_formatted(formatted)
    }

    fn apply_indent(&mut self, start: usize, end: usize) -> (bool, Vec<Effect>) {
        let selection = self.requested_selection(start, end);
        let unit = self.config.indent_unit();
        let formatted = format::indent(&self.buffer, selection, &unit);
        self.commit_formatted(formatted)
    }

    fn step_history(&mut self, backwards: bool) -> (bool, Vec<Effect>) {
        let entry = if backwards {
            self.history.undo()
        } else {
            self.history.redo()
        };
        let Some(entry) = entry else {
            return (false, Vec::new());
        };

        self.set_buffer(entry);
        // No caret restoration: the old caret is only kept inside the new text.
        let caret = self.selection;
        self.schedule_caret(caret);
        (true, vec![Effect::Render { version: self.version }])
    }

    fn on_rendered(&mut self, version: u64) -> (bool, Vec<Effect>) {
        match self.pending_caret {
            Some(pending) if pending.version == version => {
                self.pending_caret = None;
                (false, vec![Effect::MoveCaret(pending.selection)])
            }
            Some(pending) if pending.version < version => {
                self.pending_caret = None;
                (false, Vec::new())
            }
            _ => (false, Vec::new()),
        }
    }

    // ==================== Helpers ====================

    fn commit(&mut self, buffer: Buffer) -> (bool, Vec<Effect>) {
        self.set_buffer(buffer);
        self.history.record(self.buffer.clone());
        (true, vec![Effect::Render { version: self.version }])
    }

    fn commit_formatted(&mut self, formatted: Formatted) -> (bool, Vec<Effect>) {
        let (changed, effects) = self.commit(formatted.buffer);
        self.schedule_caret(formatted.selection);
        (changed, effects)
    }

    /// Host offsets can be stale by a frame: reorder and clamp them.
    fn requested_selection(&self, start: usize, end: usize) -> Selection {
        let len = self.buffer.len_chars();
        if start > len || end > len {
            tracing::debug!(start, end, len, "clamping stale selection");
        }
        Selection::new(start, end).clamp(len)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/reducer.rs"]
mod tests;
