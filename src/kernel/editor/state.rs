use crate::kernel::services::ports::EditorConfig;
use crate::models::{Buffer, EditHistory, Selection};

/// Caret target waiting for the host to render the content it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCaret {
    pub version: u64,
    pub selection: Selection,
}

/// One editing session: the displayed buffer, its caret and its history.
///
/// This is the only writer of the buffer. Every change goes through
/// [`EditorState::dispatch_action`].
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(super) config: EditorConfig,
    pub(super) buffer: Buffer,
    pub(super) selection: Selection,
    pub(super) word_count: usize,
    pub(super) history: EditHistory,
    /// Bumped on every committed buffer change, including undo/redo.
    pub(super) version: u64,
    pub(super) pending_caret: Option<PendingCaret>,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            buffer: Buffer::empty(),
            selection: Selection::default(),
            word_count: 0,
            history: EditHistory::new(),
            version: 0,
            pending_caret: None,
        }
    }

    /// Session seeded with existing text. The seed is the oldest history
    /// entry, so undo can always get back to it.
    pub fn with_text(config: EditorConfig, text: &str) -> Self {
        let mut state = Self::new(config);
        state.buffer = Buffer::new(text);
        state.word_count = state.buffer.word_count();
        state.history.record(state.buffer.clone());
        state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pending_caret(&self) -> Option<PendingCaret> {
        self.pending_caret
    }

    /// Replaces the displayed buffer and everything derived from it.
    pub(super) fn set_buffer(&mut self, buffer: Buffer) {
        self.buffer = buffer;
        self.word_count = self.buffer.word_count();
        self.selection = self.selection.clamp(self.buffer.len_chars());
        self.version += 1;
        // A caret computed for older content must never be applied to this one.
        self.pending_caret = None;
    }

    pub(super) fn schedule_caret(&mut self, selection: Selection) {
        self.selection = selection;
        self.pending_caret = Some(PendingCaret {
            version: self.version,
            selection,
        });
    }
}
