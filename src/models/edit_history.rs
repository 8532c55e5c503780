//! Linear undo/redo history of buffer snapshots.
//!
//! Every committed edit stores the full buffer. Recording after an undo
//! truncates the redo tail, so history never branches. There is no size cap:
//! the stack lives for one editing session.

use super::buffer::Buffer;

#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    entries: Vec<Buffer>,
    /// Index of the entry representing the current state; `None` while empty.
    cursor: Option<usize>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `buffer` as the new current state, discarding any redo tail.
    pub fn record(&mut self, buffer: Buffer) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let discarded = self.entries.len().saturating_sub(keep);
        self.entries.truncate(keep);
        self.entries.push(buffer);
        self.cursor = Some(keep);

        tracing::trace!(cursor = keep, discarded, "history record");
    }

    /// Steps back one entry. At the oldest entry (or when empty) this is a no-op.
    pub fn undo(&mut self) -> Option<Buffer> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        let prev = cursor - 1;
        self.cursor = Some(prev);
        self.entries.get(prev).cloned()
    }

    /// Steps forward one entry. At the newest entry this is a no-op.
    pub fn redo(&mut self) -> Option<Buffer> {
        let next = self.cursor?.checked_add(1)?;
        let entry = self.entries.get(next)?.clone();
        self.cursor = Some(next);
        Some(entry)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Buffer> {
        self.entries.get(self.cursor?)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|c| c + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Buffer] {
        &self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
