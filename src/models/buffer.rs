//! Immutable document text.
//!
//! A `Buffer` is replaced wholesale on every edit. Offsets used by the editor
//! kernel are character offsets (Unicode scalar values), never byte offsets.

use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Buffer {
    text: Arc<str>,
    len_chars: usize,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Self {
            len_chars: text.chars().count(),
            text: Arc::from(text),
        }
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte index of the given char offset. Offsets past the end map to the
    /// end of the text.
    pub fn char_to_byte(&self, char_idx: usize) -> usize {
        if char_idx >= self.len_chars {
            return self.text.len();
        }
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Text between two char offsets. Both offsets are clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = start.min(self.len_chars);
        let end = end.clamp(start, self.len_chars);
        &self.text[self.char_to_byte(start)..self.char_to_byte(end)]
    }

    /// New buffer with `[start, end)` replaced by `text`.
    pub fn splice(&self, start: usize, end: usize, text: &str) -> Buffer {
        let start = start.min(self.len_chars);
        let end = end.clamp(start, self.len_chars);
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);

        let mut out = String::with_capacity(self.text.len() - (end_byte - start_byte) + text.len());
        out.push_str(&self.text[..start_byte]);
        out.push_str(text);
        out.push_str(&self.text[end_byte..]);
        Buffer::from(out)
    }

    /// Char offset just past the last `\n` before `char_idx`, or 0.
    pub fn line_start(&self, char_idx: usize) -> usize {
        let before = self.slice(0, char_idx);
        match before.rfind('\n') {
            Some(byte) => before[..=byte].chars().count(),
            None => 0,
        }
    }

    /// Whitespace-delimited token count. Empty and all-whitespace text count 0.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Buffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Buffer {
    fn from(text: String) -> Self {
        let len_chars = text.chars().count();
        Self {
            text: Arc::from(text),
            len_chars,
        }
    }
}

impl PartialEq<str> for Buffer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Buffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({:?})", self.as_str())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/buffer.rs"]
mod tests;
