//! Data models: buffer, selection, history.

pub mod buffer;
pub mod edit_history;
pub mod selection;

pub use buffer::Buffer;
pub use edit_history::EditHistory;
pub use selection::Selection;
