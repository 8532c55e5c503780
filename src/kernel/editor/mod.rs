//! Editor domain: headless state, actions and the formatting engine.

mod action;
pub mod format;
mod reducer;
mod state;

pub use action::EditorAction;
pub use format::{FormatOp, Formatted, HeadingLevel, UnknownFormatOp};
pub use state::{EditorState, PendingCaret};
