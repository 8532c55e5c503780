//! Headless editing core (state/action/effect).

pub mod editor;
pub mod effect;
pub mod services;

pub use editor::{EditorAction, EditorState, FormatOp};
pub use effect::Effect;
