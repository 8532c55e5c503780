//! mdpad - Markdown editing core.
//!
//! Modules:
//! - core: commands and key events
//! - models: buffer, selection, undo/redo history
//! - kernel: editor state, formatting engine, settings and key maps
//! - tui: terminal host (feature `tui`)

pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
