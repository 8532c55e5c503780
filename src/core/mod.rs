//! Core framework: commands and key events.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::Key;
