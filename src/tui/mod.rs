//! Terminal host (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the editing core has no terminal
//! dependency and can sit behind other frontends.

pub mod app;
pub mod render;
pub mod surface;
pub mod terminal_guard;

pub use app::App;
pub use surface::{SurfaceOutcome, TextSurface};
pub use terminal_guard::TerminalGuard;
