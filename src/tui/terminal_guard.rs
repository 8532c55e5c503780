//! Raw-mode session handling for the terminal host.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Side effects of taking over and handing back the terminal.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and bracketed paste, so pasted text arrives as a
/// single event instead of a burst of keystrokes.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::EnableBracketedPaste;
        use crossterm::execute;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBar
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::DisableBracketedPaste;
        use crossterm::execute;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            SetCursorStyle::DefaultUserShape
        );
        // Raw mode goes even when the screen could not be restored.
        let raw = disable_raw_mode();
        screen.and(raw)
    }
}

/// Shared handle that leaves the terminal exactly once.
#[derive(Clone)]
pub struct TerminalRestorer {
    left: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("leaving raw mode");
        self.ops.leave()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: TerminalRestorer {
                left: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restorer.restore() {
            tracing::warn!(error = %error, "terminal restore failed");
        }
    }
}

/// Raises the returned flag on SIGINT or SIGTERM. The event loop polls it and
/// shuts down normally. A second signal while the flag is already set exits
/// the process immediately.
#[cfg(unix)]
pub fn shutdown_flag() -> io::Result<Arc<AtomicBool>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::flag;

    let requested = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        flag::register_conditional_shutdown(signal, 128 + signal, Arc::clone(&requested))?;
        flag::register(signal, Arc::clone(&requested))?;
    }
    Ok(requested)
}

#[cfg(not(unix))]
pub fn shutdown_flag() -> io::Result<Arc<AtomicBool>> {
    Ok(Arc::new(AtomicBool::new(false)))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
