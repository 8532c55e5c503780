use crossterm::event::{self, Event, KeyEventKind};
use mdpad::core::Key;
use mdpad::kernel::services::adapters::{ensure_settings_file, load_settings};
use mdpad::tui::{render, App, TerminalGuard};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::atomic::Ordering;
use std::time::Duration;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let logging = logging::init();

    if let Err(error) = ensure_settings_file() {
        tracing::warn!(error = %error, "ensure_settings_file failed");
    }
    let settings = load_settings();

    // Optional seed file. It is only read, never written back.
    let initial_text = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(error) => {
                tracing::error!(path = %path, error = %error, "read seed file failed");
                return Err(error);
            }
        },
        None => None,
    };

    let mut app = App::new(&settings, initial_text.as_deref());

    let shutdown = mdpad::tui::terminal_guard::shutdown_flag()?;
    let guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while !app.should_quit() {
        if shutdown.load(Ordering::Relaxed) {
            tracing::info!("shutdown requested by signal");
            break;
        }

        terminal.draw(|f| render::draw(f, &mut app))?;
        // Caret targets only apply to content that is already on screen.
        if app.after_render() {
            terminal.draw(|f| render::draw(f, &mut app))?;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                app.handle_key(Key::from(key));
            }
            Event::Paste(text) => app.handle_paste(&text),
            _ => {}
        }
    }

    guard.restorer().restore()?;
    tracing::info!(
        words = app.editor().word_count(),
        history = app.editor().history().len(),
        "session ended"
    );
    // Point at the log file when logging was asked for explicitly.
    if let Some(logging) = logging.as_ref().filter(|_| std::env::var_os("MDPAD_LOG").is_some()) {
        eprintln!("mdpad: logs in {}", logging.log_dir().display());
    }
    Ok(())
}
