//! File logging for the terminal host. Stdout and stderr belong to the editor
//! screen, so every record goes to `<cache>/.mdpad/logs/mdpad.log.<date>`.
//!
//! The filter comes from `MDPAD_LOG` (same syntax as `RUST_LOG`), defaulting
//! to `mdpad=info`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "MDPAD_LOG";
const DEFAULT_FILTER: &str = "mdpad=info";

/// Keep alive for the whole session; dropping it flushes the writer thread.
pub struct LoggingGuard {
    _flush: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn log_dir() -> Option<PathBuf> {
    match mdpad::kernel::services::adapters::ensure_log_dir() {
        Ok(dir) => Some(dir),
        Err(_) => {
            let dir = std::env::temp_dir().join("mdpad-logs");
            std::fs::create_dir_all(&dir).ok().map(|_| dir)
        }
    }
}

/// Returns `None` when no log directory can be created or a subscriber is
/// already installed; the editor runs without logs in that case.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let (writer, flush) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, "mdpad.log"));
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_line_number(true),
        )
        .try_init()
        .ok()?;

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, panic = %info, "panic");
        previous(info);
    }));

    tracing::info!(log_dir = %log_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging started");
    Some(LoggingGuard {
        _flush: flush,
        log_dir,
    })
}
