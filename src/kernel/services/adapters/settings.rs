//! Settings and log locations under the per-user cache directory.
//!
//! Layout: `<cache>/.mdpad/settings.json` and `<cache>/.mdpad/logs/`.

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::{Settings, SettingsError};
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".mdpad";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

fn app_dir() -> Option<PathBuf> {
    cache_root().map(|root| root.join(APP_DIR))
}

pub fn get_settings_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory for logs"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Creates the settings file with defaults on first run.
pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    write_default_settings(&path)?;
    Ok(path)
}

/// Writes `Settings::default()` to `path` unless a file is already there.
pub fn write_default_settings(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&Settings::default())?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote default settings");
    Ok(())
}

pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

/// The user's settings. A missing file means defaults; a broken one is logged
/// and also falls back to defaults so the editor still starts.
pub fn load_settings() -> Settings {
    let Some(path) = get_settings_path().filter(|p| p.exists()) else {
        return Settings::default();
    };
    read_settings(&path).unwrap_or_else(|error| {
        tracing::warn!(path = %path.display(), error = %error, "settings unreadable, using defaults");
        Settings::default()
    })
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    value.parse().ok()
}

pub fn parse_command(value: &str) -> Option<Command> {
    Command::from_name(value.trim())
}

/// Per-user cache root: `~/Library/Caches` on macOS, `%LOCALAPPDATA%` (or
/// `%APPDATA%`) on Windows, `$XDG_CACHE_HOME` (or `~/.cache`) elsewhere.
fn cache_root() -> Option<PathBuf> {
    let var = |name: &str| {
        std::env::var_os(name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Caches"))
    } else if cfg!(windows) {
        var("LOCALAPPDATA").or_else(|| var("APPDATA"))
    } else {
        var("XDG_CACHE_HOME").or_else(|| var("HOME").map(|home| home.join(".cache")))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
