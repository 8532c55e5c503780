//! Key chords as the key map sees them.
//!
//! A [`Key`] is a crossterm key code plus modifiers, normalized so that the
//! same chord always hashes the same way: shifted ASCII letters are stored as
//! the lowercase letter with `SHIFT` set, whether they come from the terminal
//! or from a settings string.

use std::fmt;
use std::str::FromStr;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalized()
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub fn ctrl_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL | KeyModifiers::SHIFT)
    }

    fn normalized(mut self) -> Self {
        if let KeyCode::Char(ch) = self.code {
            if ch.is_ascii_uppercase() {
                self.code = KeyCode::Char(ch.to_ascii_lowercase());
                self.modifiers |= KeyModifiers::SHIFT;
            }
        }
        self
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Renders chords the way the toolbar shows them, e.g. `Ctrl+Shift+Z`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, label) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
            (KeyModifiers::SUPER, "Super+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(label)?;
            }
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
            KeyCode::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(pub String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key chord: {:?}", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

/// Parses chords like `"ctrl+shift+z"`, `"Alt + 1"` or `"f5"`. Tokens are
/// case-insensitive; exactly one of them must be a key.
impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseKeyError(s.to_string());
        let mut modifiers = KeyModifiers::NONE;
        let mut code = None;

        for token in s.split('+').map(str::trim) {
            if token.is_empty() {
                return Err(invalid());
            }
            if let Some(flag) = modifier(token) {
                modifiers |= flag;
                continue;
            }
            let parsed = key_code(token).ok_or_else(invalid)?;
            if code.replace(parsed).is_some() {
                return Err(invalid());
            }
        }

        code.map(|code| Key::new(code, modifiers)).ok_or_else(invalid)
    }
}

fn modifier(token: &str) -> Option<KeyModifiers> {
    let flag = match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => KeyModifiers::CONTROL,
        "shift" => KeyModifiers::SHIFT,
        "alt" | "option" => KeyModifiers::ALT,
        "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
        _ => return None,
    };
    Some(flag)
}

fn key_code(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }

    let lower = token.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            return (1..=24).contains(&n).then_some(KeyCode::F(n));
        }
    };
    Some(code)
}
