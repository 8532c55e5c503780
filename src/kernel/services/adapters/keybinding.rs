//! Key map: key → command.
//!
//! Undo is Ctrl+Z and redo is Ctrl+Y by default. Anything else, including a
//! Ctrl+Shift+Z redo, is a settings rule away.

use super::settings::{parse_command, parse_keybinding};
use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::editor::{FormatOp, HeadingLevel};
use crate::kernel::services::ports::KeybindingRule;
use std::collections::HashMap;

pub struct KeybindingService {
    bindings: HashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut bindings = HashMap::new();

        // ==================== Caret ====================
        bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
        bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
        bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
        bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
        bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
        bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);

        // ==================== Selection ====================
        bindings.insert(Key::shift(KeyCode::Left), Command::SelectLeft);
        bindings.insert(Key::shift(KeyCode::Right), Command::SelectRight);
        bindings.insert(Key::shift(KeyCode::Up), Command::SelectUp);
        bindings.insert(Key::shift(KeyCode::Down), Command::SelectDown);
        bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);

        // ==================== Text surface ====================
        bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
        bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
        bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

        // ==================== Editor ====================
        bindings.insert(Key::simple(KeyCode::Tab), Command::Indent);
        bindings.insert(Key::ctrl(KeyCode::Char('z')), Command::Undo);
        bindings.insert(Key::ctrl(KeyCode::Char('y')), Command::Redo);

        bindings.insert(Key::alt(KeyCode::Char('b')), Command::Format(FormatOp::Bold));
        bindings.insert(Key::alt(KeyCode::Char('i')), Command::Format(FormatOp::Italic));
        bindings.insert(Key::alt(KeyCode::Char('c')), Command::Format(FormatOp::Code));
        bindings.insert(
            Key::alt(KeyCode::Char('u')),
            Command::Format(FormatOp::UnorderedList),
        );
        bindings.insert(
            Key::alt(KeyCode::Char('o')),
            Command::Format(FormatOp::OrderedList),
        );
        for level in HeadingLevel::MIN..=HeadingLevel::MAX {
            let Some(heading) = HeadingLevel::new(level) else {
                continue;
            };
            let digit = char::from(b'0' + level);
            bindings.insert(
                Key::alt(KeyCode::Char(digit)),
                Command::Format(FormatOp::Heading(heading)),
            );
        }
        bindings.insert(Key::alt(KeyCode::Char('l')), Command::Format(FormatOp::Link));
        bindings.insert(Key::alt(KeyCode::Char('q')), Command::Format(FormatOp::Quote));
        bindings.insert(Key::alt(KeyCode::Char('f')), Command::Format(FormatOp::Formula));

        bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

        Self { bindings }
    }

    pub fn get(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    pub fn keys_for_command(&self, command: &Command) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, cmd)| *cmd == command)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Layers user rules over the current map. A rule whose command is empty
    /// unbinds the key. Returns how many rules were applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding key");
                continue;
            };
            if rule.command.trim().is_empty() {
                self.unbind(&key);
                applied += 1;
                continue;
            }
            let Some(command) = parse_command(&rule.command) else {
                tracing::warn!(key = %rule.key, command = %rule.command, "unknown keybinding command");
                continue;
            };
            self.bind(key, command);
            applied += 1;
        }
        applied
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
