//! Terminal host: wires key events, the editing surface and the editor kernel.

use super::surface::{SurfaceOutcome, TextSurface};
use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::Settings;
use crate::kernel::{EditorAction, EditorState, Effect};

pub struct App {
    pub(super) editor: EditorState,
    pub(super) surface: TextSurface,
    pub(super) keymap: KeybindingService,
    /// Version drawn but not yet acknowledged to the kernel.
    unacked_version: Option<u64>,
    pub(super) scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings, initial_text: Option<&str>) -> Self {
        let editor = match initial_text {
            Some(text) => EditorState::with_text(settings.editor.clone(), text),
            None => EditorState::new(settings.editor.clone()),
        };
        let mut keymap = KeybindingService::with_defaults();
        let applied = keymap.apply_rules(&settings.keybindings);
        tracing::info!(applied, total = keymap.len(), "keybindings loaded");

        Self {
            surface: TextSurface::new(editor.text()),
            editor,
            keymap,
            unacked_version: None,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: Key) {
        if let Some(command) = self.keymap.get(&key).copied() {
            self.run_command(command);
            return;
        }

        if let KeyCode::Char(ch) = key.code {
            let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
            if plain {
                // Key normalization lowercases shifted letters.
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                };
                let outcome = self.surface.insert_str(ch.encode_utf8(&mut [0; 4]));
                self.sync_surface(outcome);
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        let outcome = self.surface.insert_str(text);
        self.sync_surface(outcome);
    }

    pub fn run_command(&mut self, command: Command) {
        if command == Command::Quit {
            self.should_quit = true;
            return;
        }

        if !command.is_editor_command() {
            let outcome = self.surface.apply(command);
            self.sync_surface(outcome);
            return;
        }

        let sel = self.surface.selection();
        let (start, end) = (sel.start(), sel.end());
        let action = match command {
            Command::Indent => EditorAction::Indent { start, end },
            Command::Undo => EditorAction::Undo,
            Command::Redo => EditorAction::Redo,
            Command::Format(op) => EditorAction::Format { op, start, end },
            _ => return,
        };
        self.dispatch(action);
    }

    /// Call after every frame. Acknowledges the drawn version; returns true if
    /// that moved the caret and the frame needs redrawing.
    pub fn after_render(&mut self) -> bool {
        let Some(version) = self.unacked_version.take() else {
            return false;
        };
        match self.editor.rendered(version) {
            Some(selection) => {
                self.surface.set_selection(selection);
                true
            }
            None => false,
        }
    }

    /// Keeps the caret row inside a viewport of `height` rows.
    pub fn follow_cursor(&mut self, height: u16) {
        let (row, _) = self.surface.cursor_row_col();
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        if row < self.scroll {
            self.scroll = row;
        } else if height > 0 && row >= self.scroll.saturating_add(height) {
            self.scroll = row - height + 1;
        }
    }

    fn sync_surface(&mut self, outcome: SurfaceOutcome) {
        match outcome {
            SurfaceOutcome::TextChanged(text) => {
                self.dispatch(EditorAction::ContentChanged { text });
                self.report_selection();
            }
            SurfaceOutcome::SelectionChanged => self.report_selection(),
            SurfaceOutcome::Unchanged => {}
        }
    }

    fn report_selection(&mut self) {
        let sel = self.surface.selection();
        self.dispatch(EditorAction::SetSelection {
            start: sel.start(),
            end: sel.end(),
        });
    }

    fn dispatch(&mut self, action: EditorAction) {
        let (_, effects) = self.editor.dispatch_action(action);
        for effect in effects {
            match effect {
                Effect::Render { version } => {
                    self.surface.set_text(self.editor.text());
                    self.unacked_version = Some(version);
                }
                Effect::MoveCaret(selection) => self.surface.set_selection(selection),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
