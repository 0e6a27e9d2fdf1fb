use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Action};

impl App {
    /// Handle a keyboard event.
    ///
    /// Resolution is layered: the configured keymap first, then the
    /// fixed table of navigation/editing keys, and finally literal
    /// insertion of printable characters.
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = self.keymap.resolve(&key) {
            self.perform_action(action);
            return Ok(());
        }

        match key.code {
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::PageUp => self.editor.page_up(),
            KeyCode::PageDown => self.editor.page_down(),
            KeyCode::Backspace => self.editor.delete_backward(),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Tab => self.editor.insert_char('\t'),
            KeyCode::Char(c) => {
                // Literal input: printable ASCII only (single-byte rows),
                // and not a modifier combination that failed to resolve
                if key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
                    && (c.is_ascii_graphic() || c == ' ')
                {
                    self.editor.insert_char(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Invoke the editor operation bound to an action
    fn perform_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Save => match self.editor.save() {
                Ok(()) => tern_logger::debug("Buffer saved"),
                Err(e) => tern_logger::error(format!("Save failed: {:#}", e)),
            },
            Action::MoveUp => self.editor.move_up(),
            Action::MoveDown => self.editor.move_down(),
            Action::MoveLeft => self.editor.move_left(),
            Action::MoveRight => self.editor.move_right(),
            Action::MoveWordLeft => self.editor.move_word_left(),
            Action::MoveWordRight => self.editor.move_word_right(),
            Action::Undo => self.editor.undo(),
        }
    }
}
