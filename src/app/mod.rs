use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;

use crate::{
    editor::Editor,
    event::{Event, EventSource},
    ui,
};
use tern_config::Config;

mod key_handler;
mod keymap;

pub use keymap::{Action, Keymap};

/// Main application: owns the editing session and the key-to-action
/// mapping, and drives the render/input loop.
pub struct App {
    editor: Editor,
    config: Config,
    keymap: Keymap,
    should_quit: bool,
}

impl App {
    /// Create the application, opening the given file if any.
    ///
    /// A file that does not exist yet opens as an empty buffer; only a
    /// file that exists but cannot be read is an error.
    pub fn new(config: Config, file_path: Option<PathBuf>) -> Result<Self> {
        let tab_size = config.options.tabsize;
        let editor = match file_path {
            Some(path) => {
                let editor = Editor::from_file(&path, tab_size)?;
                tern_logger::info(format!(
                    "Opened {} ({} rows)",
                    path.display(),
                    editor.buffer().row_count()
                ));
                editor
            }
            None => Editor::new(tab_size),
        };

        let keymap = Keymap::from_config(&config.keys);

        Ok(Self {
            editor,
            config,
            keymap,
            should_quit: false,
        })
    }

    /// Run the main loop: reconcile scroll state, paint a frame, block
    /// on the next event, dispatch it. The quit flag is cooperative and
    /// checked once per iteration, so an in-progress operation always
    /// completes before exit.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        let events = EventSource::new();

        while !self.should_quit {
            self.editor.reconcile_viewport();
            terminal.draw(|frame| ui::render(frame, &self.editor, &self.config))?;

            match events.next()? {
                Event::Key(key) => self.handle_key_event(key)?,
                Event::Resize(width, height) => self.resize(width, height),
            }
        }

        tern_logger::info("Quit requested, shutting down");
        Ok(())
    }

    /// Propagate a new terminal size; the bottom row belongs to the
    /// status bar.
    fn resize(&mut self, width: u16, height: u16) {
        self.editor
            .resize(width as usize, (height as usize).saturating_sub(1));
    }
}
