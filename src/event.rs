use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
}

/// Blocking event source.
///
/// The editor is purely event-driven: one blocking read per loop
/// iteration, no timers, no background tasks. Events the editor does not
/// consume (mouse, focus, key release) are skipped here so the loop only
/// wakes up for work.
pub struct EventSource;

impl EventSource {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next relevant event
    pub fn next(&self) -> Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => {
                    return Ok(Event::Resize(width, height));
                }
                _ => {}
            }
        }
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}
