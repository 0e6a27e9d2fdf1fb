//! Keyboard handling for tern.
//!
//! This crate provides the bridge between the symbolic key names used in
//! the configuration file (e.g. `ArrowUp`, `Ctrl-q`, or a bare character)
//! and the key events delivered by the terminal, so that the rest of the
//! application compares keys through one normalized representation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Normalized key pattern a binding is declared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    /// Create pattern from code and modifiers
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Pattern for a plain (unmodified) key
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Pattern for a Ctrl-modified key
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Check whether an incoming key event matches this pattern.
    ///
    /// Shift is ignored for character keys: the terminal reports `A` as
    /// `Char('A')` plus SHIFT, and a binding declared as `A` must match it.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                self.modifiers == event.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == event.modifiers,
        }
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl-")?;
        }
        match self.code {
            KeyCode::Up => write!(f, "ArrowUp"),
            KeyCode::Down => write!(f, "ArrowDown"),
            KeyCode::Left => write!(f, "ArrowLeft"),
            KeyCode::Right => write!(f, "ArrowRight"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Char(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Parse a symbolic key name from the configuration file.
///
/// Accepted spellings: the named keys (`ArrowUp`, `PageDown`, `Home`, ...),
/// `Ctrl-` combinations (`Ctrl-q`, `Ctrl-ArrowLeft`), and a bare single
/// character. Returns `None` for anything else; the caller decides whether
/// to warn or drop the entry.
pub fn parse_key_name(name: &str) -> Option<KeyPattern> {
    match name {
        "ArrowUp" => return Some(KeyPattern::plain(KeyCode::Up)),
        "ArrowDown" => return Some(KeyPattern::plain(KeyCode::Down)),
        "ArrowLeft" => return Some(KeyPattern::plain(KeyCode::Left)),
        "ArrowRight" => return Some(KeyPattern::plain(KeyCode::Right)),
        "PageUp" => return Some(KeyPattern::plain(KeyCode::PageUp)),
        "PageDown" => return Some(KeyPattern::plain(KeyCode::PageDown)),
        "Home" => return Some(KeyPattern::plain(KeyCode::Home)),
        "End" => return Some(KeyPattern::plain(KeyCode::End)),
        "Ctrl-ArrowLeft" => return Some(KeyPattern::ctrl(KeyCode::Left)),
        "Ctrl-ArrowRight" => return Some(KeyPattern::ctrl(KeyCode::Right)),
        _ => {}
    }

    // Ctrl-X combinations: "Ctrl-q", "Ctrl-S", ...
    if let Some(rest) = name.strip_prefix("Ctrl-") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphabetic() {
                return Some(KeyPattern::ctrl(KeyCode::Char(c.to_ascii_lowercase())));
            }
        }
        return None;
    }

    // Bare single character
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyPattern::plain(KeyCode::Char(c)));
    }

    None
}
