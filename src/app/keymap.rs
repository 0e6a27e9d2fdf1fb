//! Action set and the configurable key-to-action mapping.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent};
use tern_keyboard::{parse_key_name, KeyPattern};

/// Semantic editor action a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Save,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveWordLeft,
    MoveWordRight,
    Undo,
}

impl Action {
    /// Parse an action name as written in the `[keys]` section
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Action::Quit),
            "save" => Some(Action::Save),
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "move_left" => Some(Action::MoveLeft),
            "move_right" => Some(Action::MoveRight),
            "move_word_left" => Some(Action::MoveWordLeft),
            "move_word_right" => Some(Action::MoveWordRight),
            "undo" => Some(Action::Undo),
            _ => None,
        }
    }

    /// Action name as written in the `[keys]` section
    pub fn name(self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::Save => "save",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::MoveWordLeft => "move_word_left",
            Action::MoveWordRight => "move_word_right",
            Action::Undo => "undo",
        }
    }
}

/// Ordered action-to-key table.
///
/// Bindings keep the declaration order of the default table, and
/// resolution returns the first match in that order. Binding one key to
/// two actions is allowed but warned about at build time; the earlier
/// action wins, deterministically.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(Action, KeyPattern)>,
}

impl Keymap {
    /// Built-in default bindings
    fn default_bindings() -> Vec<(Action, KeyPattern)> {
        vec![
            (Action::Quit, KeyPattern::ctrl(KeyCode::Char('q'))),
            (Action::Save, KeyPattern::ctrl(KeyCode::Char('s'))),
            (Action::MoveUp, KeyPattern::plain(KeyCode::Up)),
            (Action::MoveDown, KeyPattern::plain(KeyCode::Down)),
            (Action::MoveLeft, KeyPattern::plain(KeyCode::Left)),
            (Action::MoveRight, KeyPattern::plain(KeyCode::Right)),
            (Action::MoveWordLeft, KeyPattern::ctrl(KeyCode::Left)),
            (Action::MoveWordRight, KeyPattern::ctrl(KeyCode::Right)),
            (Action::Undo, KeyPattern::ctrl(KeyCode::Char('z'))),
        ]
    }

    /// Build the keymap from the `[keys]` overrides.
    ///
    /// Unrecognized key names and unknown action names are dropped with
    /// a warning; every action keeps its default binding unless
    /// overridden.
    pub fn from_config(keys: &BTreeMap<String, String>) -> Self {
        let mut bindings = Self::default_bindings();

        for (key_name, action_name) in keys {
            let Some(pattern) = parse_key_name(key_name) else {
                tern_logger::warn(format!(
                    "Unrecognized key name \"{}\" in [keys], entry dropped",
                    key_name
                ));
                continue;
            };
            let Some(action) = Action::from_name(action_name) else {
                tern_logger::warn(format!(
                    "Unknown action \"{}\" for key \"{}\", entry dropped",
                    action_name, key_name
                ));
                continue;
            };

            if let Some(binding) = bindings.iter_mut().find(|(a, _)| *a == action) {
                binding.1 = pattern;
            }
        }

        // The same key on two actions resolves to the first in table
        // order; surface the conflict instead of guessing intent.
        for (i, (action, pattern)) in bindings.iter().enumerate() {
            for (other, other_pattern) in bindings.iter().skip(i + 1) {
                if pattern == other_pattern {
                    tern_logger::warn(format!(
                        "Key {} is bound to both {} and {}; {} wins",
                        pattern,
                        action.name(),
                        other.name(),
                        action.name()
                    ));
                }
            }
        }

        Self { bindings }
    }

    /// Resolve a key event to an action: first matching binding in
    /// declaration order, or none.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, pattern)| pattern.matches(event))
            .map(|(action, _)| *action)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }
}
