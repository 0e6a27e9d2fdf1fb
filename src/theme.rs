use ratatui::style::{Color, Modifier, Style};

use crate::editor::TokenKind;

/// Color scheme for the editor surface.
#[derive(Debug, Clone)]
pub struct Theme {
    pub keyword: Style,
    pub type_name: Style,
    pub string: Style,
    pub comment: Style,
    pub number: Style,
    pub plain: Style,
    pub line_number: Style,
    pub status_bar: Style,
}

impl Theme {
    /// Style for a syntax classification
    pub fn token_style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Type => self.type_name,
            TokenKind::String => self.string,
            TokenKind::Comment => self.comment,
            TokenKind::Number => self.number,
            TokenKind::Plain => self.plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: Style::default().fg(Color::Red),
            type_name: Style::default().fg(Color::Cyan),
            string: Style::default().fg(Color::Magenta),
            comment: Style::default().fg(Color::Blue),
            number: Style::default().fg(Color::Green),
            plain: Style::default(),
            line_number: Style::default().add_modifier(Modifier::DIM),
            status_bar: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}
