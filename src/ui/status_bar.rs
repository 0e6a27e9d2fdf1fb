use ratatui::{buffer::Buffer, layout::Rect};

use crate::{constants, editor::Editor, theme::Theme};

/// Render the status bar: file name, modification marker, and the
/// 1-based cursor position.
pub fn render(buf: &mut Buffer, area: Rect, editor: &Editor, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    // Fill the entire row with the status style
    for x in area.left()..area.right() {
        buf[(x, area.top())]
            .set_char(' ')
            .set_style(theme.status_bar);
    }

    let name = editor
        .buffer()
        .file_name()
        .unwrap_or(constants::NO_NAME_LABEL);
    let marker = if editor.buffer().is_dirty() {
        "[+]"
    } else {
        "[]"
    };
    let cursor = editor.cursor();
    let status = format!(
        "{} {}  |  Ln {}, Col {}",
        name,
        marker,
        cursor.cy + 1,
        cursor.cx + 1
    );

    for (i, ch) in status.chars().enumerate().take(area.width as usize) {
        buf[(area.left() + i as u16, area.top())]
            .set_char(ch)
            .set_style(theme.status_bar);
    }
}
