//! Screen painting.
//!
//! The UI layer reads the row store, the span lists from the classifier,
//! and the viewport offsets, and writes cells. It mutates no editor
//! state and contains no classification logic.

mod status_bar;

use ratatui::{buffer::Buffer, layout::Rect, Frame};

use crate::{
    constants,
    editor::{highlight_line, Editor},
    theme::Theme,
};
use tern_config::Config;

/// Paint one frame: text rows, status bar, hardware cursor.
pub fn render(frame: &mut Frame, editor: &Editor, config: &Config) {
    let theme = Theme::default();
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let text_area = Rect {
        height: area.height - 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    let gutter = gutter_width(editor, config);
    render_rows(frame.buffer_mut(), text_area, editor, &theme, gutter);
    status_bar::render(frame.buffer_mut(), status_area, editor, &theme);

    // Hardware cursor, clamped inside the text area
    let viewport = editor.viewport();
    let cursor = editor.cursor();
    let screen_y = cursor
        .cy
        .saturating_sub(viewport.row_offset)
        .min(text_area.height.saturating_sub(1) as usize);
    let screen_x = (editor
        .cursor_screen_column()
        .saturating_sub(viewport.col_offset)
        + gutter)
        .min(area.width.saturating_sub(1) as usize);
    frame.set_cursor_position((
        text_area.x + screen_x as u16,
        text_area.y + screen_y as u16,
    ));
}

/// Width of the line-number gutter in cells, 0 when disabled
fn gutter_width(editor: &Editor, config: &Config) -> usize {
    if !config.options.show_line_numbers {
        return 0;
    }
    let max_line = editor.buffer().row_count().max(1);
    max_line.to_string().len() + 1
}

fn render_rows(buf: &mut Buffer, area: Rect, editor: &Editor, theme: &Theme, gutter: usize) {
    let viewport = editor.viewport();
    let buffer = editor.buffer();
    let width = area.width as usize;

    for y in 0..area.height {
        let file_row = viewport.row_offset + y as usize;

        if file_row >= buffer.row_count() {
            if buffer.row_count() == 0 && y == area.height / 3 {
                render_welcome_line(buf, area, y, width);
            } else {
                buf[(area.x, area.y + y)].set_char('~');
            }
            continue;
        }

        // Line number gutter
        if gutter > 0 {
            let label = format!("{:>width$} ", file_row + 1, width = gutter - 1);
            for (i, ch) in label.chars().enumerate().take(width) {
                buf[(area.x + i as u16, area.y + y)]
                    .set_char(ch)
                    .set_style(theme.line_number);
            }
        }

        // Highlighted content, clipped horizontally in expanded cells
        let row = buffer.row(file_row).unwrap_or("");
        let spans = highlight_line(row, editor.tab_size(), 0);
        let mut col = 0;
        'row: for span in &spans {
            let style = theme.token_style(span.kind);
            for ch in span.text.chars() {
                if col >= viewport.col_offset {
                    let x = col - viewport.col_offset + gutter;
                    if x >= width {
                        break 'row;
                    }
                    // Comment spans keep raw tab bytes; never emit a
                    // control character into a cell
                    let ch = if ch == '\t' { ' ' } else { ch };
                    buf[(area.x + x as u16, area.y + y)]
                        .set_char(ch)
                        .set_style(style);
                }
                col += 1;
            }
        }
    }
}

fn render_welcome_line(buf: &mut Buffer, area: Rect, y: u16, width: usize) {
    buf[(area.x, area.y + y)].set_char('~');

    let message: String = constants::WELCOME_MESSAGE.chars().take(width).collect();
    let padding = width.saturating_sub(message.len()) / 2;
    for (i, ch) in message.chars().enumerate() {
        let x = padding + i;
        if x >= width {
            break;
        }
        if x > 0 {
            buf[(area.x + x as u16, area.y + y)].set_char(ch);
        }
    }
}
