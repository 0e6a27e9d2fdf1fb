use super::TextBuffer;

/// Cursor position in the document.
///
/// `cx` is a character offset into row `cy`, not a screen column; tab
/// expansion happens in the viewport mapper. `cy == row_count()` is the
/// append position of an empty buffer and forces `cx == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Character offset in the row (0-based)
    pub cx: usize,
    /// Row index (0-based)
    pub cy: usize,
}

impl Cursor {
    /// Create a new cursor at the origin
    pub fn new() -> Self {
        Self { cx: 0, cy: 0 }
    }

    /// Create cursor at specified position
    pub fn at(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }

    /// Move one row up
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        self.cy = self.cy.saturating_sub(1);
        self.clamp_to(buffer);
    }

    /// Move one row down
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        if self.cy + 1 < buffer.row_count() {
            self.cy += 1;
        }
        self.clamp_to(buffer);
    }

    /// Move one character left, wrapping to the end of the previous row
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.cx > 0 {
            self.cx -= 1;
        } else if self.cy > 0 {
            self.cy -= 1;
            self.cx = buffer.row_len(self.cy);
        }
    }

    /// Move one character right, wrapping to the start of the next row
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        if self.cy >= buffer.row_count() {
            return;
        }
        let row_len = buffer.row_len(self.cy);
        if self.cx < row_len {
            self.cx += 1;
        } else if self.cy + 1 < buffer.row_count() {
            self.cy += 1;
            self.cx = 0;
        }
    }

    /// Move a screen page up
    pub fn page_up(&mut self, screen_rows: usize, buffer: &TextBuffer) {
        self.cy = self.cy.saturating_sub(screen_rows);
        self.clamp_to(buffer);
    }

    /// Move a screen page down
    pub fn page_down(&mut self, screen_rows: usize, buffer: &TextBuffer) {
        self.cy += screen_rows;
        if self.cy >= buffer.row_count() {
            self.cy = buffer.row_count().saturating_sub(1);
        }
        self.clamp_to(buffer);
    }

    /// Move to the start of the row
    pub fn home(&mut self) {
        self.cx = 0;
    }

    /// Move to the end of the row
    pub fn end(&mut self, buffer: &TextBuffer) {
        self.cx = buffer.row_len(self.cy);
    }

    /// Jump right over the current word and the following whitespace,
    /// landing on the start of the next word. At end of row, cross to the
    /// first column of the next row instead.
    pub fn move_word_right(&mut self, buffer: &TextBuffer) {
        if self.cy >= buffer.row_count() {
            return;
        }
        let row = buffer.row(self.cy).unwrap_or("").as_bytes();

        if self.cx >= row.len() {
            if self.cy + 1 < buffer.row_count() {
                self.cy += 1;
                self.cx = 0;
            }
            return;
        }

        let mut x = self.cx;
        while x < row.len() && !row[x].is_ascii_whitespace() {
            x += 1;
        }
        while x < row.len() && row[x].is_ascii_whitespace() {
            x += 1;
        }
        self.cx = x;
    }

    /// Mirror of `move_word_right`: skip trailing whitespace, then the
    /// preceding word, landing on its first character. At column 0, cross
    /// to the end of the previous row instead.
    pub fn move_word_left(&mut self, buffer: &TextBuffer) {
        if self.cy >= buffer.row_count() {
            return;
        }
        let row = buffer.row(self.cy).unwrap_or("").as_bytes();
        self.cx = self.cx.min(row.len());

        if self.cx == 0 {
            if self.cy > 0 {
                self.cy -= 1;
                self.cx = buffer.row_len(self.cy);
            }
            return;
        }

        let mut x = self.cx - 1;
        while x > 0 && row[x].is_ascii_whitespace() {
            x -= 1;
        }
        while x > 0 && !row[x].is_ascii_whitespace() {
            x -= 1;
        }
        // Stopped one short of the word start: step back onto it
        if row[x].is_ascii_whitespace() && x + 1 < row.len() {
            x += 1;
        }
        self.cx = x;
    }

    /// Clamp the position to the buffer bounds.
    ///
    /// `cy` may equal `row_count()` only with `cx == 0` (empty-buffer
    /// append position); otherwise `cx` is limited to the row length.
    pub fn clamp_to(&mut self, buffer: &TextBuffer) {
        if self.cy > buffer.row_count() {
            self.cy = buffer.row_count();
        }
        if self.cy < buffer.row_count() {
            self.cx = self.cx.min(buffer.row_len(self.cy));
        } else {
            self.cx = 0;
        }
    }
}
