use super::Cursor;

/// Visible window into the buffer.
///
/// Holds the scroll offsets and the screen extent. Reconciliation runs
/// once per frame before painting and is idempotent: with an unchanged
/// cursor a second call leaves both offsets untouched.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible row (0-based)
    pub row_offset: usize,
    /// First visible column (0-based, in character offsets)
    pub col_offset: usize,
    /// Number of visible text rows (status bar excluded)
    pub screen_rows: usize,
    /// Number of visible columns
    pub screen_cols: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(screen_cols: usize, screen_rows: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
        }
    }

    /// Update viewport dimensions on terminal resize
    pub fn resize(&mut self, screen_cols: usize, screen_rows: usize) {
        self.screen_cols = screen_cols;
        self.screen_rows = screen_rows;
    }

    /// Translate a character offset into a screen column.
    ///
    /// Ordinary characters advance by one cell; a tab advances to the
    /// next multiple of `tab_size` (elastic tab stops).
    pub fn screen_column(row: &str, cx: usize, tab_size: usize) -> usize {
        let mut col = 0;
        for byte in row.as_bytes().iter().take(cx) {
            if *byte == b'\t' {
                col += tab_size - (col % tab_size);
            } else {
                col += 1;
            }
        }
        col
    }

    /// Snap the offsets so the cursor is inside the visible window.
    ///
    /// A cursor above or left of the window becomes the first visible
    /// row/column; below or right of it, the last.
    pub fn reconcile(&mut self, cursor: &Cursor) {
        if cursor.cy < self.row_offset {
            self.row_offset = cursor.cy;
        }
        if self.screen_rows > 0 && cursor.cy >= self.row_offset + self.screen_rows {
            self.row_offset = cursor.cy + 1 - self.screen_rows;
        }

        if cursor.cx < self.col_offset {
            self.col_offset = cursor.cx;
        }
        if self.screen_cols > 0 && cursor.cx >= self.col_offset + self.screen_cols {
            self.col_offset = cursor.cx + 1 - self.screen_cols;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_expansion_at_column_zero() {
        // A tab at screen column 0 expands to a full stop
        assert_eq!(Viewport::screen_column("\tx", 1, 4), 4);
    }

    #[test]
    fn test_tab_expansion_mid_row() {
        // At screen column 5 a tab advances 3 cells to the next multiple of 4
        assert_eq!(Viewport::screen_column("abcde\tx", 6, 4), 8);
    }

    #[test]
    fn test_screen_column_without_tabs() {
        assert_eq!(Viewport::screen_column("hello", 3, 4), 3);
    }

    #[test]
    fn test_screen_column_ignores_offsets_past_row_end() {
        assert_eq!(Viewport::screen_column("ab", 10, 4), 2);
    }

    #[test]
    fn test_reconcile_scrolls_down() {
        let mut vp = Viewport::new(80, 24);
        vp.reconcile(&Cursor::at(0, 30));
        assert_eq!(vp.row_offset, 7); // 30 - 24 + 1
    }

    #[test]
    fn test_reconcile_scrolls_up() {
        let mut vp = Viewport::new(80, 24);
        vp.row_offset = 10;
        vp.reconcile(&Cursor::at(0, 5));
        assert_eq!(vp.row_offset, 5);
    }

    #[test]
    fn test_reconcile_scrolls_horizontally() {
        let mut vp = Viewport::new(80, 24);
        vp.reconcile(&Cursor::at(100, 0));
        assert_eq!(vp.col_offset, 21); // 100 - 80 + 1

        vp.reconcile(&Cursor::at(3, 0));
        assert_eq!(vp.col_offset, 3);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut vp = Viewport::new(80, 24);
        let cursor = Cursor::at(100, 57);

        vp.reconcile(&cursor);
        let (rows, cols) = (vp.row_offset, vp.col_offset);

        vp.reconcile(&cursor);
        assert_eq!((vp.row_offset, vp.col_offset), (rows, cols));
    }

    #[test]
    fn test_reconcile_leaves_contained_cursor_alone() {
        let mut vp = Viewport::new(80, 24);
        vp.row_offset = 5;
        vp.col_offset = 2;

        vp.reconcile(&Cursor::at(10, 12));
        assert_eq!(vp.row_offset, 5);
        assert_eq!(vp.col_offset, 2);
    }
}
