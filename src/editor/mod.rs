//! Editor core: row storage, cursor, viewport mapping, token
//! classification, and snapshot undo.

mod buffer;
mod cursor;
mod highlighting;
mod history;
mod viewport;

pub use buffer::TextBuffer;
pub use cursor::Cursor;
pub use highlighting::{highlight_line, Span, TokenKind};
pub use history::{History, Snapshot};
pub use viewport::Viewport;

use anyhow::Result;
use std::path::Path;

/// Editing session: one buffer, its cursor and viewport, and the undo
/// stack. The undo stack is an explicit field of the session, passed
/// nowhere else; edit operations route through this struct so every
/// mutation is preceded by a snapshot.
#[derive(Debug)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    history: History,
    tab_size: usize,
}

impl Editor {
    /// Create an editor with an empty, pathless buffer
    pub fn new(tab_size: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            history: History::new(),
            tab_size,
        }
    }

    /// Create an editor over a file; a missing file opens empty
    pub fn from_file<P: AsRef<Path>>(path: P, tab_size: usize) -> Result<Self> {
        Ok(Self {
            buffer: TextBuffer::from_file(path)?,
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            history: History::new(),
            tab_size,
        })
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Update the visible extent on terminal resize
    pub fn resize(&mut self, screen_cols: usize, screen_rows: usize) {
        self.viewport.resize(screen_cols, screen_rows);
    }

    /// Snap scroll offsets to the cursor. Runs once per frame before
    /// painting; idempotent.
    pub fn reconcile_viewport(&mut self) {
        self.viewport.reconcile(&self.cursor);
    }

    /// Screen column of the cursor within its row, tab-aware
    pub fn cursor_screen_column(&self) -> usize {
        let row = self.buffer.row(self.cursor.cy).unwrap_or("");
        Viewport::screen_column(row, self.cursor.cx, self.tab_size)
    }

    /// Capture the document and cursor onto the undo stack.
    ///
    /// Called unconditionally before every mutating operation, even ones
    /// that end up not changing anything.
    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            rows: self.buffer.rows().to_vec(),
            cursor: self.cursor,
        });
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        self.snapshot();
        let (cx, cy) = self.buffer.insert_char(self.cursor.cx, self.cursor.cy, ch);
        self.cursor = Cursor::at(cx, cy);
    }

    /// Insert a line break at the cursor
    pub fn insert_newline(&mut self) {
        self.snapshot();
        let (cx, cy) = self.buffer.split_row(self.cursor.cx, self.cursor.cy);
        self.cursor = Cursor::at(cx, cy);
    }

    /// Delete the character before the cursor, merging rows at column 0
    pub fn delete_backward(&mut self) {
        self.snapshot();
        let (cx, cy) = self.buffer.delete_backward(self.cursor.cx, self.cursor.cy);
        self.cursor = Cursor::at(cx, cy);
    }

    /// Restore the most recent snapshot, if any.
    ///
    /// Restoring replaces the document wholesale and leaves the buffer
    /// dirty; there is no redo.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.buffer.replace_rows(snapshot.rows);
            self.cursor = snapshot.cursor;
        }
    }

    /// Save the buffer to its file path
    pub fn save(&mut self) -> Result<()> {
        self.buffer.save()
    }

    // Cursor navigation, clamped to the buffer

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.buffer);
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.buffer);
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.buffer);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.buffer);
    }

    pub fn move_word_left(&mut self) {
        self.cursor.move_word_left(&self.buffer);
    }

    pub fn move_word_right(&mut self) {
        self.cursor.move_word_right(&self.buffer);
    }

    pub fn move_home(&mut self) {
        self.cursor.home();
    }

    pub fn move_end(&mut self) {
        self.cursor.end(&self.buffer);
    }

    pub fn page_up(&mut self) {
        self.cursor.page_up(self.viewport.screen_rows, &self.buffer);
    }

    pub fn page_down(&mut self) {
        self.cursor.page_down(self.viewport.screen_rows, &self.buffer);
    }

    #[cfg(test)]
    fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(rows: &[&str]) -> Editor {
        let mut editor = Editor::new(4);
        for row in rows {
            for ch in row.chars() {
                editor.insert_char(ch);
            }
            editor.insert_newline();
        }
        // Drop the final trailing row produced by the last newline
        editor.delete_backward();
        editor.history = History::new();
        editor.cursor = Cursor::new();
        editor
    }

    #[test]
    fn test_typing_builds_rows() {
        let editor = editor_with(&["ab", "cd"]);
        assert_eq!(editor.buffer().row_count(), 2);
        assert_eq!(editor.buffer().row(0), Some("ab"));
        assert_eq!(editor.buffer().row(1), Some("cd"));
    }

    #[test]
    fn test_edits_followed_by_equal_undos_restore_state() {
        let mut editor = editor_with(&["hello world", "second line"]);
        editor.cursor = Cursor::at(5, 0);

        let rows_before = editor.buffer().rows().to_vec();
        let cursor_before = editor.cursor();

        // A mixed sequence of edits...
        editor.insert_char('x');
        editor.insert_newline();
        editor.insert_char('y');
        editor.delete_backward();
        editor.delete_backward();
        let edits = 5;

        // ...followed by the same number of undos
        for _ in 0..edits {
            editor.undo();
        }

        assert_eq!(editor.buffer().rows(), rows_before.as_slice());
        assert_eq!(editor.cursor(), cursor_before);
    }

    #[test]
    fn test_noop_backspace_still_consumes_an_undo_slot() {
        let mut editor = editor_with(&["abc"]);
        editor.cursor = Cursor::new();
        assert_eq!(editor.history_len(), 0);

        editor.delete_backward();
        assert_eq!(editor.buffer().row(0), Some("abc"));
        assert_eq!(editor.history_len(), 1);

        // Undoing the no-op restores the identical state
        editor.undo();
        assert_eq!(editor.buffer().row(0), Some("abc"));
        assert_eq!(editor.cursor(), Cursor::new());
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn test_undo_leaves_buffer_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, "abc").unwrap();

        let mut editor = Editor::from_file(&path, 4).unwrap();
        assert!(!editor.buffer().is_dirty());

        editor.insert_char('x');
        editor.save().unwrap();
        assert!(!editor.buffer().is_dirty());

        editor.undo();
        assert!(editor.buffer().is_dirty());
    }

    #[test]
    fn test_undo_with_empty_history_is_a_noop() {
        let mut editor = editor_with(&["abc"]);
        let dirty_before = editor.buffer().is_dirty();

        editor.undo();
        assert_eq!(editor.buffer().row(0), Some("abc"));
        assert_eq!(editor.buffer().is_dirty(), dirty_before);
    }

    #[test]
    fn test_newline_on_empty_buffer_advances_cursor() {
        let mut editor = Editor::new(4);
        editor.insert_newline();

        assert_eq!(editor.buffer().row_count(), 1);
        assert_eq!(editor.buffer().row(0), Some(""));
        assert_eq!(editor.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_backspace_merge_repositions_cursor_to_join_point() {
        let mut editor = editor_with(&["foo", "bar"]);
        editor.cursor = Cursor::at(0, 1);

        editor.delete_backward();
        assert_eq!(editor.buffer().row(0), Some("foobar"));
        assert_eq!(editor.cursor(), Cursor::at(3, 0));
    }

    #[test]
    fn test_cursor_screen_column_expands_tabs() {
        let mut editor = Editor::new(4);
        editor.insert_char('\t');
        editor.insert_char('x');

        // Cursor sits after "\tx": tab fills to column 4, x adds one
        assert_eq!(editor.cursor_screen_column(), 5);
    }
}
