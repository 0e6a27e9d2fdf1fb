use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Text buffer holding the document as a sequence of newline-free rows.
///
/// All mutation primitives clamp out-of-range positions to the current
/// bounds and proceed; a caller can never make them fail. Each returns the
/// corrected cursor position resulting from the edit.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Document rows, no embedded newlines
    rows: Vec<String>,
    /// File path (if the buffer is backed by a file)
    file_path: Option<PathBuf>,
    /// Modified flag, cleared only by a successful save
    dirty: bool,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            file_path: None,
            dirty: false,
        }
    }

    /// Load a file into a new buffer.
    ///
    /// A file that does not exist yet yields an empty buffer bound to the
    /// path; it will be created on the first save. Trailing `\r` is
    /// stripped from each line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let rows = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            contents
                .lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            rows,
            file_path: Some(path.to_path_buf()),
            dirty: false,
        })
    }

    /// Save the buffer to its file path.
    ///
    /// Rows are joined with exactly `row_count() - 1` newline separators,
    /// so a file without a trailing blank line round-trips byte for byte.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.file_path.clone() else {
            anyhow::bail!("No file path set");
        };

        let contents = self.rows.join("\n");
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.dirty = false;
        Ok(())
    }

    /// Get row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get row by index
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Length of a row in bytes; 0 for out-of-range indices
    pub fn row_len(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, String::len)
    }

    /// All rows, for snapshot capture
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Replace the whole document, e.g. when restoring an undo snapshot.
    /// Restoring counts as a modification.
    pub fn replace_rows(&mut self, rows: Vec<String>) {
        self.rows = rows;
        self.dirty = true;
    }

    /// Insert a single character.
    ///
    /// `cy == row_count()` is a valid append position and materializes an
    /// empty row first.
    pub fn insert_char(&mut self, cx: usize, cy: usize, ch: char) -> (usize, usize) {
        let cy = cy.min(self.rows.len());
        if cy == self.rows.len() {
            self.rows.push(String::new());
        }

        let row = &mut self.rows[cy];
        let cx = cx.min(row.len());
        row.insert(cx, ch);
        self.dirty = true;
        (cx + 1, cy)
    }

    /// Split a row at `cx`, moving the tail onto a new following row.
    ///
    /// At the end-of-buffer append position this appends an empty row
    /// instead of splitting.
    pub fn split_row(&mut self, cx: usize, cy: usize) -> (usize, usize) {
        let cy = cy.min(self.rows.len());
        if cy == self.rows.len() {
            self.rows.push(String::new());
            self.dirty = true;
            return (0, cy + 1);
        }

        let row = &mut self.rows[cy];
        let cx = cx.min(row.len());
        let tail = row.split_off(cx);
        self.rows.insert(cy + 1, tail);
        self.dirty = true;
        (0, cy + 1)
    }

    /// Delete the character before `(cx, cy)`.
    ///
    /// At `(0, 0)` nothing precedes the cursor and the buffer is left
    /// untouched. At column 0 of a later row the row is merged onto the
    /// end of the previous one and the cursor lands on the join point.
    pub fn delete_backward(&mut self, cx: usize, cy: usize) -> (usize, usize) {
        if cy >= self.rows.len() {
            return (cx, cy);
        }
        let cx = cx.min(self.rows[cy].len());
        if cx == 0 && cy == 0 {
            return (cx, cy);
        }

        if cx > 0 {
            self.rows[cy].remove(cx - 1);
            self.dirty = true;
            (cx - 1, cy)
        } else {
            // Merge with the previous row
            let row = self.rows.remove(cy);
            let prev_len = self.rows[cy - 1].len();
            self.rows[cy - 1].push_str(&row);
            self.dirty = true;
            (prev_len, cy - 1)
        }
    }

    /// Append a row at the end of the buffer
    pub fn push_row(&mut self, row: String) {
        self.rows.push(row);
        self.dirty = true;
    }

    /// Check if buffer has unsaved modifications
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Get file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// File name for the status bar, if any
    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
