// Chunk: docs/chunks/text_buffer - Line-addressable text buffer

//! Line index for tracking line boundaries in the text buffer.
//!
//! Maintains the byte offset where each line starts so that line count and
//! line addressing never require rescanning the whole text. Supports
//! incremental updates when text is inserted or removed.

/// Tracks line boundaries in a newline-terminated text.
///
/// `line_starts[0]` is always 0, and every newline at byte `i` contributes a
/// start at `i + 1`. Because buffer text always ends with `'\n'`, the final
/// entry is the offset one past the last newline: the place a new line would
/// begin. The number of complete lines is therefore `line_starts.len() - 1`.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates an index for an empty text (zero lines).
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the index from the given text.
    ///
    /// This is O(n) in the text length and is only needed for bulk
    /// operations like loading a file.
    pub fn rebuild(&mut self, text: &str) {
        self.line_starts.clear();
        self.line_starts.push(0);

        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                self.line_starts.push(i + 1);
            }
        }
    }

    /// Returns the number of newline-terminated lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len() - 1
    }

    /// Returns the byte offset where the given line starts.
    ///
    /// Returns None if the line index is out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        self.line_starts.get(line).copied()
    }

    /// Returns the byte offset of the newline terminating the given line.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        Some(self.line_starts[line + 1] - 1)
    }

    /// Returns the length in bytes of the given line, excluding the newline.
    pub fn line_byte_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Some(end - start)
    }

    /// Returns the line containing byte `offset`.
    ///
    /// Offsets at or past the final newline return `line_count()`.
    pub fn line_of(&self, offset: usize) -> usize {
        // line_starts[0] == 0, so at least one start is <= offset
        self.line_starts.partition_point(|&s| s <= offset) - 1
    }

    /// Updates the index after `text` was inserted at byte `offset`.
    ///
    /// Lines starting after the insertion point shift by the inserted length,
    /// and every newline in `text` introduces a new line start.
    pub fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }

        // Starts at or before the insertion point are unaffected
        let first_shifted = self.line_starts.partition_point(|&s| s <= offset);

        for start in &mut self.line_starts[first_shifted..] {
            *start += text.len();
        }

        let new_starts: Vec<usize> = text
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| offset + i + 1)
            .collect();

        self.line_starts
            .splice(first_shifted..first_shifted, new_starts);
    }

    /// Updates the index after the bytes `[start, end)` were removed.
    ///
    /// A line start at `s` was created by the newline at `s - 1`; if that
    /// newline lay in the removed range, the line start disappears.
    pub fn remove(&mut self, start: usize, end: usize) {
        if end <= start {
            return;
        }
        let removed = end - start;

        self.line_starts.retain(|&s| s <= start || s > end);
        for s in self.line_starts.iter_mut() {
            if *s > end {
                *s -= removed;
            }
        }
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
