// Chunk: docs/chunks/text_buffer - Line-addressable text buffer

//! TextBuffer is the main public API for text editing operations.
//!
//! It owns the whole document as a single `String` of newline-terminated
//! lines and keeps a [`LineIndex`] in sync with every edit, so line count and
//! line addressing never rescan the text.
//!
//! Every edit is addressed by [`Location`] (line, character column) or by a
//! [`Selection`] of two locations. Line terminators are only created or removed
//! by line operations, string insertion and selection deletion; single
//! character edits refuse to touch them.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BufferError;
use crate::line_index::LineIndex;
use crate::types::{BoundsCheck, Location, Selection};

type Result<T> = std::result::Result<T, BufferError>;

/// A line-addressable text buffer.
///
/// Invariant: non-empty text always ends with `'\n'`. A fresh or cleared
/// buffer is empty and has zero lines.
#[derive(Debug)]
pub struct TextBuffer {
    text: String,
    line_index: LineIndex,
    /// File the buffer was loaded from, used by [`TextBuffer::save`].
    path: Option<PathBuf>,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            line_index: LineIndex::new(),
            path: None,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// A final line without a terminator gets one, the same way a loaded file
    /// does.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buffer = Self::new();
        buffer.replace_text(content);
        buffer
    }

    /// Opens the file at `path` into a new buffer.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.load(path)?;
        Ok(buffer)
    }

    // ==================== File I/O ====================

    /// Replaces the buffer content with the file at `path`.
    ///
    /// Lines are reconstructed from `'\n'` separators. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD. On failure the buffer is left
    /// untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BufferError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::debug!(path = ?path, "replaced invalid UTF-8 on load");
        }
        self.replace_text(&content);
        self.path = Some(path.to_path_buf());
        tracing::debug!(path = ?path, lines = self.len(), "loaded buffer");
        Ok(())
    }

    /// Writes the buffer verbatim back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(BufferError::NoPath)?;
        fs::write(path, &self.text).map_err(|source| BufferError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = ?path, bytes = self.text.len(), "saved buffer");
        Ok(())
    }

    /// Writes the buffer to `path` and makes it the buffer's file.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.path = Some(path.as_ref().to_path_buf());
        self.save()
    }

    /// Removes all content. The buffer keeps its file path.
    pub fn clear(&mut self) {
        self.text.clear();
        self.line_index = LineIndex::new();
    }

    fn replace_text(&mut self, content: &str) {
        self.text.clear();
        self.text.push_str(content);
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.line_index.rebuild(&self.text);
    }

    // ==================== Accessors ====================

    /// Returns the whole buffer text, including every line terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the file this buffer is bound to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the number of lines in the buffer.
    pub fn len(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns true if the buffer has no lines.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the content of the given line without its trailing newline.
    pub fn line(&self, line: usize) -> Result<&str> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Ok(&self.text[start..end])
    }

    /// Returns the number of characters on the line, excluding the newline.
    ///
    /// Out-of-range lines have length 0.
    pub fn line_text_len(&self, line: usize) -> usize {
        let Ok(text) = self.line(line) else {
            return 0;
        };
        // ASCII lines have one char per byte
        if text.is_ascii() {
            self.line_index.line_byte_len(line).unwrap_or(0)
        } else {
            text.chars().count()
        }
    }

    /// Returns the byte offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Result<usize> {
        self.line_index
            .line_start(line)
            .ok_or_else(|| BufferError::line_out_of_range(line))
    }

    /// Returns the byte offset of the newline terminating the given line.
    pub fn line_end(&self, line: usize) -> Result<usize> {
        self.line_index
            .line_end(line)
            .ok_or_else(|| BufferError::line_out_of_range(line))
    }

    /// Checks a location against the buffer without failing.
    ///
    /// A column equal to the line's text length is in bounds: it addresses the
    /// terminating newline.
    pub fn check_bounds(&self, loc: Location) -> BoundsCheck {
        if loc.line >= self.len() {
            BoundsCheck::LineOutOfRange
        } else if loc.col > self.line_text_len(loc.line) {
            BoundsCheck::ColumnOutOfRange
        } else {
            BoundsCheck::InBounds
        }
    }

    /// Converts a location into a byte offset into [`TextBuffer::text`].
    pub fn index(&self, loc: Location) -> Result<usize> {
        if let Some(err) = BufferError::from_check(self.check_bounds(loc), loc) {
            return Err(err);
        }

        let start = self.line_start(loc.line)?;
        let line = self.line(loc.line)?;
        let col_offset = line
            .char_indices()
            .nth(loc.col)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len());
        Ok(start + col_offset)
    }

    /// Converts a byte offset into [`TextBuffer::text`] back into a location.
    pub fn location_of(&self, offset: usize) -> Result<Location> {
        if offset >= self.text.len() || !self.text.is_char_boundary(offset) {
            return Err(BufferError::OffsetOutOfRange {
                start: offset,
                end: offset,
                len: self.text.len(),
            });
        }

        let line = self.line_index.line_of(offset);
        let start = self.line_start(line)?;
        let col = self.text[start..offset].chars().count();
        Ok(Location::new(line, col))
    }

    /// Returns the raw text between two byte offsets, both inclusive.
    ///
    /// `end` names the first byte of the last character included. An `end`
    /// directly before `start` yields an empty string.
    pub fn interval(&self, start: usize, end: usize) -> Result<&str> {
        let out_of_range = || BufferError::OffsetOutOfRange {
            start,
            end,
            len: self.text.len(),
        };

        if end < start {
            return if start <= self.text.len() {
                Ok("")
            } else {
                Err(out_of_range())
            };
        }

        let last = self
            .text
            .get(end..)
            .and_then(|rest| rest.chars().next())
            .ok_or_else(out_of_range)?;
        self.text
            .get(start..end + last.len_utf8())
            .ok_or_else(out_of_range)
    }

    /// Returns the character at the given location.
    pub fn char_at(&self, loc: Location) -> Result<char> {
        let index = self.index(loc)?;
        // The text is non-empty and ends with a newline once index() succeeds
        Ok(self.text[index..].chars().next().unwrap_or('\n'))
    }

    /// Returns the text covered by a selection, both endpoints inclusive.
    pub fn sel(&self, sel: Selection) -> Result<&str> {
        let (start, end) = self.selection_range(sel)?;
        Ok(&self.text[start..end])
    }

    /// Resolves a selection into a `[start, end)` byte range.
    fn selection_range(&self, sel: Selection) -> Result<(usize, usize)> {
        let (first, last) = if sel.start <= sel.end {
            (sel.start, sel.end)
        } else {
            (sel.end, sel.start)
        };

        let start = self.index(first)?;
        let last_char_start = self.index(last)?;
        let last_char_len = self.text[last_char_start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        Ok((start, last_char_start + last_char_len))
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies that the incremental line_index matches
    /// a fresh rebuild from the text.
    ///
    /// Checks every 64th mutation so the O(n) rebuild stays out of tight
    /// editing loops. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(&self.text);
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line_index drift detected after {} mutations",
            self.debug_mutation_count,
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}

    // ==================== Mutations ====================

    fn insert_at(&mut self, offset: usize, s: &str) {
        self.text.insert_str(offset, s);
        self.line_index.insert(offset, s);
        self.assert_line_index_consistent();
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        self.text.replace_range(start..end, "");
        self.line_index.remove(start, end);
        self.assert_line_index_consistent();
    }

    /// Re-establishes the trailing newline after a deletion removed it.
    fn ensure_trailing_newline(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            let len = self.text.len();
            self.insert_at(len, "\n");
        }
    }

    /// Fails if `loc` addresses the newline terminating its line.
    fn reject_newline(&self, loc: Location, index: usize) -> Result<()> {
        if index == self.line_end(loc.line)? {
            return Err(BufferError::NewlineMutation { location: loc });
        }
        Ok(())
    }

    /// Replaces the character at `loc`.
    ///
    /// Neither the replaced nor the new character may be a newline.
    pub fn set_char(&mut self, loc: Location, ch: char) -> Result<()> {
        let index = self.index(loc)?;
        self.reject_newline(loc, index)?;
        if ch == '\n' {
            return Err(BufferError::NewlineMutation { location: loc });
        }

        let old_len = self.text[index..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.remove_range(index, index + old_len);
        let mut encoded = [0u8; 4];
        self.insert_at(index, ch.encode_utf8(&mut encoded));
        Ok(())
    }

    /// Inserts a character before the character at `loc`.
    pub fn add_char(&mut self, loc: Location, ch: char) -> Result<()> {
        let index = self.index(loc)?;
        let mut encoded = [0u8; 4];
        self.insert_at(index, ch.encode_utf8(&mut encoded));
        Ok(())
    }

    /// Deletes the character at `loc`. The line terminator cannot be deleted.
    pub fn del_char(&mut self, loc: Location) -> Result<()> {
        let index = self.index(loc)?;
        self.reject_newline(loc, index)?;

        let len = self.text[index..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.remove_range(index, index + len);
        Ok(())
    }

    /// Inserts a string before the character at `loc`.
    ///
    /// Newlines in `s` split lines; the line count grows accordingly.
    pub fn add_str(&mut self, loc: Location, s: &str) -> Result<()> {
        let index = self.index(loc)?;
        self.insert_at(index, s);
        Ok(())
    }

    /// Deletes the selected text, both endpoints inclusive.
    ///
    /// Removed newlines join lines. If the final newline was removed it is
    /// restored.
    pub fn del_sel(&mut self, sel: Selection) -> Result<()> {
        let (start, end) = self.selection_range(sel)?;
        self.remove_range(start, end);
        self.ensure_trailing_newline();
        Ok(())
    }

    /// Inserts an empty line at `line`.
    ///
    /// With `line == len()` a new empty line is appended; otherwise the
    /// content of `line` is pushed down by one line.
    pub fn add_line(&mut self, line: usize) -> Result<()> {
        let offset = if line == self.len() {
            self.text.len()
        } else {
            self.line_start(line)?
        };
        self.insert_at(offset, "\n");
        Ok(())
    }

    /// Inserts `count` empty lines at `line`.
    pub fn add_lines(&mut self, line: usize, count: usize) -> Result<()> {
        for _ in 0..count {
            self.add_line(line)?;
        }
        Ok(())
    }

    /// Deletes a whole line, including its terminator.
    pub fn del_line(&mut self, line: usize) -> Result<()> {
        self.del_lines(line, 1)
    }

    /// Deletes `count` consecutive whole lines starting at `line`.
    pub fn del_lines(&mut self, line: usize, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let last = line
            .checked_add(count - 1)
            .ok_or_else(|| BufferError::line_out_of_range(line))?;
        let start = self.line_start(line)?;
        let end = self.line_end(last)? + 1;
        self.remove_range(start, end);
        self.ensure_trailing_newline();
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
