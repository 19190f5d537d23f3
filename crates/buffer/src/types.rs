// Chunk: docs/chunks/text_buffer - Line-addressable text buffer

use std::fmt;

/// Location in the buffer as (line, column) where both are 0-indexed.
///
/// `col` counts characters, not bytes, and excludes the line's terminating
/// newline. A column equal to the line's text length addresses the newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(line: {} col: {})", self.line, self.col)
    }
}

/// An inclusive range of characters between two locations.
///
/// Both endpoints are part of the selection, so a selection whose start and
/// end are equal covers exactly one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Location,
    pub end: Location,
}

impl Selection {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Returns true if the selection spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }
}

/// Outcome of checking a location against the buffer.
///
/// Checking never fails by itself; call sites decide whether an out-of-range
/// outcome becomes an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsCheck {
    InBounds,
    LineOutOfRange,
    ColumnOutOfRange,
}

impl BoundsCheck {
    pub fn is_in_bounds(self) -> bool {
        matches!(self, BoundsCheck::InBounds)
    }
}
