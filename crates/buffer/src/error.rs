//! Error types for buffer addressing, editing and file I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{BoundsCheck, Location};

/// Which coordinate of a location was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsKind {
    Line,
    Column,
}

impl fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsKind::Line => f.write_str("Line"),
            BoundsKind::Column => f.write_str("Column"),
        }
    }
}

/// Errors raised by [`TextBuffer`](crate::TextBuffer) operations.
///
/// Bounds and newline violations are programming errors of the caller; I/O
/// errors are meant to be reported to the user.
#[derive(Error, Debug)]
pub enum BufferError {
    #[error("{kind} is out of bounds! {location}")]
    Bounds { kind: BoundsKind, location: Location },

    #[error("Attempted to mutate a line terminator at {location}")]
    NewlineMutation { location: Location },

    #[error("Byte interval {start}..={end} is outside the buffer (len {len})")]
    OffsetOutOfRange { start: usize, end: usize, len: usize },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Buffer has no file path to save to")]
    NoPath,
}

impl BufferError {
    /// Translates a failed bounds check into an error.
    ///
    /// Returns `None` for [`BoundsCheck::InBounds`].
    pub fn from_check(check: BoundsCheck, location: Location) -> Option<Self> {
        let kind = match check {
            BoundsCheck::InBounds => return None,
            BoundsCheck::LineOutOfRange => BoundsKind::Line,
            BoundsCheck::ColumnOutOfRange => BoundsKind::Column,
        };
        Some(BufferError::Bounds { kind, location })
    }

    pub(crate) fn line_out_of_range(line: usize) -> Self {
        BufferError::Bounds {
            kind: BoundsKind::Line,
            location: Location::new(line, 0),
        }
    }
}
