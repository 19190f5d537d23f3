// Chunk: docs/chunks/debug_driver - Load, colorize and print a source file

//! quill: a line-addressable text buffer with a syntax-tree driven colorizer.
//!
//! This crate ties the two workspace libraries together for the `quill`
//! binary: load a file into a [`TextBuffer`], parse it, and pull one
//! [`ColoredString`] per line out of a [`SyntaxHighlighter`]. Positions where
//! the parser had to invent a missing node are marked as errors on the
//! produced lines.

pub mod ansi;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use quill_buffer::{BufferError, ColoredString, Location, TextBuffer};
use quill_syntax::{CstParser, GrammarConfig, HighlightError, SyntaxHighlighter};
use thiserror::Error;

/// Errors reported by the driver.
#[derive(Error, Debug)]
pub enum QuillError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error("no grammar handles {}", path.display())]
    UnsupportedFile { path: PathBuf },
}

/// The outcome of one highlighting pass over a buffer.
#[derive(Debug)]
pub struct Highlighted {
    /// One colored line per buffer line.
    pub lines: Vec<ColoredString>,
    /// Kind and location of every missing node the parser inserted.
    pub missing: Vec<(String, Location)>,
    /// Time spent parsing and producing lines.
    pub elapsed: Duration,
}

/// Picks a grammar from the file extension.
pub fn grammar_for_path(path: &Path) -> Result<GrammarConfig, QuillError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(GrammarConfig::for_extension)
        .ok_or_else(|| QuillError::UnsupportedFile {
            path: path.to_path_buf(),
        })
}

/// Parses the buffer and produces all of its colored lines.
pub fn highlight_buffer(
    buffer: &TextBuffer,
    grammar: &GrammarConfig,
    parser: &mut CstParser,
) -> Result<Highlighted, QuillError> {
    let started = Instant::now();
    let source = buffer.text();
    let tree = parser.parse(source)?;

    let mut highlighter = SyntaxHighlighter::new(source, &tree, grammar)?;
    let mut lines = Vec::with_capacity(buffer.len());
    while let Some(line) = highlighter.next_line()? {
        lines.push(line);
    }
    let elapsed = started.elapsed();

    let mut missing = Vec::new();
    for node in highlighter.errors() {
        // Missing nodes are zero-width; mark the character they follow
        let offset = node.start_byte().min(source.len().saturating_sub(1));
        let location = match buffer.location_of(offset) {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(offset, error = %err, "cannot place missing node");
                continue;
            }
        };

        let line_start = buffer.line_start(location.line)?;
        if let Some(line) = lines.get_mut(location.line) {
            let col = offset - line_start;
            line.set_error(col.saturating_sub(1), col);
        }
        missing.push((node.kind().to_string(), location));
    }

    Ok(Highlighted {
        lines,
        missing,
        elapsed,
    })
}

/// Formats a line's segments for debugging, e.g. `PrimType "int" | None " "`.
pub fn describe_segments(line: &ColoredString) -> String {
    line.segments()
        .map(|(text, color)| format!("{:?} {:?}", color.class, text))
        .collect::<Vec<_>>()
        .join(" | ")
}
