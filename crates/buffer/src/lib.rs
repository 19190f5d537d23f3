// Chunk: docs/chunks/text_buffer - Line-addressable text buffer
// Chunk: docs/chunks/colored_string - Run-length colored string overlay

//! quill-buffer: text storage and colored display lines for the quill editor.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Loading and saving newline-terminated text files
//! - Line-addressed reads, intervals and selections
//! - Character, string and whole-line edits addressed by [`Location`]
//!
//! The display side is [`ColoredString`]: one line of text with a run-length
//! overlay of semantic [`Color`]s, which a theme turns into a [`StyledLine`].
//!
//! # Example
//!
//! ```
//! use quill_buffer::{Location, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("int x = 1;\n");
//! buffer.add_str(Location::new(0, 10), " // one").unwrap();
//! assert_eq!(buffer.line(0).unwrap(), "int x = 1; // one");
//!
//! buffer.add_line(1).unwrap();
//! assert_eq!(buffer.len(), 2);
//! ```

mod color;
mod colored_string;
mod error;
mod line_index;
mod style;
mod text_buffer;
mod types;

pub use color::{Color, ColorClass, Modifier};
pub use colored_string::{ColorRun, ColoredString};
pub use error::{BoundsKind, BufferError};
pub use style::{NamedColor, Span, Style, StyledLine, TermColor, UnderlineStyle};
pub use text_buffer::TextBuffer;
pub use types::{BoundsCheck, Location, Selection};
