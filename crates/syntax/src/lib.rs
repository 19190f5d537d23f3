// Chunk: docs/chunks/syntax_highlighting - CST-driven line colorizer

//! quill-syntax: tree-sitter based line colorizing for quill.
//!
//! This crate turns a concrete syntax tree into one [`ColoredString`] per
//! source line, pulled on demand.
//!
//! # Overview
//!
//! The main types are:
//!
//! - [`GrammarConfig`]: Classifies node kinds as tokens or structural nodes and
//!   maps token kinds to color classes.
//!
//! - [`CstParser`]: Wraps a tree-sitter `Parser` for a grammar.
//!
//! - [`SyntaxHighlighter`]: Walks a tree in document order and produces
//!   colored lines through `next_line()` or as an iterator.
//!
//! - [`SyntaxTheme`]: Maps color classes to Catppuccin Mocha styles.
//!
//! # Example
//!
//! ```
//! use quill_syntax::{CstParser, GrammarConfig, SyntaxHighlighter};
//!
//! let source = "int x = 1;\n";
//! let grammar = GrammarConfig::cpp();
//! let mut parser = CstParser::new(&grammar).unwrap();
//! let tree = parser.parse(source).unwrap();
//!
//! let lines: Vec<_> = SyntaxHighlighter::new(source, &tree, &grammar)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].text(), "int x = 1;");
//! ```
//!
//! [`ColoredString`]: quill_buffer::ColoredString

mod error;
mod grammar;
mod highlighter;
mod node;
mod parser;
mod theme;

pub use error::HighlightError;
pub use grammar::{GrammarConfig, CPP_NAMED_TOKENS};
pub use highlighter::SyntaxHighlighter;
pub use node::SyntaxNode;
pub use parser::CstParser;
pub use theme::SyntaxTheme;
