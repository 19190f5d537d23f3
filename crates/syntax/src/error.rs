// Chunk: docs/chunks/syntax_highlighting - CST-driven line colorizer

//! Errors raised while configuring the parser or walking a tree.

use thiserror::Error;

/// Errors produced by [`CstParser`](crate::CstParser) and
/// [`SyntaxHighlighter`](crate::SyntaxHighlighter).
///
/// Missing nodes are not errors: the highlighter steps over them and records
/// them in [`SyntaxHighlighter::errors`](crate::SyntaxHighlighter::errors).
#[derive(Error, Debug)]
pub enum HighlightError {
    /// A node kind has no entry in the classification table.
    ///
    /// This is a configuration error; the highlighter cannot continue.
    #[error("node kind `{kind}` is not in the classification table")]
    Classification { kind: String },

    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser did not produce a tree")]
    Parse,
}
