// Chunk: docs/chunks/syntax_highlighting - CST-driven line colorizer

//! Thin wrapper around a tree-sitter [`Parser`] bound to a grammar.

use tree_sitter::{Parser, Tree};

use crate::error::HighlightError;
use crate::grammar::GrammarConfig;

/// Produces concrete syntax trees for a [`GrammarConfig`]'s language.
pub struct CstParser {
    parser: Parser,
}

impl CstParser {
    /// Creates a parser for the grammar's language.
    pub fn new(grammar: &GrammarConfig) -> Result<Self, HighlightError> {
        let mut parser = Parser::new();
        parser.set_language(grammar.language())?;
        Ok(Self { parser })
    }

    /// Parses `source` from scratch.
    pub fn parse(&mut self, source: &str) -> Result<Tree, HighlightError> {
        let tree = self.parser.parse(source, None).ok_or(HighlightError::Parse)?;
        tracing::debug!(
            bytes = source.len(),
            has_error = tree.root_node().has_error(),
            "parsed source"
        );
        Ok(tree)
    }
}
