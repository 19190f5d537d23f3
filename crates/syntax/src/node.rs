// Chunk: docs/chunks/syntax_highlighting - CST-driven line colorizer

//! The view of a concrete syntax tree node the highlighter walks.
//!
//! [`SyntaxHighlighter`](crate::SyntaxHighlighter) only needs kind names,
//! byte ranges and the parent/child/sibling links. Keeping that behind a trait
//! lets the walk run over tree-sitter nodes in production and over small
//! hand-built trees in tests.

use std::fmt;

use tree_sitter::Node;

/// A cheap handle to a node of a concrete syntax tree.
///
/// Absent links are `None`. Two handles compare equal when they name the same
/// node of the same tree.
pub trait SyntaxNode: Copy + PartialEq + fmt::Debug {
    /// Grammar kind name, e.g. `"identifier"` or `";"`.
    fn kind(&self) -> &str;

    fn start_byte(&self) -> usize;

    fn end_byte(&self) -> usize;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<Self>;

    fn parent(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn prev_sibling(&self) -> Option<Self>;

    /// True for zero-width nodes the parser inserted to recover from an error.
    fn is_missing(&self) -> bool;
}

impl<'tree> SyntaxNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn start_byte(&self) -> usize {
        Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        Node::end_byte(self)
    }

    fn child_count(&self) -> usize {
        Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        Node::child(self, index.try_into().ok()?)
    }

    fn parent(&self) -> Option<Self> {
        Node::parent(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        Node::next_sibling(self)
    }

    fn prev_sibling(&self) -> Option<Self> {
        Node::prev_sibling(self)
    }

    fn is_missing(&self) -> bool {
        Node::is_missing(self)
    }
}
