// Chunk: docs/chunks/syntax_highlighting - CST-driven line colorizer

//! Turns a concrete syntax tree into colored display lines.
//!
//! The `SyntaxHighlighter` walks the tree in document order, treating token
//! nodes as atomic, and pulls one [`ColoredString`] per source line on demand.
//!
//! ## Line production
//!
//! Source text falls into two kinds of segments: token text, painted with the
//! token's color, and the gaps between tokens (whitespace, and anything the
//! grammar left outside a token), painted as plain text. Both are fed into an
//! open line; every `'\n'` completes it and queues it. Multi-line tokens such
//! as block comments therefore produce one uniformly colored piece per line,
//! and blank lines between statements come out as empty lines.
//!
//! Because every byte of the source is fed exactly once, joining the produced
//! lines with `'\n'` gives back the source (minus its final newline).

use std::collections::VecDeque;
use std::mem;

use quill_buffer::{Color, ColorClass, ColoredString};
use tree_sitter::{Node, Tree};

use crate::error::HighlightError;
use crate::grammar::GrammarConfig;
use crate::node::SyntaxNode;

type Result<T> = std::result::Result<T, HighlightError>;

/// A pull-based line colorizer over one syntax tree snapshot.
///
/// The highlighter borrows the source it was parsed from, so the text cannot
/// change while lines are being produced.
pub struct SyntaxHighlighter<'a, N> {
    source: &'a str,
    grammar: &'a GrammarConfig,
    root: N,
    /// Position of the preorder walk; `None` once the walk is exhausted.
    cursor: Option<N>,
    /// Token whose text is fed next.
    current: Option<N>,
    /// Token whose text was fed last.
    last_token: Option<N>,
    /// First token in document order.
    start: Option<N>,
    /// Last token in document order.
    end: Option<N>,
    /// Bytes of `source` already fed into lines.
    consumed: usize,
    /// Line under construction.
    open: ColoredString,
    pending: VecDeque<ColoredString>,
    /// Missing nodes stepped over by the walk.
    errors: Vec<N>,
    finished: bool,
    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> SyntaxHighlighter<'a, Node<'a>> {
    /// Creates a highlighter over a tree-sitter tree parsed from `source`.
    pub fn new(source: &'a str, tree: &'a Tree, grammar: &'a GrammarConfig) -> Result<Self> {
        Self::with_root(source, tree.root_node(), grammar)
    }
}

impl<'a, N: SyntaxNode> SyntaxHighlighter<'a, N> {
    /// Creates a highlighter over the tree below `root`.
    ///
    /// Fails if a node on the path to the first or last token has a kind the
    /// grammar does not classify.
    pub fn with_root(source: &'a str, root: N, grammar: &'a GrammarConfig) -> Result<Self> {
        let mut highlighter = Self {
            source,
            grammar,
            root,
            cursor: Some(root),
            current: None,
            last_token: None,
            start: None,
            end: None,
            consumed: 0,
            open: ColoredString::new(),
            pending: VecDeque::new(),
            errors: Vec::new(),
            finished: false,
            failed: false,
        };

        highlighter.start = highlighter.first_token_within(root)?;
        highlighter.end = highlighter.last_token_within(root)?;
        highlighter.current = highlighter.next_token()?;
        Ok(highlighter)
    }

    // ==================== Accessors ====================

    /// First token of the tree, if any.
    pub fn start_token(&self) -> Option<N> {
        self.start
    }

    /// Last token of the tree, if any.
    pub fn end_token(&self) -> Option<N> {
        self.end
    }

    /// Token that the next call to [`SyntaxHighlighter::next_line`] feeds first.
    pub fn current_token(&self) -> Option<N> {
        self.current
    }

    /// Missing nodes the walk has stepped over so far.
    pub fn errors(&self) -> &[N] {
        &self.errors
    }

    // ==================== Classification ====================

    fn is_token(&self, node: N) -> Result<bool> {
        self.grammar
            .classify(node.kind())
            .ok_or_else(|| HighlightError::Classification {
                kind: node.kind().to_string(),
            })
    }

    /// Color a token is painted with.
    ///
    /// Identifiers naming the function in a declarator are functions, all
    /// other identifiers are variables.
    pub fn color_of(&self, token: N) -> Color {
        let class = if token.kind() == "identifier" {
            match token.parent() {
                Some(parent) if parent.kind() == "function_declarator" => ColorClass::Function,
                _ => ColorClass::Variable,
            }
        } else {
            self.grammar.color_of(token.kind())
        };
        Color::new(class)
    }

    // ==================== Traversal ====================

    /// Advances the walk by one node in preorder.
    ///
    /// Structural nodes are entered; tokens and missing nodes are not, since a
    /// token's text already covers its children.
    fn step_cursor(&mut self) -> Result<()> {
        let Some(node) = self.cursor else {
            return Ok(());
        };

        if !node.is_missing() && !self.is_token(node)? {
            if let Some(child) = node.child(0) {
                self.cursor = Some(child);
                return Ok(());
            }
        }

        self.cursor = self.advance_from(node);
        Ok(())
    }

    /// Next node after `node`'s subtree, or `None` at the end of the tree.
    fn advance_from(&self, mut node: N) -> Option<N> {
        loop {
            if node == self.root {
                return None;
            }
            if let Some(sibling) = node.next_sibling() {
                return Some(sibling);
            }
            node = node.parent()?;
        }
    }

    /// Moves the walk to the next token, recording missing nodes on the way.
    fn next_token(&mut self) -> Result<Option<N>> {
        loop {
            self.step_cursor()?;
            let Some(node) = self.cursor else {
                return Ok(None);
            };

            if node.is_missing() {
                tracing::debug!(
                    kind = node.kind(),
                    offset = node.start_byte(),
                    "skipping missing node"
                );
                self.errors.push(node);
                continue;
            }

            if self.is_token(node)? {
                return Ok(Some(node));
            }
        }
    }

    /// First token at or below `node` in document order.
    fn first_token_within(&self, node: N) -> Result<Option<N>> {
        if node.is_missing() {
            return Ok(None);
        }
        if self.is_token(node)? {
            return Ok(Some(node));
        }
        for index in 0..node.child_count() {
            if let Some(child) = node.child(index) {
                if let Some(token) = self.first_token_within(child)? {
                    return Ok(Some(token));
                }
            }
        }
        Ok(None)
    }

    /// Last token at or below `node` in document order.
    fn last_token_within(&self, node: N) -> Result<Option<N>> {
        if node.is_missing() {
            return Ok(None);
        }
        if self.is_token(node)? {
            return Ok(Some(node));
        }
        for index in (0..node.child_count()).rev() {
            if let Some(child) = node.child(index) {
                if let Some(token) = self.last_token_within(child)? {
                    return Ok(Some(token));
                }
            }
        }
        Ok(None)
    }

    /// Token following `node` in document order, without moving the walk.
    pub fn next_token_of(&self, mut node: N) -> Result<Option<N>> {
        loop {
            if node == self.root {
                return Ok(None);
            }
            let mut sibling = node.next_sibling();
            while let Some(candidate) = sibling {
                if let Some(token) = self.first_token_within(candidate)? {
                    return Ok(Some(token));
                }
                sibling = candidate.next_sibling();
            }
            match node.parent() {
                Some(parent) => node = parent,
                None => return Ok(None),
            }
        }
    }

    /// Token preceding `node` in document order, without moving the walk.
    pub fn prev_token_of(&self, mut node: N) -> Result<Option<N>> {
        loop {
            if node == self.root {
                return Ok(None);
            }
            let mut sibling = node.prev_sibling();
            while let Some(candidate) = sibling {
                if let Some(token) = self.last_token_within(candidate)? {
                    return Ok(Some(token));
                }
                sibling = candidate.prev_sibling();
            }
            match node.parent() {
                Some(parent) => node = parent,
                None => return Ok(None),
            }
        }
    }

    /// Returns true if `node` is the first token on its source line.
    pub fn starts_line(&self, node: N) -> Result<bool> {
        if Some(node) == self.start {
            return Ok(true);
        }
        let Some(prev) = self.prev_token_of(node)? else {
            return Ok(true);
        };
        Ok(self
            .source
            .get(prev.end_byte()..node.start_byte())
            .is_some_and(|gap| gap.contains('\n')))
    }

    // ==================== Line Production ====================

    /// Returns the next source line, or `None` once every line was produced.
    ///
    /// Lines come out in source order. An unclassified node kind is fatal.
    pub fn next_line(&mut self) -> Result<Option<ColoredString>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                tracing::trace!(text = line.text(), runs = line.runs().len(), "line");
                return Ok(Some(line));
            }
            if self.finished {
                return Ok(None);
            }

            match self.current {
                Some(token) => {
                    let start = token.start_byte().max(self.consumed);
                    let end = token.end_byte().max(start);
                    self.feed(start, Color::NONE);
                    self.feed(end, self.color_of(token));
                    self.last_token = Some(token);
                    self.current = self.next_token()?;
                }
                None => {
                    debug_assert_eq!(self.last_token, self.end);
                    self.feed(self.source.len(), Color::NONE);
                    if !self.open.is_empty() {
                        self.complete_line();
                    }
                    self.finished = true;
                }
            }
        }
    }

    /// Feeds `source[consumed..until]` into the open line in one color.
    fn feed(&mut self, until: usize, color: Color) {
        let source = self.source;
        let Some(mut text) = source.get(self.consumed..until) else {
            return;
        };

        while let Some(newline) = text.find('\n') {
            self.open.append_colored(&text[..newline], color);
            self.complete_line();
            text = &text[newline + 1..];
        }
        self.open.append_colored(text, color);
        self.consumed = until;
    }

    fn complete_line(&mut self) {
        let mut line = mem::take(&mut self.open);
        line.simplify();
        self.pending.push_back(line);
    }
}

impl<'a, N: SyntaxNode> Iterator for SyntaxHighlighter<'a, N> {
    type Item = Result<ColoredString>;

    /// Yields lines until the source is exhausted or an error occurs.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_line() {
            Ok(line) => line.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
