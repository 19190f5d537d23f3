// Chunk: docs/chunks/colored_string - Run-length colored string overlay

//! A string with a run-length color overlay.
//!
//! [`ColoredString`] is the unit the highlighter produces and the renderer
//! consumes: one display line whose bytes are partitioned into [`ColorRun`]s.
//!
//! # Invariants
//!
//! - `runs[0].start == 0`
//! - run starts are strictly increasing and lie inside the text
//! - byte `i` is colored by the run with the greatest `start <= i`
//!
//! Indices are byte offsets into the backing text. Range operations round
//! them out to character boundaries, so a run never starts inside a UTF-8
//! sequence.

use std::fmt;

use crate::color::Color;

/// A color taking effect at a byte offset of the backing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRun {
    pub color: Color,
    pub start: usize,
}

impl ColorRun {
    pub fn new(color: Color, start: usize) -> Self {
        Self { color, start }
    }
}

/// A string plus an ordered run-length color overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredString {
    text: String,
    runs: Vec<ColorRun>,
    /// Run 0 is a placeholder that has not received a color yet. It reads back
    /// as [`Color::NONE`].
    unset: bool,
    /// Next run handed out by [`ColoredString::next_color_segment`].
    next_segment: usize,
}

impl ColoredString {
    /// Creates an empty string whose first run is still unset.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            runs: vec![ColorRun::new(Color::NONE, 0)],
            unset: true,
            next_segment: 0,
        }
    }

    /// Creates a string with a single uncolored run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_color(text, Color::NONE)
    }

    /// Creates a string colored uniformly with `color`.
    pub fn with_color(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            runs: vec![ColorRun::new(color, 0)],
            unset: false,
            next_segment: 0,
        }
    }

    /// Creates a string from text and an explicit run list.
    ///
    /// Runs are applied through [`ColoredString::set_colors`].
    pub fn with_runs(text: impl Into<String>, runs: &[ColorRun]) -> Self {
        let mut colored = Self::new();
        colored.text = text.into();
        colored.set_colors(runs);
        colored
    }

    // ==================== Accessors ====================

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the backing text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn runs(&self) -> &[ColorRun] {
        &self.runs
    }

    /// Returns the start of the last run.
    pub fn last_run_start(&self) -> usize {
        self.runs.last().map(|run| run.start).unwrap_or(0)
    }

    /// Returns the color covering byte `index`.
    ///
    /// Indices past the end report the color of the last run.
    pub fn color_at(&self, index: usize) -> Color {
        self.runs[self.run_index(index)].color
    }

    /// Index into `runs` of the run covering byte `index`.
    fn run_index(&self, index: usize) -> usize {
        // runs[0].start == 0, so at least one run satisfies the predicate
        self.runs.partition_point(|run| run.start <= index) - 1
    }

    // ==================== Construction ====================

    /// Replaces all runs.
    ///
    /// A list that does not start at 0 gets an uncolored run inserted at 0.
    /// Runs that do not start strictly after the previous run, that start at
    /// or past the end of the text, or that start inside a character are
    /// ignored.
    pub fn set_colors(&mut self, runs: &[ColorRun]) {
        self.clear_colors();
        for run in runs {
            self.add_run(*run);
        }
    }

    /// Returns the run list to its unset initial state.
    pub fn clear_colors(&mut self) {
        self.runs.clear();
        self.runs.push(ColorRun::new(Color::NONE, 0));
        self.unset = true;
        self.next_segment = 0;
    }

    fn add_run(&mut self, run: ColorRun) {
        if self.unset {
            self.unset = false;
            if run.start == 0 {
                self.runs[0] = run;
                return;
            }
        }

        if run.start < self.text.len()
            && run.start > self.last_run_start()
            && self.text.is_char_boundary(run.start)
        {
            self.runs.push(run);
        }
    }

    /// Splits the run covering `run.start` so that `run` takes effect there.
    ///
    /// Ignored if `run.start` is already a run boundary or outside the text.
    pub fn insert_run(&mut self, run: ColorRun) {
        if run.start >= self.text.len() || !self.text.is_char_boundary(run.start) {
            return;
        }
        let index = self.run_index(run.start);
        if self.runs[index].start != run.start {
            self.runs.insert(index + 1, run);
        }
    }

    /// Appends uncolored text.
    pub fn append(&mut self, text: &str) {
        self.append_colored(text, Color::NONE);
    }

    /// Appends text in the given color.
    ///
    /// Empty text is ignored so no zero-length run is ever created. While the
    /// string is still unset and empty, the color is given to the first run
    /// in place.
    pub fn append_colored(&mut self, text: &str, color: Color) {
        if text.is_empty() {
            return;
        }

        let end = self.text.len();
        if self.unset {
            self.unset = false;
            if end == 0 {
                self.runs[0].color = color;
                self.text.push_str(text);
                return;
            }
        }

        self.text.push_str(text);
        self.runs.push(ColorRun::new(color, end));
    }

    /// Removes the last character.
    ///
    /// A trailing run left without any text is dropped; the first run is
    /// always kept.
    pub fn erase_back(&mut self) {
        if self.text.pop().is_none() {
            return;
        }
        let len = self.text.len();
        if self.runs.len() > 1 && self.last_run_start() == len {
            self.runs.pop();
        }
    }

    /// Merges consecutive runs that share the same color.
    ///
    /// Never changes [`ColoredString::color_at`]. Not called automatically so
    /// that appending stays cheap; call it once a line is complete.
    pub fn simplify(&mut self) {
        self.runs.dedup_by(|later, earlier| later.color == earlier.color);
    }

    // ==================== Decoration ====================

    /// Marks bytes `start..=end` as highlighted.
    pub fn set_highlight(&mut self, start: usize, end: usize) {
        self.apply_modifier(start, end, Color::to_highlight);
    }

    /// Marks bytes `start..=end` as erroneous.
    pub fn set_error(&mut self, start: usize, end: usize) {
        self.apply_modifier(start, end, Color::to_error);
    }

    /// Removes any modifier from bytes `start..=end`.
    pub fn clear_modifier(&mut self, start: usize, end: usize) {
        self.apply_modifier(start, end, Color::clear_modifier);
    }

    fn apply_modifier(&mut self, start: usize, end: usize, transform: fn(Color) -> Color) {
        let len = self.text.len();
        if start > end || start >= len {
            return;
        }

        let first = self.floor_char_boundary(start);
        let past_last = self.ceil_char_boundary(end.min(len - 1) + 1);

        self.split_at(first);
        if past_last < len {
            self.split_at(past_last);
        }

        for run in self
            .runs
            .iter_mut()
            .filter(|run| run.start >= first && run.start < past_last)
        {
            run.color = transform(run.color);
        }
        self.unset = false;
    }

    /// Ensures a run boundary at `index`, duplicating the covering run.
    fn split_at(&mut self, index: usize) {
        let covering = self.run_index(index);
        if self.runs[covering].start != index {
            let color = self.runs[covering].color;
            self.runs.insert(covering + 1, ColorRun::new(color, index));
        }
    }

    fn floor_char_boundary(&self, mut index: usize) -> usize {
        while !self.text.is_char_boundary(index) {
            index -= 1;
        }
        index
    }

    fn ceil_char_boundary(&self, mut index: usize) -> usize {
        while index < self.text.len() && !self.text.is_char_boundary(index) {
            index += 1;
        }
        index
    }

    // ==================== Segments ====================

    /// Returns the next `(text, color)` segment, advancing an internal cursor.
    ///
    /// Segments come out in order and cover the whole string once. The cursor
    /// is forward-only; it restarts only when the colors are replaced.
    pub fn next_color_segment(&mut self) -> Option<(&str, Color)> {
        if self.text.is_empty() || self.next_segment >= self.runs.len() {
            return None;
        }

        let index = self.next_segment;
        self.next_segment += 1;
        let (start, end) = self.run_bounds(index);
        Some((&self.text[start..end], self.runs[index].color))
    }

    /// Iterates over all `(text, color)` segments from the beginning.
    pub fn segments(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        (0..self.runs.len())
            .filter(move |_| !self.text.is_empty())
            .map(move |index| {
                let (start, end) = self.run_bounds(index);
                (&self.text[start..end], self.runs[index].color)
            })
    }

    fn run_bounds(&self, index: usize) -> (usize, usize) {
        let start = self.runs[index].start;
        let end = self
            .runs
            .get(index + 1)
            .map(|next| next.start)
            .unwrap_or(self.text.len());
        (start, end)
    }
}

impl Default for ColoredString {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
