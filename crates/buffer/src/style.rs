// Chunk: docs/chunks/terminal_style - Draw-time style types
//!
//! Terminal-grade styling handed to the renderer.
//!
//! Semantic [`Color`](crate::Color)s say what text is; the types here say what
//! it looks like. A theme maps one onto the other:
//! - [`TermColor`]: Named (16 ANSI), indexed (256), and RGB
//! - [`Style`]: fg/bg, bold, italic, underline variants
//! - [`Span`]: A run of text with uniform styling
//! - [`StyledLine`]: A sequence of spans comprising a single line

// =============================================================================
// Color Types
// =============================================================================

/// The 16 standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Index of this color in the 256-color palette.
    pub fn ansi_index(self) -> u8 {
        match self {
            NamedColor::Black => 0,
            NamedColor::Red => 1,
            NamedColor::Green => 2,
            NamedColor::Yellow => 3,
            NamedColor::Blue => 4,
            NamedColor::Magenta => 5,
            NamedColor::Cyan => 6,
            NamedColor::White => 7,
            NamedColor::BrightBlack => 8,
            NamedColor::BrightRed => 9,
            NamedColor::BrightGreen => 10,
            NamedColor::BrightYellow => 11,
            NamedColor::BrightBlue => 12,
            NamedColor::BrightMagenta => 13,
            NamedColor::BrightCyan => 14,
            NamedColor::BrightWhite => 15,
        }
    }
}

/// Terminal color representation.
///
/// Supports all common terminal color modes:
/// - Default (let the terminal/theme decide)
/// - Named ANSI colors (16 colors)
/// - Indexed (256-color palette)
/// - True color RGB (24-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermColor {
    /// Default foreground/background (terminal decides).
    #[default]
    Default,
    /// Named ANSI colors (0-15).
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

/// Underline rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    /// Curly/wavy underline (used for errors).
    Curly,
}

// =============================================================================
// Style
// =============================================================================

/// Text styling attributes.
///
/// The default style is unstyled text: default colors, no attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: TermColor,
    /// Background color.
    pub bg: TermColor,
    pub bold: bool,
    pub italic: bool,
    pub underline: UnderlineStyle,
    /// Underline color (None = use fg color).
    pub underline_color: Option<TermColor>,
}

// =============================================================================
// Span and StyledLine
// =============================================================================

/// A contiguous run of text with uniform styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    /// Creates a new span with the given text and style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span (default style).
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// A line as the renderer sees it: a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Creates a new styled line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Creates an empty line.
    pub fn empty() -> Self {
        Self { spans: vec![] }
    }

    /// Returns true if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the line's text with styling removed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns the total character count across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }
}
