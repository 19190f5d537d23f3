// Chunk: docs/chunks/syntax_highlighting - Catppuccin Mocha theme for syntax highlighting

//! Syntax theme mapping semantic colors to styles.
//!
//! This module provides a `SyntaxTheme` that maps each [`ColorClass`] a
//! highlighted line can carry to a visual style using the Catppuccin Mocha
//! color palette. Modifiers are layered on top: highlighted text gets a
//! surface background, erroneous text a curly red underline.

use std::collections::HashMap;

use quill_buffer::{
    Color, ColorClass, ColoredString, Modifier, Span, Style, StyledLine, UnderlineStyle,
};

/// Catppuccin Mocha color palette constants.
///
/// These are 24-bit RGB colors from the Catppuccin Mocha theme.
mod catppuccin {
    use quill_buffer::TermColor;

    pub const MAUVE: TermColor = TermColor::Rgb {
        r: 0xcb,
        g: 0xa6,
        b: 0xf7,
    }; // #cba6f7
    pub const BLUE: TermColor = TermColor::Rgb {
        r: 0x89,
        g: 0xb4,
        b: 0xfa,
    }; // #89b4fa
    pub const GREEN: TermColor = TermColor::Rgb {
        r: 0xa6,
        g: 0xe3,
        b: 0xa1,
    }; // #a6e3a1
    pub const PEACH: TermColor = TermColor::Rgb {
        r: 0xfa,
        g: 0xb3,
        b: 0x87,
    }; // #fab387
    pub const YELLOW: TermColor = TermColor::Rgb {
        r: 0xf9,
        g: 0xe2,
        b: 0xaf,
    }; // #f9e2af
    pub const RED: TermColor = TermColor::Rgb {
        r: 0xf3,
        g: 0x8b,
        b: 0xa8,
    }; // #f38ba8
    pub const LAVENDER: TermColor = TermColor::Rgb {
        r: 0xb4,
        g: 0xbe,
        b: 0xfe,
    }; // #b4befe

    // Surface/text colors
    pub const TEXT: TermColor = TermColor::Rgb {
        r: 0xcd,
        g: 0xd6,
        b: 0xf4,
    }; // #cdd6f4
    pub const OVERLAY0: TermColor = TermColor::Rgb {
        r: 0x6c,
        g: 0x70,
        b: 0x86,
    }; // #6c7086
    pub const SURFACE1: TermColor = TermColor::Rgb {
        r: 0x45,
        g: 0x47,
        b: 0x5a,
    }; // #45475a
}

/// A mapping from semantic color classes to visual styles.
pub struct SyntaxTheme {
    /// Style for each class, before modifiers are applied
    styles: HashMap<ColorClass, Style>,
}

impl SyntaxTheme {
    /// Creates the Catppuccin Mocha syntax theme.
    pub fn catppuccin_mocha() -> Self {
        let mut styles = HashMap::new();

        // Plain text - Text
        styles.insert(
            ColorClass::None,
            Style {
                fg: catppuccin::TEXT,
                ..Style::default()
            },
        );

        // Built-in types - Yellow italic
        styles.insert(
            ColorClass::PrimType,
            Style {
                fg: catppuccin::YELLOW,
                italic: true,
                ..Style::default()
            },
        );

        // Types - Yellow
        styles.insert(
            ColorClass::Type,
            Style {
                fg: catppuccin::YELLOW,
                ..Style::default()
            },
        );

        // Functions - Blue
        styles.insert(
            ColorClass::Function,
            Style {
                fg: catppuccin::BLUE,
                ..Style::default()
            },
        );

        // Variables - Lavender
        styles.insert(
            ColorClass::Variable,
            Style {
                fg: catppuccin::LAVENDER,
                ..Style::default()
            },
        );

        // Comments - Overlay0 with italic
        styles.insert(
            ColorClass::Comment,
            Style {
                fg: catppuccin::OVERLAY0,
                italic: true,
                ..Style::default()
            },
        );

        // Strings - Green
        styles.insert(
            ColorClass::String,
            Style {
                fg: catppuccin::GREEN,
                ..Style::default()
            },
        );

        // Control flow and preprocessor - Mauve bold
        styles.insert(
            ColorClass::Statement,
            Style {
                fg: catppuccin::MAUVE,
                bold: true,
                ..Style::default()
            },
        );

        // Numbers - Peach
        styles.insert(
            ColorClass::Number,
            Style {
                fg: catppuccin::PEACH,
                ..Style::default()
            },
        );

        // Keywords - Mauve
        styles.insert(
            ColorClass::Keyword,
            Style {
                fg: catppuccin::MAUVE,
                ..Style::default()
            },
        );

        Self { styles }
    }

    /// Returns the style for a color, modifier included.
    pub fn style_for(&self, color: Color) -> Style {
        let base = self.styles.get(&color.class).copied().unwrap_or_default();
        match color.modifier {
            Modifier::Normal => base,
            Modifier::Highlighted => Style {
                bg: catppuccin::SURFACE1,
                ..base
            },
            Modifier::Error => Style {
                underline: UnderlineStyle::Curly,
                underline_color: Some(catppuccin::RED),
                ..base
            },
        }
    }

    /// Converts a colored line into styled spans, one per segment.
    pub fn styled_line(&self, line: &ColoredString) -> StyledLine {
        let spans = line
            .segments()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, color)| Span::new(text, self.style_for(color)))
            .collect();
        StyledLine::new(spans)
    }
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}
