// Chunk: docs/chunks/debug_driver - Load, colorize and print a source file

//! ANSI rendering of styled lines for terminal output.

use crossterm::style::{Attribute, Color as AnsiColor, ContentStyle, StyledContent};
use quill_buffer::{Style, StyledLine, TermColor, UnderlineStyle};

/// Renders a styled line as text with ANSI escape sequences.
///
/// Unstyled spans are emitted without any escape sequence.
pub fn render_line(line: &StyledLine) -> String {
    line.spans
        .iter()
        .map(|span| StyledContent::new(content_style(&span.style), span.text.as_str()).to_string())
        .collect()
}

fn content_style(style: &Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = term_color(style.fg);
    content.background_color = term_color(style.bg);
    content.underline_color = style.underline_color.and_then(term_color);

    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.italic {
        content.attributes.set(Attribute::Italic);
    }
    match style.underline {
        UnderlineStyle::None => {}
        UnderlineStyle::Single => content.attributes.set(Attribute::Underlined),
        UnderlineStyle::Curly => content.attributes.set(Attribute::Undercurled),
    }
    content
}

fn term_color(color: TermColor) -> Option<AnsiColor> {
    match color {
        TermColor::Default => None,
        TermColor::Named(named) => Some(AnsiColor::AnsiValue(named.ansi_index())),
        TermColor::Indexed(index) => Some(AnsiColor::AnsiValue(index)),
        TermColor::Rgb { r, g, b } => Some(AnsiColor::Rgb { r, g, b }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_buffer::{NamedColor, Span};

    #[test]
    fn test_plain_span_has_no_escapes() {
        let line = StyledLine::new(vec![Span::plain("int x;")]);
        assert_eq!(render_line(&line), "int x;");
    }

    #[test]
    fn test_styled_span_is_escaped() {
        let style = Style {
            fg: TermColor::Named(NamedColor::Red),
            italic: true,
            ..Style::default()
        };
        let rendered = render_line(&StyledLine::new(vec![Span::new("oops", style)]));
        assert!(rendered.starts_with('\x1b'));
        assert!(rendered.contains("oops"));
    }

    #[test]
    fn test_term_color_mapping() {
        assert_eq!(term_color(TermColor::Default), None);
        assert_eq!(
            term_color(TermColor::Named(NamedColor::BrightBlue)),
            Some(AnsiColor::AnsiValue(12))
        );
        assert_eq!(
            term_color(TermColor::Rgb { r: 1, g: 2, b: 3 }),
            Some(AnsiColor::Rgb { r: 1, g: 2, b: 3 })
        );
    }
}
