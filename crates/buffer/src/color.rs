// Chunk: docs/chunks/colored_string - Run-length colored string overlay

//! Semantic colors attached to runs of a [`ColoredString`](crate::ColoredString).
//!
//! A color is a semantic class (what the text *is*) plus a modifier layered on
//! top (how it is currently decorated). The renderer decides what a class looks
//! like; this crate only tracks the classification.

/// Semantic class of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorClass {
    /// Plain text: whitespace, punctuation, unclassified tokens.
    #[default]
    None,
    /// Built-in types (`int`, `char`, `bool`).
    PrimType,
    /// User-defined type names.
    Type,
    /// Function names at their declaration.
    Function,
    /// Identifiers that are not function declarators.
    Variable,
    Comment,
    String,
    /// Control-flow statements and preprocessor directives.
    Statement,
    Number,
    /// Remaining keywords and literal constants.
    Keyword,
}

/// Decoration layered on a base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    Normal,
    /// Selected or search-matched text.
    Highlighted,
    /// Text covered by a diagnostic.
    Error,
}

/// A semantic color: base class plus modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub class: ColorClass,
    pub modifier: Modifier,
}

impl Color {
    /// Plain text with no decoration.
    pub const NONE: Color = Color::new(ColorClass::None);

    pub const fn new(class: ColorClass) -> Self {
        Self {
            class,
            modifier: Modifier::Normal,
        }
    }

    /// Returns this color with the highlight modifier.
    pub fn to_highlight(self) -> Self {
        Self {
            modifier: Modifier::Highlighted,
            ..self
        }
    }

    /// Returns this color with the error modifier.
    pub fn to_error(self) -> Self {
        Self {
            modifier: Modifier::Error,
            ..self
        }
    }

    /// Returns the base color without any modifier.
    pub fn clear_modifier(self) -> Self {
        Self {
            modifier: Modifier::Normal,
            ..self
        }
    }
}

impl From<ColorClass> for Color {
    fn from(class: ColorClass) -> Self {
        Color::new(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_keep_class() {
        let color = Color::new(ColorClass::Comment);
        assert_eq!(color.to_highlight().class, ColorClass::Comment);
        assert_eq!(color.to_error().modifier, Modifier::Error);
        assert_eq!(color.to_error().clear_modifier(), color);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Color::default(), Color::NONE);
    }
}
