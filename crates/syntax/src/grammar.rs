// Chunk: docs/chunks/syntax_highlighting - Classification and color tables for C++

//! Grammar configuration: which node kinds are tokens, and how tokens are
//! colored.
//!
//! The highlighter walks a concrete syntax tree and needs two facts about
//! every node kind it meets:
//!
//! - whether the kind is a **token** (its whole text is emitted in one color
//!   and its children are never visited) or **structural** (only its children
//!   matter)
//! - for tokens, the [`ColorClass`] to paint them with
//!
//! [`GrammarConfig::cpp`] builds both tables once for the tree-sitter C++
//! grammar. Every kind the grammar can produce gets a classification: unnamed
//! kinds (punctuation, operators, keywords) are tokens, named kinds are tokens
//! only when listed in [`CPP_NAMED_TOKENS`]. A kind outside the table is a
//! configuration error reported by the highlighter.

use std::collections::HashMap;

use quill_buffer::ColorClass;
use tree_sitter::Language;

/// Named C++ kinds whose text is emitted as a single token.
///
/// Literals are atomic even though the grammar gives them children
/// (`string_content`, `escape_sequence`, `literal_suffix`).
pub const CPP_NAMED_TOKENS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "namespace_identifier",
    "statement_identifier",
    "primitive_type",
    "number_literal",
    "user_defined_literal",
    "string_literal",
    "raw_string_literal",
    "char_literal",
    "system_lib_string",
    "comment",
    "preproc_arg",
    "preproc_directive",
    "preproc_call",
    "auto",
    "this",
    "true",
    "false",
    "nullptr",
    "virtual",
];

/// Token colors for C++. Tokens not listed here are plain text.
const CPP_COLORS: &[(&str, ColorClass)] = &[
    // Types
    ("primitive_type", ColorClass::PrimType),
    ("auto", ColorClass::PrimType),
    ("signed", ColorClass::PrimType),
    ("unsigned", ColorClass::PrimType),
    ("long", ColorClass::PrimType),
    ("short", ColorClass::PrimType),
    ("type_identifier", ColorClass::Type),
    ("namespace_identifier", ColorClass::Type),
    // Names
    ("field_identifier", ColorClass::Variable),
    ("statement_identifier", ColorClass::Variable),
    // Literals
    ("number_literal", ColorClass::Number),
    ("user_defined_literal", ColorClass::Number),
    ("string_literal", ColorClass::String),
    ("raw_string_literal", ColorClass::String),
    ("char_literal", ColorClass::String),
    ("system_lib_string", ColorClass::String),
    ("comment", ColorClass::Comment),
    // Control flow
    ("if", ColorClass::Statement),
    ("else", ColorClass::Statement),
    ("while", ColorClass::Statement),
    ("for", ColorClass::Statement),
    ("do", ColorClass::Statement),
    ("switch", ColorClass::Statement),
    ("case", ColorClass::Statement),
    ("default", ColorClass::Statement),
    ("return", ColorClass::Statement),
    ("break", ColorClass::Statement),
    ("continue", ColorClass::Statement),
    ("goto", ColorClass::Statement),
    ("try", ColorClass::Statement),
    ("catch", ColorClass::Statement),
    ("throw", ColorClass::Statement),
    ("co_return", ColorClass::Statement),
    ("co_yield", ColorClass::Statement),
    ("co_await", ColorClass::Statement),
    // Preprocessor
    ("#include", ColorClass::Statement),
    ("#define", ColorClass::Statement),
    ("#if", ColorClass::Statement),
    ("#ifdef", ColorClass::Statement),
    ("#ifndef", ColorClass::Statement),
    ("#elif", ColorClass::Statement),
    ("#elifdef", ColorClass::Statement),
    ("#elifndef", ColorClass::Statement),
    ("#else", ColorClass::Statement),
    ("#endif", ColorClass::Statement),
    ("preproc_directive", ColorClass::Statement),
    ("preproc_call", ColorClass::Statement),
    // Keywords
    ("const", ColorClass::Keyword),
    ("constexpr", ColorClass::Keyword),
    ("consteval", ColorClass::Keyword),
    ("constinit", ColorClass::Keyword),
    ("volatile", ColorClass::Keyword),
    ("mutable", ColorClass::Keyword),
    ("static", ColorClass::Keyword),
    ("extern", ColorClass::Keyword),
    ("inline", ColorClass::Keyword),
    ("register", ColorClass::Keyword),
    ("thread_local", ColorClass::Keyword),
    ("struct", ColorClass::Keyword),
    ("class", ColorClass::Keyword),
    ("union", ColorClass::Keyword),
    ("enum", ColorClass::Keyword),
    ("typedef", ColorClass::Keyword),
    ("typename", ColorClass::Keyword),
    ("template", ColorClass::Keyword),
    ("namespace", ColorClass::Keyword),
    ("using", ColorClass::Keyword),
    ("public", ColorClass::Keyword),
    ("private", ColorClass::Keyword),
    ("protected", ColorClass::Keyword),
    ("virtual", ColorClass::Keyword),
    ("override", ColorClass::Keyword),
    ("final", ColorClass::Keyword),
    ("friend", ColorClass::Keyword),
    ("explicit", ColorClass::Keyword),
    ("operator", ColorClass::Keyword),
    ("new", ColorClass::Keyword),
    ("delete", ColorClass::Keyword),
    ("sizeof", ColorClass::Keyword),
    ("decltype", ColorClass::Keyword),
    ("noexcept", ColorClass::Keyword),
    ("static_assert", ColorClass::Keyword),
    ("concept", ColorClass::Keyword),
    ("requires", ColorClass::Keyword),
    ("this", ColorClass::Keyword),
    ("true", ColorClass::Keyword),
    ("false", ColorClass::Keyword),
    ("nullptr", ColorClass::Keyword),
    ("NULL", ColorClass::Keyword),
];

/// File extensions parsed with the C++ grammar.
const CPP_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h"];

/// Classification and color tables for one tree-sitter grammar.
#[derive(Debug)]
pub struct GrammarConfig {
    language: Language,
    /// Node kind to is-token. Every kind the grammar produces has an entry.
    tokens: HashMap<&'static str, bool>,
    colors: HashMap<&'static str, ColorClass>,
}

impl GrammarConfig {
    /// Builds the tables for the tree-sitter C++ grammar.
    pub fn cpp() -> Self {
        let language: Language = tree_sitter_cpp::LANGUAGE.into();
        Self::from_language(language, CPP_NAMED_TOKENS, CPP_COLORS)
    }

    /// Returns the configuration for a file extension (without the leading
    /// dot), or `None` if no grammar handles it.
    pub fn for_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        if CPP_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::cpp())
        } else {
            None
        }
    }

    fn from_language(
        language: Language,
        named_tokens: &[&'static str],
        colors: &[(&'static str, ColorClass)],
    ) -> Self {
        let mut tokens = HashMap::new();
        // ERROR nodes are not part of the symbol table
        tokens.insert("ERROR", false);

        for id in 0..language.node_kind_count() {
            let Ok(id) = u16::try_from(id) else {
                break;
            };
            let Some(kind) = language.node_kind_for_id(id) else {
                continue;
            };
            let is_token = !language.node_kind_is_named(id) || named_tokens.contains(&kind);
            // A kind may be both named and unnamed; either way it is a token
            *tokens.entry(kind).or_insert(false) |= is_token;
        }

        tracing::debug!(kinds = tokens.len(), "built classification table");

        Self {
            language,
            tokens,
            colors: colors.iter().copied().collect(),
        }
    }

    /// The tree-sitter language the tables describe.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Returns whether `kind` is a token, or `None` if the kind is unknown.
    pub fn classify(&self, kind: &str) -> Option<bool> {
        self.tokens.get(kind).copied()
    }

    /// Returns the color class for a token kind. Unlisted kinds are plain.
    pub fn color_of(&self, kind: &str) -> ColorClass {
        self.colors.get(kind).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_keywords_are_tokens() {
        let grammar = GrammarConfig::cpp();
        for kind in [";", "=", "(", ")", "{", "}", "*", "return", "const", "#include"] {
            assert_eq!(grammar.classify(kind), Some(true), "{kind} should be a token");
        }
    }

    #[test]
    fn test_named_tokens() {
        let grammar = GrammarConfig::cpp();
        for kind in [
            "identifier",
            "primitive_type",
            "number_literal",
            "string_literal",
            "char_literal",
            "comment",
            "system_lib_string",
        ] {
            assert_eq!(grammar.classify(kind), Some(true), "{kind} should be a token");
        }
    }

    #[test]
    fn test_structural_kinds() {
        let grammar = GrammarConfig::cpp();
        for kind in [
            "translation_unit",
            "declaration",
            "init_declarator",
            "function_definition",
            "function_declarator",
            "parameter_list",
            "compound_statement",
            "return_statement",
            "expression_statement",
            "type_qualifier",
            "pointer_declarator",
            "preproc_include",
            "ERROR",
        ] {
            assert_eq!(grammar.classify(kind), Some(false), "{kind} should be structural");
        }
    }

    #[test]
    fn test_unknown_kind() {
        let grammar = GrammarConfig::cpp();
        assert_eq!(grammar.classify("not_a_cpp_kind"), None);
    }

    #[test]
    fn test_colors() {
        let grammar = GrammarConfig::cpp();
        assert_eq!(grammar.color_of("primitive_type"), ColorClass::PrimType);
        assert_eq!(grammar.color_of("comment"), ColorClass::Comment);
        assert_eq!(grammar.color_of("return"), ColorClass::Statement);
        assert_eq!(grammar.color_of("#include"), ColorClass::Statement);
        assert_eq!(grammar.color_of(";"), ColorClass::None);
    }

    #[test]
    fn test_for_extension() {
        assert!(GrammarConfig::for_extension("cpp").is_some());
        assert!(GrammarConfig::for_extension("HPP").is_some());
        assert!(GrammarConfig::for_extension("h").is_some());
        assert!(GrammarConfig::for_extension("rs").is_none());
    }
}
