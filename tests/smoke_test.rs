// Chunk: docs/chunks/debug_driver - Load, colorize and print a source file
//!
//! Smoke test for the load -> parse -> colorize pipeline.
//!
//! These tests go through real files on disk, the same path the `quill`
//! binary takes.

use std::fs;

use quill::{ansi, grammar_for_path, highlight_buffer, QuillError};
use quill_buffer::{BufferError, ColorClass, Location, Modifier, TextBuffer};
use quill_syntax::{CstParser, SyntaxTheme};

const PROGRAM: &str = r#"#include <iostream>

// Entry point
int main() {
    int total = 0;
    for (int i = 0; i < 3; ++i) {
        total += i;
    }
    std::cout << "total: " << total << std::endl;
    return 0;
}
"#;

#[test]
fn test_file_round_trips_through_highlighter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    fs::write(&path, PROGRAM).unwrap();

    let buffer = TextBuffer::open(&path).unwrap();
    let grammar = grammar_for_path(&path).unwrap();
    let mut parser = CstParser::new(&grammar).unwrap();
    let highlighted = highlight_buffer(&buffer, &grammar, &mut parser).unwrap();

    let texts: Vec<&str> = highlighted.lines.iter().map(|line| line.text()).collect();
    assert_eq!(format!("{}\n", texts.join("\n")), PROGRAM);
    assert!(highlighted.missing.is_empty());

    assert_eq!(highlighted.lines[2].color_at(0).class, ColorClass::Comment);
    assert_eq!(highlighted.lines[3].color_at(4).class, ColorClass::Function);
}

#[test]
fn test_edit_then_rehighlight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edit.cc");
    fs::write(&path, "int x = 1;\n").unwrap();

    let mut buffer = TextBuffer::open(&path).unwrap();
    buffer.add_line(1).unwrap();
    buffer
        .add_str(Location::new(1, 0), "/* note */ char c = 'q';")
        .unwrap();
    buffer.save().unwrap();

    let reloaded = TextBuffer::open(&path).unwrap();
    assert_eq!(reloaded.text(), "int x = 1;\n/* note */ char c = 'q';\n");

    let grammar = grammar_for_path(&path).unwrap();
    let mut parser = CstParser::new(&grammar).unwrap();
    let highlighted = highlight_buffer(&reloaded, &grammar, &mut parser).unwrap();
    assert_eq!(highlighted.lines.len(), 2);
    assert_eq!(highlighted.lines[1].color_at(0).class, ColorClass::Comment);
    assert_eq!(highlighted.lines[1].color_at(11).class, ColorClass::PrimType);
}

#[test]
fn test_missing_nodes_are_marked() {
    let buffer = TextBuffer::from_str("int main() {\n  return 0\n}\n");
    let grammar = grammar_for_path(std::path::Path::new("broken.cpp")).unwrap();
    let mut parser = CstParser::new(&grammar).unwrap();
    let highlighted = highlight_buffer(&buffer, &grammar, &mut parser).unwrap();

    assert_eq!(highlighted.lines.len(), 3);
    for (_, location) in &highlighted.missing {
        let line = &highlighted.lines[location.line];
        let marked = (0..line.len()).any(|i| line.color_at(i).modifier == Modifier::Error);
        assert!(marked || line.is_empty());
    }
}

#[test]
fn test_themed_output_keeps_text() {
    let buffer = TextBuffer::from_str("int x = 1;\n");
    let grammar = grammar_for_path(std::path::Path::new("x.hpp")).unwrap();
    let mut parser = CstParser::new(&grammar).unwrap();
    let highlighted = highlight_buffer(&buffer, &grammar, &mut parser).unwrap();

    let theme = SyntaxTheme::catppuccin_mocha();
    let styled = theme.styled_line(&highlighted.lines[0]);
    assert_eq!(styled.text(), "int x = 1;");
    assert!(ansi::render_line(&styled).contains("int"));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TextBuffer::open(dir.path().join("absent.cpp")).unwrap_err();
    assert!(matches!(err, BufferError::Read { .. }));

    let err = grammar_for_path(std::path::Path::new("notes.txt")).unwrap_err();
    assert!(matches!(err, QuillError::UnsupportedFile { .. }));
}
