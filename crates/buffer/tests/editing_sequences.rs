// Chunk: docs/chunks/text_buffer - Line-addressable text buffer

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the text and line index stay in sync through
//! complex editing patterns, and that the trailing newline survives them.

use quill_buffer::{BoundsKind, BufferError, Location, Selection, TextBuffer};

fn assert_well_formed(buf: &TextBuffer) {
    if buf.is_empty() {
        assert_eq!(buf.len(), 0);
        return;
    }
    assert!(buf.text().ends_with('\n'), "missing final newline: {:?}", buf.text());
    assert_eq!(buf.len(), buf.text().matches('\n').count());
    for line in 0..buf.len() {
        assert!(!buf.line(line).unwrap().contains('\n'));
    }
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();
    buf.add_line(0).unwrap();

    for (col, ch) in "hello".chars().enumerate() {
        buf.add_char(Location::new(0, col), ch).unwrap();
    }
    assert_eq!(buf.line(0).unwrap(), "hello");

    for col in (0..5).rev() {
        buf.del_char(Location::new(0, col)).unwrap();
    }
    assert_eq!(buf.line(0).unwrap(), "");
    assert_eq!(buf.len(), 1);
    assert_well_formed(&buf);
}

#[test]
fn test_type_multiple_lines() {
    let mut buf = TextBuffer::new();
    buf.add_line(0).unwrap();
    buf.add_str(Location::new(0, 0), "first line\nsecond line\nthird line")
        .unwrap();

    assert_eq!(buf.len(), 3);
    assert_eq!(buf.line(0).unwrap(), "first line");
    assert_eq!(buf.line(1).unwrap(), "second line");
    assert_eq!(buf.line(2).unwrap(), "third line");

    buf.add_str(Location::new(1, 7), "awesome ").unwrap();
    assert_eq!(buf.line(1).unwrap(), "second awesome line");
    assert_well_formed(&buf);
}

#[test]
fn test_split_and_rejoin_lines() {
    let mut buf = TextBuffer::from_str("helloworld");

    buf.add_str(Location::new(0, 5), "\n").unwrap();
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.text(), "hello\nworld\n");

    // Deleting the newline through a selection joins the lines again
    buf.del_sel(Selection::new(Location::new(0, 5), Location::new(0, 5)))
        .unwrap();
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.text(), "helloworld\n");
}

#[test]
fn test_single_char_edits_never_touch_newlines() {
    let mut buf = TextBuffer::from_str("ab\ncd\n");

    let err = buf.del_char(Location::new(0, 2)).unwrap_err();
    assert!(matches!(err, BufferError::NewlineMutation { .. }));
    let err = buf.set_char(Location::new(1, 2), 'x').unwrap_err();
    assert!(matches!(err, BufferError::NewlineMutation { .. }));
    let err = buf.set_char(Location::new(0, 0), '\n').unwrap_err();
    assert!(matches!(err, BufferError::NewlineMutation { .. }));

    assert_eq!(buf.text(), "ab\ncd\n");
}

#[test]
fn test_line_operations_round_trip() {
    let mut buf = TextBuffer::from_str("one\ntwo\nthree\n");
    let original = buf.text().to_string();

    buf.add_lines(1, 3).unwrap();
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.line(1).unwrap(), "");
    assert_eq!(buf.line(4).unwrap(), "two");

    buf.del_lines(1, 3).unwrap();
    assert_eq!(buf.text(), original);
    assert_well_formed(&buf);
}

#[test]
fn test_delete_all_lines_then_rebuild() {
    let mut buf = TextBuffer::from_str("a\nb\n");
    buf.del_lines(0, 2).unwrap();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);

    buf.add_line(0).unwrap();
    buf.add_str(Location::new(0, 0), "again").unwrap();
    assert_eq!(buf.text(), "again\n");
    assert_well_formed(&buf);
}

#[test]
fn test_selection_spanning_lines() {
    let mut buf = TextBuffer::from_str("int main() {\n  return 0;\n}\n");
    let sel = Selection::new(Location::new(0, 11), Location::new(1, 1));
    assert_eq!(buf.sel(sel).unwrap(), "{\n  ");

    buf.del_sel(sel).unwrap();
    assert_eq!(buf.text(), "int main() return 0;\n}\n");
    assert_well_formed(&buf);
}

#[test]
fn test_out_of_bounds_reports_kind() {
    let buf = TextBuffer::from_str("abc\n");

    match buf.index(Location::new(3, 0)) {
        Err(BufferError::Bounds { kind, .. }) => assert_eq!(kind, BoundsKind::Line),
        other => panic!("expected line bounds error, got {:?}", other),
    }
    match buf.index(Location::new(0, 4)) {
        Err(BufferError::Bounds { kind, .. }) => assert_eq!(kind, BoundsKind::Column),
        other => panic!("expected column bounds error, got {:?}", other),
    }
}

#[test]
fn test_long_mixed_session_keeps_index_in_sync() {
    // Enough mutations to trigger the sampled line index assertion several times
    let mut buf = TextBuffer::new();
    buf.add_line(0).unwrap();

    for i in 0..300 {
        let line = i % buf.len();
        let col = buf.line_text_len(line);
        match i % 5 {
            0 => buf.add_str(Location::new(line, col), "x\ny").unwrap(),
            1 => buf.add_char(Location::new(line, 0), 'é').unwrap(),
            2 if col > 0 => buf.del_char(Location::new(line, 0)).unwrap(),
            3 => buf.add_line(line).unwrap(),
            4 if buf.len() > 2 => buf.del_line(line).unwrap(),
            _ => {}
        }
        assert_well_formed(&buf);
    }
}
