// Chunk: docs/chunks/char_store - Arena-backed character store with sentinels

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the linked store and the cursor stay consistent
//! through long runs of inserts, deletes and movement.

use textflow_buffer::{Glyph, TextBuffer, Update};

/// Small deterministic generator so sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Asserts the cursor is the start sentinel or a content node.
fn assert_cursor_in_bounds(buf: &TextBuffer) {
    let store = buf.store();
    let cursor = buf.cursor();
    assert_ne!(cursor, store.end(), "cursor on end sentinel");
    let reachable = cursor == store.start() || store.iter().any(|(id, _)| id == cursor);
    assert!(reachable, "cursor not reachable from start sentinel");
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();

    for ch in "hello".chars() {
        buf.insert_char(ch);
    }
    assert_eq!(buf.content(), "hello");
    assert_eq!(buf.cursor(), buf.last_node());

    for _ in 0..5 {
        buf.backspace();
    }
    assert!(buf.is_empty());
    assert!(buf.cursor_at_start());

    // One more is a silent no-op
    assert_eq!(buf.backspace(), Update::None);
}

#[test]
fn test_type_in_middle_of_existing_text() {
    let mut buf = TextBuffer::from_str("first line\nthird line");

    // Walk to just after the line break
    for _ in 0.."first line\n".len() {
        buf.move_right();
    }
    assert_eq!(buf.store().glyph(buf.cursor()), Some(Glyph::LineBreak));

    buf.insert_str("second line\n");
    assert_eq!(buf.content(), "first line\nsecond line\nthird line");
}

#[test]
fn test_length_tracks_net_inserts_and_deletes() {
    let mut rng = Lcg(7);
    let mut buf = TextBuffer::new();
    let mut expected_len = 0usize;

    for _ in 0..5_000 {
        match rng.next() % 6 {
            0 | 1 | 2 => {
                let ch = match rng.next() % 5 {
                    0 => ' ',
                    1 => '\n',
                    _ => 'x',
                };
                buf.insert_char(ch);
                expected_len += 1;
            }
            3 => {
                if buf.backspace() == Update::FullRelayout {
                    expected_len -= 1;
                }
            }
            4 => {
                buf.move_left();
            }
            _ => {
                buf.move_right();
            }
        }
        assert_eq!(buf.len(), expected_len);
        assert_cursor_in_bounds(&buf);
    }
}

#[test]
fn test_backspace_after_moving_left_deletes_earlier_char() {
    let mut buf = TextBuffer::new();
    buf.insert_str("abc");
    buf.move_left();
    buf.backspace();
    assert_eq!(buf.content(), "ac");
    assert_eq!(buf.store().glyph(buf.cursor()), Some(Glyph::Char('a')));
}

#[test]
fn test_stale_handles_never_resolve_after_delete() {
    let mut buf = TextBuffer::new();
    buf.insert_str("ab");
    let b = buf.cursor();
    buf.backspace();
    buf.insert_char('c');

    assert!(!buf.store().contains(b));
    assert_eq!(buf.store().glyph(b), None);
    assert_eq!(buf.content(), "ac");
}

#[test]
fn test_load_then_edit_then_save() {
    let mut buf = TextBuffer::new();
    buf.load_bytes(b"line one\r\nline two\r\n");
    buf.move_to_buffer_end();
    buf.insert_str("line three");
    assert_eq!(buf.to_bytes(), b"line one\nline two\nline three");
}
