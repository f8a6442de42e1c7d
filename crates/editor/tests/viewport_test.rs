// Chunk: docs/chunks/viewport_follow - Integration tests for cursor-following scroll
//!
//! Integration tests for the viewport as driven by editing commands.
//!
//! The window is 100px tall with 20px lines, so exactly five lines fit.

use textflow::{EditorConfig, EditorState, FixedMetrics};

fn editor(height: f32) -> EditorState<FixedMetrics> {
    let config = EditorConfig {
        window_width: 200.0,
        window_height: height,
        ..EditorConfig::default()
    };
    EditorState::new(config, FixedMetrics::new(10.0, 20.0))
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_loading_does_not_scroll() {
    let mut state = editor(100.0);
    state.load_from_bytes(numbered_lines(30).as_bytes());
    assert!(state.buffer().cursor_at_start());
    assert_eq!(state.first_visible_line(), 0);
    assert_eq!(state.viewport().max_scroll(), 25.0);
}

#[test]
fn test_moving_down_scrolls_once_cursor_passes_bottom() {
    let mut state = editor(100.0);
    state.load_from_bytes(numbered_lines(30).as_bytes());

    // Line 5 is the first row below the window; reaching it does not scroll yet
    for _ in 0..5 {
        state.move_cursor_down();
    }
    assert_eq!(state.first_visible_line(), 0);

    state.move_cursor_down();
    assert_eq!(state.first_visible_line(), 2);

    state.move_cursor_down();
    assert_eq!(state.first_visible_line(), 2);

    state.move_cursor_down();
    assert_eq!(state.first_visible_line(), 4);
}

#[test]
fn test_moving_up_scrolls_back() {
    let mut state = editor(100.0);
    state.load_from_bytes(numbered_lines(30).as_bytes());
    state.move_cursor_to_coordinate(5.0, 10_000.0);
    assert_eq!(state.first_visible_line(), 25);

    state.move_cursor_to_coordinate(5.0, 24.0 * 20.0);
    assert_eq!(state.first_visible_line(), 24);
}

#[test]
fn test_typing_at_the_end_follows_cursor() {
    let mut state = editor(100.0);
    for i in 0..12 {
        state.insert_str(&format!("row{i}\n"));
    }
    // Cursor on the empty 13th line (index 12)
    assert_eq!(state.line_count(), 13);
    assert_eq!(state.first_visible_line(), 8);
    assert!(state.viewport().visible_range(state.line_count()).contains(&12));
}

#[test]
fn test_partially_visible_cursor_row_is_tolerated() {
    // 90px shows 4.5 lines. A cursor on the half-visible row does not scroll,
    // and after scrolling the cursor row can still be clipped.
    let mut state = editor(90.0);
    state.load_from_bytes(numbered_lines(20).as_bytes());

    for _ in 0..4 {
        state.move_cursor_down();
    }
    assert_eq!(state.first_visible_line(), 0);

    state.move_cursor_down();
    assert_eq!(state.first_visible_line(), 1);
    let cursor_row_bottom =
        state.cursor_pixel_y() + state.line_height() - state.first_visible_line() as f32 * 20.0;
    assert!(cursor_row_bottom > 90.0);
}

#[test]
fn test_taller_window_unscrolls() {
    let mut state = editor(100.0);
    state.load_from_bytes(numbered_lines(10).as_bytes());
    state.move_cursor_to_coordinate(5.0, 10_000.0);
    assert_eq!(state.first_visible_line(), 5);

    state.set_window_size(200.0, 400.0);
    assert_eq!(state.first_visible_line(), 0);
}
