// Chunk: docs/chunks/viewport_follow - Scroll position follows the cursor line
//!
//! Vertical scroll state for the editor window.
//!
//! The viewport tracks a scroll value measured in lines, bounded by
//! `[0, max(0, line_count - rows)]` where `rows` is the number of whole lines
//! that fit in the window. The first visible line is the scroll value
//! truncated to an integer.
//!
//! After every command the host calls [`Viewport::follow_cursor`] with the
//! cursor's pixel Y so the cursor line stays in view:
//!
//! - cursor line at or above the top: scroll up so it is the first line
//! - cursor line strictly past `height / line_height` rows below the top:
//!   scroll down so it is the last line
//!
//! The downward rule compares against the fractional row count, so a cursor
//! on the partially visible bottom row does not scroll, and after a downward
//! scroll the truncated first line can still leave the cursor row partially
//! clipped.

use std::ops::Range;

/// Scroll state for a window of fixed pixel height.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Scroll position in lines (fractional)
    value: f32,
    /// Upper bound for `value`
    max: f32,
    /// Window height in pixels
    height: f32,
    /// Line height used by the last update
    line_height: f32,
}

impl Viewport {
    /// Creates a viewport for a window `height` pixels tall, scrolled to the top.
    pub fn new(height: f32, line_height: f32) -> Self {
        Self {
            value: 0.0,
            max: 0.0,
            height,
            line_height: line_height.max(1.0),
        }
    }

    /// Returns the window height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the raw scroll value in lines.
    pub fn scroll_value(&self) -> f32 {
        self.value
    }

    /// Returns the largest scroll value for the last known line count.
    pub fn max_scroll(&self) -> f32 {
        self.max
    }

    /// Returns the number of whole lines that fit in the window.
    pub fn visible_rows(&self) -> usize {
        (self.height / self.line_height).floor() as usize
    }

    /// Returns the first line drawn at the top of the window.
    pub fn first_visible_line(&self) -> usize {
        self.value.max(0.0) as usize
    }

    /// Returns the range of lines drawn in the window, including a partially
    /// visible last row.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let first = self.first_visible_line().min(line_count);
        let rows = (self.height / self.line_height).ceil() as usize;
        first..(first + rows).min(line_count)
    }

    /// Resizes the window and re-clamps the scroll value.
    pub fn set_height(&mut self, height: f32, line_count: usize) {
        self.height = height;
        self.update_max(line_count);
        self.value = self.value.clamp(0.0, self.max);
    }

    /// Scrolls so the line containing `cursor_y` is in view.
    pub fn follow_cursor(&mut self, cursor_y: f32, line_height: f32, line_count: usize) {
        self.line_height = line_height.max(1.0);
        self.update_max(line_count);

        let cursor_line = (cursor_y / self.line_height).floor();
        let rows = self.height / self.line_height;
        if cursor_line <= self.value {
            self.value = cursor_line;
        } else if cursor_line > self.value + rows {
            self.value = cursor_line + 1.0 - rows;
        }
        self.value = self.value.clamp(0.0, self.max);
    }

    fn update_max(&mut self, line_count: usize) {
        let rows = self.visible_rows() as f32;
        self.max = (line_count as f32 - rows).max(0.0);
    }
}
