// Chunk: docs/chunks/coordinate_mapping - Pixel to cursor mapping
//!
//! Conversions between cursor positions and pixel coordinates.
//!
//! Both directions read the per-character positions written by the last
//! reflow, so callers must reflow after every content change before mapping.
//! A cursor position is a node handle: the cursor sits immediately after that
//! node, and the start sentinel means "before the first character".

use textflow_buffer::{NodeId, TextBuffer};

use crate::wrap_layout::WrapLayout;

/// Returns the pixel position where the cursor is drawn.
///
/// - Start sentinel: `(margin, 0)`
/// - A node that ends its line (terminator or soft break): the start of the
///   following line
/// - Otherwise: the right edge of the node
pub fn cursor_pixel(buffer: &TextBuffer, layout: &WrapLayout) -> (f32, f32) {
    let store = buffer.store();
    let cursor = buffer.cursor();
    if cursor == store.start() {
        return (layout.margin(), 0.0);
    }
    let Some(node) = store.layout(cursor) else {
        return (layout.margin(), 0.0);
    };
    if store.is_end_of_line(cursor) {
        (layout.margin(), node.y + layout.line_height())
    } else {
        (node.x + node.advance, node.y)
    }
}

/// Returns the cursor position closest to the pixel `(x, y)`.
///
/// - Above the text: the start sentinel
/// - Below the last line: after the last character
/// - Otherwise the boundary on the target line nearest to `x`. When `x` is
///   exactly between two boundaries the left one wins.
/// - Anywhere right of the last character's left edge: after that character
pub fn node_at_point(buffer: &TextBuffer, layout: &WrapLayout, x: f32, y: f32) -> NodeId {
    let store = buffer.store();
    if y < 0.0 {
        return store.start();
    }
    let line = (y / layout.line_height()).floor() as usize;
    let Some(anchor) = layout.line_index().line_start(line) else {
        return buffer.last_node();
    };

    let end = store.end();
    let x_of = |node: NodeId| store.layout(node).map_or(0.0, |l| l.x);

    // Walk to the last node whose left edge is left of x, staying on this line
    let mut ptr = anchor;
    while let Some(next) = store.next(ptr) {
        if next == end || x_of(next) >= x || store.is_end_of_line(next) {
            break;
        }
        ptr = next;
    }
    if ptr == anchor {
        return anchor;
    }

    // Past the left edge of the last character: the cursor goes after it
    let right = match store.next(ptr) {
        Some(next) if next != end => x_of(next),
        _ => return ptr,
    };
    let left = x_of(ptr);

    if (x - left).abs() <= (right - x).abs() {
        store.prev(ptr).unwrap_or(anchor)
    } else {
        ptr
    }
}

/// Returns the cursor target one line above the current cursor.
pub fn node_above(buffer: &TextBuffer, layout: &WrapLayout) -> NodeId {
    let (x, y) = cursor_pixel(buffer, layout);
    node_at_point(buffer, layout, x, y - layout.line_height())
}

/// Returns the cursor target one line below the current cursor.
pub fn node_below(buffer: &TextBuffer, layout: &WrapLayout) -> NodeId {
    let (x, y) = cursor_pixel(buffer, layout);
    node_at_point(buffer, layout, x, y + layout.line_height())
}
