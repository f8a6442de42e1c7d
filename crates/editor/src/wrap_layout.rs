// Chunk: docs/chunks/greedy_wrap - Greedy word-wrap reflow
//!
//! Greedy word-wrap layout
//!
//! `WrapLayout` owns the derived view of the buffer: which node starts each
//! visual line, and the line height and margins those lines were computed
//! with. [`WrapLayout::reflow`] recomputes everything in a single
//! left-to-right pass over the buffer, writing each character's pixel position
//! into the character store in place:
//!
//! ```text
//! x starts at margin, y at 0
//! for each char:
//!   terminator              -> new line after it
//!   overflows a busy line:
//!     space                 -> elide, wrap point unchanged
//!     line has a space      -> soft break at the last space, resume after it
//!     otherwise             -> soft break before this char
//!   space at line start     -> elide
//!   otherwise               -> place, x += width
//! ```
//!
//! There is no incremental mode: a wrap decision anywhere can shift every
//! later wrap point, so the whole buffer is reflowed after each edit, resize
//! or font change.

use textflow_buffer::{CharStore, Glyph, LineIndex, NodeId, NodeLayout, TextBuffer};

use crate::font::{FontSpec, GlyphMetrics};

/// Line index plus the geometry it was computed with.
#[derive(Debug, Clone)]
pub struct WrapLayout {
    line_index: LineIndex,
    /// Content width in pixels used by the last reflow
    width: f32,
    /// Left margin in pixels
    margin: f32,
    /// Line height in pixels (whole pixels)
    line_height: f32,
}

impl WrapLayout {
    /// Creates a layout for `buffer` with a single line and no width yet.
    ///
    /// Call [`reflow`](Self::reflow) before trusting any position.
    pub fn new(buffer: &TextBuffer, margin: f32) -> Self {
        Self {
            line_index: LineIndex::new(buffer.store().start()),
            width: 0.0,
            margin,
            line_height: 1.0,
        }
    }

    /// Returns the number of visual lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the line height in pixels.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns the left margin in pixels.
    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the content width used by the last reflow.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the line index built by the last reflow.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    // Chunk: docs/chunks/greedy_wrap - Single-pass reflow
    /// Reflows the whole buffer for a content width of `width` pixels.
    ///
    /// Glyph widths and the line height are rounded to whole pixels so that
    /// positions are exact and the same inputs always produce the same output.
    pub fn reflow<M>(&mut self, buffer: &mut TextBuffer, width: f32, font: &FontSpec, metrics: &M)
    where
        M: GlyphMetrics + ?Sized,
    {
        let line_height = metrics.line_height(font).round().max(1.0);
        let margin = self.margin;
        self.width = width;
        self.line_height = line_height;

        let store = buffer.store_mut();
        let start = store.start();
        let end = store.end();
        if self.line_index.line_start(0) == Some(start) {
            self.line_index.reset();
        } else {
            self.line_index = LineIndex::new(start);
        }

        let mut x = margin;
        let mut y = 0.0_f32;
        // The most recent space on the current line, if any
        let mut last_space: Option<NodeId> = None;
        let mut current = store.next(start);

        while let Some(node) = current {
            if node == end {
                break;
            }
            let Some(glyph) = store.glyph(node) else {
                break;
            };
            let glyph_width = match glyph {
                Glyph::Char(ch) => metrics.glyph_width(ch, font).round().max(0.0),
                Glyph::LineBreak => 0.0,
            };
            place(store, node, x, y);

            if glyph == Glyph::LineBreak {
                self.line_index.push(node);
                x = margin;
                y += line_height;
                last_space = None;
                current = store.next(node);
                continue;
            }

            // A token wider than the whole line is placed at the line start anyway
            if x + glyph_width > width && x > margin {
                // An overflowing space is dropped; the wrap point stays at the
                // last space that fit
                if glyph.is_space() {
                    elide(store, node);
                    current = store.next(node);
                    continue;
                }

                let break_at = match last_space {
                    Some(space) => space,
                    None => store.prev(node).unwrap_or(start),
                };
                if let Some(layout) = store.layout_mut(break_at) {
                    layout.soft_break = true;
                }
                self.line_index.push(break_at);
                x = margin;
                y += line_height;
                last_space = None;
                // Re-evaluate from the first node of the new line
                current = store.next(break_at);
                continue;
            }

            if glyph.is_space() && x == margin {
                elide(store, node);
                current = store.next(node);
                continue;
            }

            if let Some(layout) = store.layout_mut(node) {
                layout.advance = glyph_width;
            }
            x += glyph_width;
            if glyph.is_space() {
                last_space = Some(node);
            }
            current = store.next(node);
        }

        tracing::debug!(
            chars = buffer.len(),
            lines = self.line_count(),
            width,
            line_height,
            "reflowed buffer"
        );
    }

    // ==================== Line queries ====================

    /// Returns the nodes shown on `line`, including the node that ends it.
    pub fn line_nodes(&self, buffer: &TextBuffer, line: usize) -> Vec<NodeId> {
        let store = buffer.store();
        let Some(anchor) = self.line_index.line_start(line) else {
            return Vec::new();
        };
        let last = self.line_index.line_start(line + 1);

        let mut nodes = Vec::new();
        let mut current = store.next(anchor);
        while let Some(node) = current {
            if node == store.end() {
                break;
            }
            nodes.push(node);
            if Some(node) == last {
                break;
            }
            current = store.next(node);
        }
        nodes
    }

    /// Returns the text displayed on `line`.
    ///
    /// Terminators, elided whitespace and a space that carries a soft break
    /// are not displayed.
    pub fn line_text(&self, buffer: &TextBuffer, line: usize) -> String {
        let store = buffer.store();
        self.line_nodes(buffer, line)
            .into_iter()
            .filter_map(|node| {
                let glyph = store.glyph(node)?;
                let layout = store.layout(node)?;
                match glyph {
                    Glyph::LineBreak => None,
                    _ if layout.elided => None,
                    g if g.is_space() && layout.soft_break => None,
                    Glyph::Char(ch) => Some(ch),
                }
            })
            .collect()
    }

    /// Returns the text of every visual line.
    pub fn visual_lines(&self, buffer: &TextBuffer) -> Vec<String> {
        (0..self.line_count())
            .map(|line| self.line_text(buffer, line))
            .collect()
    }

    /// Returns the right edge of the last glyph placed on `line`
    /// (the margin for an empty line).
    pub fn line_extent(&self, buffer: &TextBuffer, line: usize) -> f32 {
        let store = buffer.store();
        self.line_nodes(buffer, line)
            .into_iter()
            .filter_map(|node| store.layout(node))
            .filter(|layout| !layout.elided)
            .map(|layout| layout.x + layout.advance)
            .fold(self.margin, f32::max)
    }
}

/// Resets a node's layout and puts it at `(x, y)` with no width yet.
fn place(store: &mut CharStore, node: NodeId, x: f32, y: f32) {
    if let Some(layout) = store.layout_mut(node) {
        *layout = NodeLayout {
            x,
            y,
            ..NodeLayout::default()
        };
    }
}

fn elide(store: &mut CharStore, node: NodeId) {
    if let Some(layout) = store.layout_mut(node) {
        layout.elided = true;
        layout.advance = 0.0;
    }
}

// =============================================================================
// Tests
// =============================================================================
