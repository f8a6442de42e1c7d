// Chunk: docs/chunks/greedy_wrap - Greedy word-wrap reflow
//!
//! Font description and glyph metrics
//!
//! The layout engine never measures text itself. It asks a [`GlyphMetrics`]
//! provider for two numbers: how wide a glyph is in a given font, and how tall
//! a line is. Hosts with a real text stack implement the trait over their
//! shaper; the two implementations here cover headless use and tests:
//!
//! - [`FixedMetrics`]: every glyph has the same pixel width regardless of font
//! - [`MonospaceMetrics`]: widths and line height scale with the font size,
//!   and East Asian wide characters take two cells

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Number of cells a tab advances in [`MonospaceMetrics`].
const TAB_WIDTH_CELLS: f32 = 4.0;

// =============================================================================
// Font
// =============================================================================

/// A font family at a point size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name (e.g., "Verdana")
    pub family: String,
    /// Size in points
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Pure query service for glyph measurements.
///
/// Implementations must be deterministic: the same glyph and font always
/// measure the same, otherwise reflow would not be idempotent.
pub trait GlyphMetrics {
    /// Width of `glyph` in pixels when drawn in `font`.
    fn glyph_width(&self, glyph: char, font: &FontSpec) -> f32;

    /// Height of one line of text in `font`, in pixels.
    fn line_height(&self, font: &FontSpec) -> f32;
}

/// Metrics where every glyph has the same pixel width, independent of font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Width of every glyph
    pub advance_width: f32,
    /// Height of a line
    pub line_height: f32,
}

impl FixedMetrics {
    pub fn new(advance_width: f32, line_height: f32) -> Self {
        Self {
            advance_width,
            line_height,
        }
    }
}

impl GlyphMetrics for FixedMetrics {
    fn glyph_width(&self, _glyph: char, _font: &FontSpec) -> f32 {
        self.advance_width
    }

    fn line_height(&self, _font: &FontSpec) -> f32 {
        self.line_height
    }
}

/// Em-relative monospace metrics.
///
/// A cell is `advance_em * font.size` pixels wide and a line is
/// `line_height_em * font.size` pixels tall. Wide characters take two cells;
/// zero-width and control characters take none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Cell width as a fraction of the point size
    pub advance_em: f32,
    /// Line height as a fraction of the point size
    pub line_height_em: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        // Typical proportions of a monospace face
        Self {
            advance_em: 0.6,
            line_height_em: 1.25,
        }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn glyph_width(&self, glyph: char, font: &FontSpec) -> f32 {
        let cells = match glyph {
            '\t' => TAB_WIDTH_CELLS,
            other => other.width().unwrap_or(0) as f32,
        };
        cells * self.advance_em * font.size
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        self.line_height_em * font.size
    }
}
