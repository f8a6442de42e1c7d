// Chunk: docs/chunks/editor_state - Library interface
//!
//! textflow: a word-wrapping text editing core.
//!
//! The crate combines the linked character buffer from `textflow-buffer`
//! with a greedy word-wrap layout, pixel/cursor mapping and a scrolling
//! viewport. [`EditorState`] is the entry point a host drives:
//!
//! ```
//! use textflow::{EditorConfig, EditorState, FixedMetrics};
//!
//! let config = EditorConfig {
//!     window_width: 70.0,
//!     ..EditorConfig::default()
//! };
//! let mut editor = EditorState::new(config, FixedMetrics::new(10.0, 20.0));
//! editor.insert_str("ab cd ef");
//!
//! assert_eq!(editor.visual_lines(), vec!["ab cd", "ef"]);
//! assert_eq!((editor.cursor_pixel_x(), editor.cursor_pixel_y()), (25.0, 20.0));
//! ```
//!
//! Measurement is delegated to a [`GlyphMetrics`] implementation so the core
//! stays independent of any font rasterizer.

pub mod command;
pub mod config;
pub mod cursor_mapping;
pub mod editor_state;
pub mod error;
pub mod file_io;
pub mod font;
pub mod viewport;
pub mod wrap_layout;

pub use command::{CommandError, EditorCommand};
pub use config::EditorConfig;
pub use editor_state::EditorState;
pub use error::{ConfigError, EditorError, EditorResult};
pub use font::{FixedMetrics, FontSpec, GlyphMetrics, MonospaceMetrics};
pub use textflow_buffer::{Glyph, NodeId, TextBuffer, TextEncoding, Update};
pub use viewport::Viewport;
pub use wrap_layout::WrapLayout;
