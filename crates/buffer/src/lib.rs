// Chunk: docs/chunks/char_store - Arena-backed character store with sentinels

//! textflow-buffer: the character buffer behind the textflow editing core.
//!
//! This crate provides a linked character store with a node-relative cursor.
//! Every character is a record in an arena addressed by generation-checked
//! handles, so inserting or deleting at the cursor is an O(1) splice and
//! handles held elsewhere (the cursor, the line index) stay valid across
//! layout passes.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character insertion and deletion at the cursor
//! - Left/right cursor movement bounded by the sentinels
//! - Byte stream load/save with line terminator normalization
//! - Access to the [`CharStore`] so a layout pass can write per-character
//!   positions in place
//!
//! # Example
//!
//! ```
//! use textflow_buffer::{Glyph, TextBuffer, Update};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert_str("abc");
//! assert_eq!(buffer.backspace(), Update::FullRelayout);
//! assert_eq!(buffer.content(), "ab");
//! assert_eq!(buffer.store().glyph(buffer.cursor()), Some(Glyph::Char('b')));
//!
//! // CRLF, CR and LF all load as one line break and save as LF
//! let mut loaded = TextBuffer::new();
//! loaded.load_bytes(b"one\r\ntwo\rthree");
//! assert_eq!(loaded.to_bytes(), b"one\ntwo\nthree");
//! ```
//!
//! # Updates
//!
//! Each command returns an [`Update`] so the host can decide how much work
//! to redo:
//!
//! - `Update::None` - No change (e.g., a no-op at a buffer boundary)
//! - `Update::CursorOnly` - Only the cursor moved
//! - `Update::FullRelayout` - Content changed; the whole buffer must be reflowed

mod char_store;
mod codec;
mod line_index;
mod text_buffer;
mod types;

pub use char_store::{CharStore, Iter, NodeId};
pub use codec::TextEncoding;
pub use line_index::LineIndex;
pub use text_buffer::TextBuffer;
pub use types::{Glyph, NodeLayout, Update};
