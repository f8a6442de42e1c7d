// Chunk: docs/chunks/char_store - Arena-backed character store with sentinels
// Chunk: docs/chunks/cursor_navigation - Node-relative cursor movement

//! TextBuffer is the main public API for text editing operations.
//!
//! It combines the linked [`CharStore`] with a cursor. The cursor is the node
//! the insertion point sits *after*: the start sentinel means "before
//! everything", and the cursor never rests on the end sentinel. Inserting and
//! deleting at the cursor are O(1) splices with no offsets to shift.
//!
//! Each mutation returns an [`Update`] telling the host whether a reflow is
//! needed.

use crate::char_store::{CharStore, NodeId};
use crate::codec::TextEncoding;
use crate::types::{Glyph, Update};

/// A character buffer with a node-relative cursor.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    store: CharStore,
    cursor: NodeId,
    pub(crate) encoding: TextEncoding,
}

impl TextBuffer {
    /// Creates a new empty text buffer with the cursor at the start.
    pub fn new() -> Self {
        let store = CharStore::new();
        let cursor = store.start();
        Self {
            store,
            cursor,
            encoding: TextEncoding::default(),
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// The cursor is left at the start of the buffer.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buffer = Self::new();
        buffer.append_str(content);
        buffer
    }

    // ==================== Accessors ====================

    /// Returns the node the cursor sits after.
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Returns the underlying character store.
    pub fn store(&self) -> &CharStore {
        &self.store
    }

    /// Returns the character store for layout updates.
    ///
    /// Only [`CharStore::layout_mut`] is meant to be used through this; linking
    /// changes must go through the buffer so the cursor stays valid.
    pub fn store_mut(&mut self) -> &mut CharStore {
        &mut self.store
    }

    /// Returns the total character count (terminators included).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the entire content as a String, terminators as `'\n'`.
    pub fn content(&self) -> String {
        self.store.iter().map(|(_, glyph)| glyph.to_char()).collect()
    }

    /// Returns the last content node, or the start sentinel if the buffer is empty.
    pub fn last_node(&self) -> NodeId {
        self.store
            .prev(self.store.end())
            .unwrap_or_else(|| self.store.start())
    }

    /// Returns true if the cursor is at the very start of the buffer.
    pub fn cursor_at_start(&self) -> bool {
        self.cursor == self.store.start()
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor back one node. No-op at the start sentinel.
    pub fn move_left(&mut self) -> Update {
        match self.store.prev(self.cursor) {
            Some(prev) => {
                self.cursor = prev;
                Update::CursorOnly
            }
            None => Update::None,
        }
    }

    /// Moves the cursor forward one node. No-op when the next node is the end sentinel.
    pub fn move_right(&mut self) -> Update {
        match self.store.next(self.cursor) {
            Some(next) if next != self.store.end() => {
                self.cursor = next;
                Update::CursorOnly
            }
            _ => Update::None,
        }
    }

    /// Moves the cursor to the start of the buffer.
    pub fn move_to_buffer_start(&mut self) -> Update {
        self.set_cursor(self.store.start())
    }

    /// Moves the cursor to the end of the buffer (after the last character).
    pub fn move_to_buffer_end(&mut self) -> Update {
        self.set_cursor(self.last_node())
    }

    /// Places the cursor after `node`.
    ///
    /// The end sentinel and stale handles are rejected and leave the cursor
    /// where it was.
    pub fn set_cursor(&mut self, node: NodeId) -> Update {
        if node == self.store.end() || !self.store.contains(node) {
            return Update::None;
        }
        if node == self.cursor {
            return Update::None;
        }
        self.cursor = node;
        Update::CursorOnly
    }

    // ==================== Mutations ====================

    /// Inserts a character after the cursor and moves the cursor past it.
    ///
    /// `'\n'` and `'\r'` insert a hard line break.
    pub fn insert_char(&mut self, ch: char) -> Update {
        self.insert_glyph(Glyph::from_char(ch))
    }

    /// Inserts a glyph after the cursor and moves the cursor past it.
    pub fn insert_glyph(&mut self, glyph: Glyph) -> Update {
        match self.store.insert_after(self.cursor, glyph) {
            Some(node) => {
                self.cursor = node;
                self.debug_assert_cursor_valid();
                Update::FullRelayout
            }
            None => Update::None,
        }
    }

    /// Inserts each character of `s` at the cursor.
    pub fn insert_str(&mut self, s: &str) -> Update {
        let mut update = Update::None;
        for ch in s.chars() {
            update.merge(self.insert_char(ch));
        }
        update
    }

    /// Appends a glyph at the end of the buffer without moving the cursor.
    pub fn append_glyph(&mut self, glyph: Glyph) -> Option<NodeId> {
        let last = self.last_node();
        self.store.insert_after(last, glyph)
    }

    /// Appends each character of `s` at the end of the buffer without moving the cursor.
    pub fn append_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.append_glyph(Glyph::from_char(ch));
        }
    }

    /// Deletes the character before the insertion point (Backspace).
    ///
    /// The cursor moves to the previous node. At the start of the buffer this
    /// is a no-op returning `Update::None`.
    pub fn backspace(&mut self) -> Update {
        if self.cursor_at_start() {
            return Update::None;
        }
        let doomed = self.cursor;
        let Some(prev) = self.store.prev(doomed) else {
            return Update::None;
        };
        self.cursor = prev;
        self.store.remove(doomed);
        self.debug_assert_cursor_valid();
        Update::FullRelayout
    }

    // ==================== Validation ====================

    /// Debug assertion: the cursor is a live node other than the end sentinel.
    ///
    /// Walking the list from the start sentinel is O(n), so only small
    /// buffers are checked for reachability.
    #[cfg(debug_assertions)]
    fn debug_assert_cursor_valid(&self) {
        assert!(self.store.contains(self.cursor), "cursor is a stale handle");
        assert_ne!(self.cursor, self.store.end(), "cursor on end sentinel");
        if self.store.len() <= 256 && !self.cursor_at_start() {
            let reachable = self.store.iter().any(|(id, _)| id == self.cursor);
            assert!(reachable, "cursor not reachable from start sentinel");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_assert_cursor_valid(&self) {}
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
