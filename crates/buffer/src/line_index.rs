// Chunk: docs/chunks/greedy_wrap - Greedy word-wrap reflow

//! Line index for tracking visual line boundaries.
//!
//! Each entry is the node the cursor sits *after* when it is at the start of
//! that visual line: the start sentinel for line 0, then the terminator or the
//! soft-break node that ended the previous line. The index is derived state; it
//! is cleared and rebuilt by every reflow pass and never patched in place.

use crate::char_store::NodeId;

/// Ordered list of line-start handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// line_starts[0] is always the start sentinel.
    line_starts: Vec<NodeId>,
}

impl LineIndex {
    /// Creates an index with a single line anchored at `start` (the start sentinel).
    pub fn new(start: NodeId) -> Self {
        Self {
            line_starts: vec![start],
        }
    }

    /// Drops every line but the first.
    pub fn reset(&mut self) {
        self.line_starts.truncate(1);
    }

    /// Appends the start of a new visual line.
    pub fn push(&mut self, anchor: NodeId) {
        self.line_starts.push(anchor);
    }

    /// Returns the number of visual lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the anchor of the given line, if it exists.
    pub fn line_start(&self, line: usize) -> Option<NodeId> {
        self.line_starts.get(line).copied()
    }

    /// Returns all line anchors in order.
    pub fn line_starts(&self) -> &[NodeId] {
        &self.line_starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_store::CharStore;
    use crate::types::Glyph;

    #[test]
    fn test_new_has_one_line() {
        let store = CharStore::new();
        let index = LineIndex::new(store.start());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(store.start()));
        assert_eq!(index.line_start(1), None);
    }

    #[test]
    fn test_reset_keeps_first_line() {
        let mut store = CharStore::new();
        let nl = store.insert_after(store.start(), Glyph::LineBreak).unwrap();
        let mut index = LineIndex::new(store.start());
        index.push(nl);
        assert_eq!(index.line_count(), 2);

        index.reset();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(store.start()));
    }
}
