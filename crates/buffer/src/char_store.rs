// Chunk: docs/chunks/char_store - Arena-backed character store with sentinels

//! Arena-backed doubly-linked character store.
//!
//! Every character of the document is a record in a slot arena. Records are
//! linked to their neighbours by slot index, so splicing a character in or out
//! is O(1) and never moves other records. Callers hold [`NodeId`] handles,
//! which pair a slot index with the slot's generation: once a record is
//! removed its slot generation is bumped, and every handle that still points
//! at it resolves to nothing instead of aliasing whatever reuses the slot.
//!
//! Two sentinel records bound the sequence:
//!
//! ```text
//! [start] <-> 'h' <-> 'i' <-> LineBreak <-> '!' <-> [end]
//! ```
//!
//! Sentinels carry no glyph and can never be removed. Everything between them
//! is exactly the document content.

use crate::types::{Glyph, NodeLayout};

const START_SLOT: u32 = 0;
const END_SLOT: u32 = 1;

/// A generation-checked handle to a record in a [`CharStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Returns the raw slot index (stable for the lifetime of the record).
    pub fn index(&self) -> u32 {
        self.index
    }
}

#[derive(Debug, Clone)]
struct Record {
    /// `None` for the two sentinels.
    glyph: Option<Glyph>,
    prev: u32,
    next: u32,
    layout: NodeLayout,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    record: Option<Record>,
}

/// Doubly-linked sequence of characters bounded by two sentinels.
#[derive(Debug, Clone)]
pub struct CharStore {
    slots: Vec<Slot>,
    /// Slots whose record was removed, available for reuse.
    free: Vec<u32>,
    len: usize,
}

impl CharStore {
    /// Creates an empty store holding only the two sentinels.
    pub fn new() -> Self {
        let start = Record {
            glyph: None,
            prev: START_SLOT,
            next: END_SLOT,
            layout: NodeLayout::default(),
        };
        let end = Record {
            glyph: None,
            prev: START_SLOT,
            next: END_SLOT,
            layout: NodeLayout::default(),
        };
        Self {
            slots: vec![
                Slot {
                    generation: 0,
                    record: Some(start),
                },
                Slot {
                    generation: 0,
                    record: Some(end),
                },
            ],
            free: Vec::new(),
            len: 0,
        }
    }

    // ==================== Accessors ====================

    /// Handle of the start sentinel.
    pub fn start(&self) -> NodeId {
        self.id_of(START_SLOT)
    }

    /// Handle of the end sentinel.
    pub fn end(&self) -> NodeId {
        self.id_of(END_SLOT)
    }

    /// Number of characters between the sentinels.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the store holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `id` refers to a live record (sentinels included).
    pub fn contains(&self, id: NodeId) -> bool {
        self.record(id).is_some()
    }

    /// Returns true if `id` is one of the two sentinels.
    pub fn is_sentinel(&self, id: NodeId) -> bool {
        id == self.start() || id == self.end()
    }

    /// Returns the glyph stored at `id`, or `None` for sentinels and stale handles.
    pub fn glyph(&self, id: NodeId) -> Option<Glyph> {
        self.record(id)?.glyph
    }

    /// Returns the node after `id`. The end sentinel has no successor.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        if id.index == END_SLOT {
            return None;
        }
        let record = self.record(id)?;
        Some(self.id_of(record.next))
    }

    /// Returns the node before `id`. The start sentinel has no predecessor.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        if id.index == START_SLOT {
            return None;
        }
        let record = self.record(id)?;
        Some(self.id_of(record.prev))
    }

    /// Returns the layout attributes last computed for `id`.
    pub fn layout(&self, id: NodeId) -> Option<&NodeLayout> {
        self.record(id).map(|r| &r.layout)
    }

    /// Returns mutable layout attributes for `id`.
    ///
    /// Layout is the only part of a record that may change without
    /// re-creating it.
    pub fn layout_mut(&mut self, id: NodeId) -> Option<&mut NodeLayout> {
        self.record_mut(id).map(|r| &mut r.layout)
    }

    /// Returns true if the cursor placed after `id` sits at the start of the
    /// next visual line: `id` is a terminator or carries a soft break.
    pub fn is_end_of_line(&self, id: NodeId) -> bool {
        match self.record(id) {
            Some(record) => {
                record.glyph == Some(Glyph::LineBreak) || record.layout.soft_break
            }
            None => false,
        }
    }

    /// Iterates over the content in order, yielding each handle with its glyph.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            current: self.next(self.start()),
        }
    }

    // ==================== Mutations ====================

    /// Splices a new character immediately after `after`.
    ///
    /// Returns the new handle, or `None` if `after` is the end sentinel or stale.
    pub fn insert_after(&mut self, after: NodeId, glyph: Glyph) -> Option<NodeId> {
        if after.index == END_SLOT || !self.contains(after) {
            return None;
        }
        let next = self.slots[after.index as usize].record.as_ref()?.next;

        let record = Record {
            glyph: Some(glyph),
            prev: after.index,
            next,
            layout: NodeLayout::default(),
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].record = Some(record);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    record: Some(record),
                });
                (self.slots.len() - 1) as u32
            }
        };

        self.link_mut(after.index).next = index;
        self.link_mut(next).prev = index;
        self.len += 1;
        Some(self.id_of(index))
    }

    /// Unlinks `id` and frees its slot, returning the removed glyph.
    ///
    /// Sentinels and stale handles are left untouched and yield `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<Glyph> {
        if self.is_sentinel(id) || !self.contains(id) {
            return None;
        }
        let slot = &mut self.slots[id.index as usize];
        let record = slot.record.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.link_mut(record.prev).next = record.next;
        self.link_mut(record.next).prev = record.prev;
        self.free.push(id.index);
        self.len -= 1;
        record.glyph
    }

    // ==================== Internals ====================

    fn id_of(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn record(&self, id: NodeId) -> Option<&Record> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.record.as_ref()
    }

    fn record_mut(&mut self, id: NodeId) -> Option<&mut Record> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.record.as_mut()
    }

    /// Live record at a linked index. Link targets are always live.
    fn link_mut(&mut self, index: u32) -> &mut Record {
        match self.slots[index as usize].record.as_mut() {
            Some(record) => record,
            None => unreachable!("link to freed slot {index}"),
        }
    }
}

impl Default for CharStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the content of a [`CharStore`], sentinels excluded.
pub struct Iter<'a> {
    store: &'a CharStore,
    current: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, Glyph);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let glyph = self.store.glyph(id)?;
        self.current = self.store.next(id);
        Some((id, glyph))
    }
}
