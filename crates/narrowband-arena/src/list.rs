//! Layered active lists.
//!
//! A [`LayerList`] holds the handles of one band layer in insertion order.
//! Removal leaves a tombstone so that the slots of the remaining entries,
//! which nodes record, stay valid. [`LayerList::compact`] squeezes the
//! tombstones out and reports every entry that moved.

use narrowband_core::LayerId;

use crate::error::ArenaError;
use crate::handle::{ListSlot, NodeHandle};

/// Ordered, tombstoned list of the nodes in one band layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerList {
    layer: LayerId,
    entries: Vec<Option<NodeHandle>>,
    live: usize,
}

impl LayerList {
    /// Create an empty list for `layer`.
    pub fn new(layer: LayerId) -> Self {
        Self {
            layer,
            entries: Vec::new(),
            live: 0,
        }
    }

    /// The layer this list holds.
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// The slot the next [`push`](Self::push) will occupy.
    pub fn next_slot(&self) -> ListSlot {
        ListSlot(self.entries.len() as u32)
    }

    /// Append `handle`, returning the slot it occupies.
    pub fn push(&mut self, handle: NodeHandle) -> ListSlot {
        let slot = self.next_slot();
        self.entries.push(Some(handle));
        self.live += 1;
        slot
    }

    /// Tombstone the entry at `slot`, returning the handle it held.
    pub fn remove(&mut self, slot: ListSlot) -> Result<NodeHandle, ArenaError> {
        let handle = self
            .entries
            .get_mut(slot.0 as usize)
            .and_then(Option::take)
            .ok_or(ArenaError::VacantSlot {
                layer: self.layer,
                slot,
            })?;
        self.live -= 1;
        Ok(handle)
    }

    /// The handle at `slot`, if the slot is live.
    pub fn get(&self, slot: ListSlot) -> Option<NodeHandle> {
        self.entries.get(slot.0 as usize).copied().flatten()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the list has no live entries.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of tombstones awaiting compaction.
    pub fn tombstones(&self) -> usize {
        self.entries.len() - self.live
    }

    /// Iterate over live handles in list order.
    pub fn iter(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.entries.iter().filter_map(|e| *e)
    }

    /// Iterate over live entries with their slots, in list order.
    pub fn iter_slots(&self) -> impl Iterator<Item = (ListSlot, NodeHandle)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|h| (ListSlot(i as u32), h)))
    }

    /// Remove all tombstones, preserving the order of live entries.
    ///
    /// `relocate` is called once for every entry whose slot changed, with
    /// the entry's new slot. Returns the number of tombstones removed.
    pub fn compact(&mut self, mut relocate: impl FnMut(NodeHandle, ListSlot)) -> usize {
        let removed = self.tombstones();
        if removed == 0 {
            return 0;
        }
        let mut write = 0usize;
        for read in 0..self.entries.len() {
            if let Some(handle) = self.entries[read] {
                if read != write {
                    self.entries[write] = Some(handle);
                    relocate(handle, ListSlot(write as u32));
                }
                write += 1;
            }
        }
        self.entries.truncate(write);
        removed
    }
}
