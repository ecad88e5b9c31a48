//! Node handles and list slots.

use std::fmt;

/// Stable reference to a node in a [`NodeArena`](crate::NodeArena).
///
/// Encodes the slot index plus the slot's generation at allocation time,
/// allowing O(1) staleness checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeHandle {
    /// Slot index within the arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHandle(idx={}, gen={})", self.index, self.generation)
    }
}

/// Position of an entry within a [`LayerList`](crate::LayerList).
///
/// Valid until the list is compacted; compaction reports the new slot of
/// every surviving entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListSlot(pub(crate) u32);

impl ListSlot {
    /// Raw position in the list's backing storage.
    pub fn index(&self) -> u32 {
        self.0
    }
}
