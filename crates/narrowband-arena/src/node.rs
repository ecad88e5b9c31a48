//! The node attribute store.
//!
//! [`NodeArena`] owns every active node of a level set. Storage is a slab of
//! generation-tagged slots with a free list, so node creation and
//! destruction are O(1) and handles stay valid regardless of how many other
//! nodes come and go.

use narrowband_core::{Coord, LayerId};

use crate::error::ArenaError;
use crate::handle::{ListSlot, NodeHandle};

/// Per-node attributes.
///
/// A node is a grid point inside the narrow band. `layer` and `slot` must
/// agree with the layer list that references the node; the owning container
/// keeps them in sync.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Grid coordinate of the node.
    pub coord: Coord,
    /// Signed level-set value.
    pub value: f64,
    /// Band layer the node is listed in.
    pub layer: LayerId,
    /// Position of the node within its layer list.
    pub slot: ListSlot,
}

#[derive(Clone, Debug)]
struct NodeSlot {
    generation: u32,
    node: Option<Node>,
}

/// Slab storage for [`Node`]s, addressed by [`NodeHandle`].
///
/// # Examples
///
/// ```
/// use narrowband_arena::{LayerList, Node, NodeArena};
/// use narrowband_core::{Coord, LayerId};
///
/// let mut arena = NodeArena::new();
/// let mut zero = LayerList::new(LayerId::ZERO);
///
/// let coord: Coord = [2, 3].into_iter().collect();
/// let h = arena.insert(Node {
///     coord,
///     value: 0.1,
///     layer: LayerId::ZERO,
///     slot: zero.next_slot(),
/// });
/// zero.push(h);
///
/// assert_eq!(arena.get(h).unwrap().value, 0.1);
/// assert_eq!(zero.iter().collect::<Vec<_>>(), vec![h]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    slots: Vec<NodeSlot>,
    /// Indices of vacant slots available for reuse.
    free_list: Vec<u32>,
    live: usize,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Store `node`, returning its handle.
    ///
    /// Vacant slots are reused before the slab grows. A reused slot carries a
    /// bumped generation, so handles to its previous occupant go stale.
    pub fn insert(&mut self, node: Node) -> NodeHandle {
        self.live += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeHandle {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(NodeSlot {
            generation: 0,
            node: Some(node),
        });
        NodeHandle {
            index,
            generation: 0,
        }
    }

    /// Destroy the node behind `handle`, returning its attributes.
    pub fn remove(&mut self, handle: NodeHandle) -> Result<Node, ArenaError> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .ok_or(ArenaError::StaleHandle { handle })?;
        let node = slot.node.take().ok_or(ArenaError::StaleHandle { handle })?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        self.live -= 1;
        Ok(node)
    }

    /// Attributes of the node behind `handle`.
    pub fn get(&self, handle: NodeHandle) -> Result<&Node, ArenaError> {
        self.slots
            .get(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.node.as_ref())
            .ok_or(ArenaError::StaleHandle { handle })
    }

    /// Mutable attributes of the node behind `handle`.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Result<&mut Node, ArenaError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.node.as_mut())
            .ok_or(ArenaError::StaleHandle { handle })
    }

    /// Whether `handle` refers to a live node.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots ever allocated, live or vacant.
    pub fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.node.as_ref().map(|node| {
                (
                    NodeHandle {
                        index: i as u32,
                        generation: s.generation,
                    },
                    node,
                )
            })
        })
    }
}
