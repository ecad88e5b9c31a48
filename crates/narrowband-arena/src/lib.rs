//! Node storage for narrowband level sets.
//!
//! Two structures live here:
//!
//! ```text
//! NodeArena (attribute store)
//! ├── NodeSlot[]  (generation + Option<Node>)
//! └── free list   (vacated slot indices, reused LIFO)
//!
//! LayerList (one per band layer)
//! └── Option<NodeHandle>[]  (insertion order, tombstoned on removal)
//! ```
//!
//! Nodes are addressed by [`NodeHandle`], a slot index paired with the
//! slot's generation. Reusing a slot bumps its generation, so a handle to a
//! destroyed node can never alias the node that replaced it.
//!
//! A node records the [`ListSlot`] it occupies in its layer list, which
//! makes removal O(1) without disturbing the order of the remaining
//! entries. Lists are compacted explicitly by their owner.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod list;
pub mod node;

pub use error::ArenaError;
pub use handle::{ListSlot, NodeHandle};
pub use list::LayerList;
pub use node::{Node, NodeArena};
