//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use narrowband_core::LayerId;

use crate::handle::{ListSlot, NodeHandle};

/// Errors that can occur during arena and list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A `NodeHandle` whose node has been destroyed (or never existed).
    StaleHandle {
        /// The offending handle.
        handle: NodeHandle,
    },
    /// A list slot that holds no live entry.
    VacantSlot {
        /// The layer the list belongs to.
        layer: LayerId,
        /// The vacant slot.
        slot: ListSlot,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleHandle { handle } => write!(f, "stale node handle: {handle}"),
            Self::VacantSlot { layer, slot } => {
                write!(f, "layer {layer} list has no entry at slot {}", slot.index())
            }
        }
    }
}

impl Error for ArenaError {}
