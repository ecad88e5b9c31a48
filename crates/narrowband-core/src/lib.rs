//! Core types and boundary traits for the narrowband level-set engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid
//! coordinates, layer identifiers, the dense-mask reader boundary, and the
//! dense buffers that cross the sparse/dense boundary in either direction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod traits;

pub use error::GridError;
pub use grid::{DenseField, DenseMask};
pub use id::{Coord, LayerId};
pub use traits::MaskReader;
