//! Lattice topology for narrowband level sets.
//!
//! This crate defines [`Lattice`], the N-dimensional box grid that every
//! level set lives on, along with region planning types used to rasterize
//! a sparse level set back into dense form.
//!
//! # Connectivity
//!
//! Neighbours are face neighbours: 2 in 1D, 4 in 2D, 6 in 3D. Distance is
//! the graph geodesic of that connectivity (Manhattan / L1).
//!
//! # Region Planning
//!
//! Dense output is expressed as a [`RegionSpec`] and compiled to a
//! [`RegionPlan`] holding the precomputed coordinates and cell ranks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod lattice;
pub mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use lattice::Lattice;
pub use region::{RegionPlan, RegionSpec};
