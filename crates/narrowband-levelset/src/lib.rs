//! Sparse narrow-band level sets.
//!
//! A [`SparseLevelSet`] stores signed level-set values only for the grid
//! cells within `half_width` layers of the zero level set. Everything
//! farther away is background: a constant magnitude `half_width + 1`
//! whose sign is kept in a packed side bitset.
//!
//! The pieces fit together as follows:
//!
//! ```text
//! MaskReader ──► BinaryMaskAdaptor::initialize ──► SparseLevelSet
//!                                                   │      ▲
//!                         updates (one per zero-    │      │ commit
//!                         layer node, list order) ──┴─► UpdateEngine::update
//!                                                   │
//!                                                   ▼
//!                                          rasterize(RegionSpec) ──► DenseField
//! ```
//!
//! Layers are integer-indexed: layer `k` holds the nodes whose value lies
//! in `[k - 0.5, k + 0.5)`. Every layer keeps its nodes in insertion order,
//! and that order is what update lists are matched against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adaptor;
mod band;
pub mod config;
pub mod container;
pub mod error;
mod front;
mod side;
pub mod stats;
pub mod update;

pub use adaptor::BinaryMaskAdaptor;
pub use config::{ConfigError, LevelSetConfig, UpdateConfig, UpdatePolicy, ZeroLayerSide};
pub use container::SparseLevelSet;
pub use error::{LevelSetError, OutOfRange};
pub use stats::UpdateStats;
pub use update::UpdateEngine;
