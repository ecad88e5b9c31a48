//! Narrowband: sparse narrow-band level sets on N-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! narrowband sub-crates. For most users, adding `narrowband` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use narrowband::prelude::*;
//!
//! // A 3x3 square in the middle of a 7x7 image.
//! let mut mask = DenseMask::filled(&[7, 7], 0).unwrap();
//! for r in 2..5 {
//!     for c in 2..5 {
//!         mask.set(&[r, c], 1);
//!     }
//! }
//!
//! let adaptor = BinaryMaskAdaptor::new(LevelSetConfig::default()).unwrap();
//! let mut level_set = adaptor.initialize(&mask).unwrap();
//! assert_eq!(level_set.zero_layer().len(), 8);
//!
//! // Grow the interior by one layer.
//! let updates = vec![-1.0; level_set.zero_layer().len()];
//! let stats = UpdateEngine::default().update(&mut level_set, &updates).unwrap();
//! assert_eq!(stats.zero_layer_after, level_set.zero_layer().len());
//! assert_eq!(level_set.value_at(&[1, 3]).unwrap(), 0.0);
//!
//! let field = level_set.rasterize(&RegionSpec::All).unwrap();
//! assert_eq!(field.shape(), &[7, 7]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `narrowband-core` | Layer IDs, coordinates, dense buffers, `MaskReader` |
//! | [`space`] | `narrowband-space` | Lattice topology and region planning |
//! | [`arena`] | `narrowband-arena` | Node arena, handles, and layer lists |
//! | [`levelset`] | `narrowband-levelset` | Container, mask adaptor, update engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and boundary traits (`narrowband-core`).
///
/// Contains [`types::LayerId`], [`types::Coord`], the dense
/// [`types::DenseMask`] / [`types::DenseField`] buffers, and the
/// [`types::MaskReader`] trait.
pub use narrowband_core as types;

/// Lattice topology and region planning (`narrowband-space`).
pub use narrowband_space as space;

/// Node storage (`narrowband-arena`).
///
/// Most users only touch [`arena::Node`] and [`arena::LayerList`], which
/// are returned by level-set queries.
pub use narrowband_arena as arena;

/// The level-set container, mask adaptor, and update engine
/// (`narrowband-levelset`).
pub use narrowband_levelset as levelset;

/// Common imports for typical narrowband usage.
///
/// ```rust
/// use narrowband::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use narrowband_core::{Coord, DenseField, DenseMask, LayerId, MaskReader};

    // Space
    pub use narrowband_space::{EdgeBehavior, Lattice, RegionSpec};

    // Arena
    pub use narrowband_arena::{LayerList, Node, NodeHandle};

    // Level set
    pub use narrowband_levelset::{
        BinaryMaskAdaptor, LevelSetConfig, LevelSetError, SparseLevelSet, UpdateConfig,
        UpdateEngine, UpdatePolicy, UpdateStats, ZeroLayerSide,
    };
}
