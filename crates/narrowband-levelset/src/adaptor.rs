//! Dense binary mask → sparse level set.

use narrowband_core::{LayerId, MaskReader};
use narrowband_space::Lattice;
use tracing::debug;

use crate::band::grow_band;
use crate::config::{LevelSetConfig, ZeroLayerSide};
use crate::container::SparseLevelSet;
use crate::error::LevelSetError;
use crate::side::SideMap;

/// Builds the initial [`SparseLevelSet`] from a binary mask.
///
/// Non-zero pixels are foreground and lie on the interior (negative) side.
/// The zero layer is the set of boundary pixels on the side chosen by
/// [`LevelSetConfig::zero_layer_side`], listed in row-major order, each
/// with value `0.0`. Layers `±1..=±half_width` are filled breadth-first,
/// so every band node's value is its signed layer index.
///
/// # Examples
///
/// ```
/// use narrowband_core::{DenseMask, LayerId};
/// use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig};
///
/// let mut mask = DenseMask::filled(&[4, 4], 0).unwrap();
/// mask.set(&[1, 1], 1);
///
/// let adaptor = BinaryMaskAdaptor::new(LevelSetConfig::with_half_width(1)).unwrap();
/// let ls = adaptor.initialize(&mask).unwrap();
///
/// assert_eq!(ls.layer_len(LayerId::ZERO).unwrap(), 1);
/// assert_eq!(ls.layer_len(LayerId(1)).unwrap(), 4);
/// assert_eq!(ls.value_at(&[3, 3]).unwrap(), 2.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BinaryMaskAdaptor {
    config: LevelSetConfig,
}

impl BinaryMaskAdaptor {
    /// Create an adaptor, validating `config`.
    pub fn new(config: LevelSetConfig) -> Result<Self, LevelSetError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration new level sets are built with.
    pub fn config(&self) -> &LevelSetConfig {
        &self.config
    }

    /// Convert `mask` into a level set.
    ///
    /// Fails with [`LevelSetError::InvalidInput`] if the mask has no cells,
    /// does not answer for a cell inside its own dimensions, or has no
    /// boundary (it is entirely foreground or entirely background).
    pub fn initialize(&self, mask: &dyn MaskReader) -> Result<SparseLevelSet, LevelSetError> {
        let dims = mask.dimensions();
        if dims.is_empty() || dims.contains(&0) {
            return Err(LevelSetError::invalid_input(format!(
                "mask has no cells (dimensions {dims:?})"
            )));
        }
        let lattice = Lattice::new(dims, self.config.edge)?;

        let cells = lattice.cell_count();
        let mut sides = SideMap::exterior(cells);
        for rank in 0..cells {
            let coord = lattice.coord_of(rank).ok_or_else(|| {
                LevelSetError::invalid_input(format!("rank {rank} is off the lattice"))
            })?;
            let pixel = mask.pixel_at(&coord).ok_or_else(|| {
                LevelSetError::invalid_input(format!(
                    "mask has no pixel at {coord:?} inside its dimensions {dims:?}"
                ))
            })?;
            sides.set(rank, pixel != 0);
        }

        let foreground = sides.interior_count();
        if foreground == 0 {
            return Err(LevelSetError::invalid_input("mask has no foreground pixels"));
        }
        if foreground == cells {
            return Err(LevelSetError::invalid_input("mask has no background pixels"));
        }

        let zero_is_interior = self.config.zero_layer_side == ZeroLayerSide::Foreground;
        let zero: Vec<(usize, f64)> = (0..cells)
            .filter(|&rank| sides.is_interior(rank) == zero_is_interior)
            .filter(|&rank| {
                lattice
                    .neighbour_ranks(rank)
                    .into_iter()
                    .any(|n| sides.is_interior(n) != zero_is_interior)
            })
            .map(|rank| (rank, 0.0))
            .collect();
        if zero.is_empty() {
            return Err(LevelSetError::invalid_input("mask has no boundary"));
        }

        let band = grow_band(&lattice, self.config.half_width, zero, |rank| {
            sides.is_interior(rank)
        });
        let mut level_set = SparseLevelSet::with_sides(lattice, self.config.clone(), sides);
        level_set.commit(&band, &[])?;

        debug!(
            cells,
            foreground,
            nodes = level_set.node_count(),
            zero_layer = level_set.zero_layer().len(),
            half_width = self.config.half_width,
            "level set initialized"
        );
        debug_assert_eq!(
            level_set.layer_len(LayerId::ZERO).ok(),
            Some(level_set.zero_layer().len())
        );
        Ok(level_set)
    }
}
