//! Region specification and compiled region plans.

use narrowband_core::Coord;

/// Specifies a region of cells within a [`Lattice`](crate::Lattice).
///
/// Used to choose which part of a sparse level set is rasterized.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionSpec {
    /// Every cell in the lattice.
    All,
    /// Axis-aligned bounding box in coordinate space.
    Rect {
        /// Minimum corner (inclusive).
        min: Coord,
        /// Maximum corner (inclusive).
        max: Coord,
    },
    /// Explicit list of coordinates (sorted and deduplicated on compile).
    Coords(Vec<Coord>),
}

/// Compiled region plan: coordinates and ranks in canonical order.
///
/// Created by [`Lattice::compile_region`](crate::Lattice::compile_region).
#[derive(Clone, Debug, PartialEq)]
pub struct RegionPlan {
    coords: Vec<Coord>,
    ranks: Vec<usize>,
    shape: Vec<usize>,
}

impl RegionPlan {
    pub(crate) fn new(coords: Vec<Coord>, ranks: Vec<usize>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(coords.len(), ranks.len());
        debug_assert_eq!(shape.iter().product::<usize>(), ranks.len());
        Self {
            coords,
            ranks,
            shape,
        }
    }

    /// Number of cells in the region.
    pub fn cell_count(&self) -> usize {
        self.ranks.len()
    }

    /// Coordinates in canonical iteration order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Lattice ranks, parallel to [`coords`](Self::coords).
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Shape of the dense tensor this region rasterizes into.
    ///
    /// `Rect` and `All` keep their N-D extent; `Coords` is flattened to 1D.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}
