//! Error types for lattice operations.

use narrowband_core::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction or spatial queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A region specification is invalid for this lattice.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// An axis extent exceeds what `i32` coordinates can address, or the
    /// extents together overflow the `usize` cell count.
    DimensionTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The requested extent.
        value: u32,
        /// The maximum allowed extent.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::InvalidRegion { reason } => {
                write!(f, "invalid region: {reason}")
            }
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "axis {axis} extent {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for SpaceError {}
