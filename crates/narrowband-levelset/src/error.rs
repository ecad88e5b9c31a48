//! Level-set error types.

use std::error::Error;
use std::fmt;

use narrowband_arena::ArenaError;
use narrowband_core::{Coord, GridError, LayerId};
use narrowband_space::SpaceError;

use crate::config::ConfigError;

/// A query outside the configured bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutOfRange {
    /// A layer index whose magnitude exceeds the band half-width.
    Layer {
        /// The requested layer.
        layer: LayerId,
        /// The configured half-width.
        half_width: u32,
    },
    /// A coordinate that is not on the lattice.
    Coord {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable lattice bounds.
        bounds: String,
    },
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer { layer, half_width } => {
                write!(f, "layer {layer} outside band [-{half_width}, {half_width}]")
            }
            Self::Coord { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds {bounds}")
            }
        }
    }
}

/// Errors returned by level-set construction, queries, and updates.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelSetError {
    /// The mask or the update list cannot be used.
    InvalidInput {
        /// What was wrong with it.
        reason: String,
    },
    /// The update list length differs from the zero-layer size.
    SizeMismatch {
        /// Zero-layer node count at call time.
        expected: usize,
        /// Length of the supplied update list.
        actual: usize,
    },
    /// A layer or coordinate query outside the configured bounds.
    OutOfRange(OutOfRange),
    /// Configuration failed validation.
    Config(ConfigError),
    /// Lattice construction or region planning failed.
    Space(SpaceError),
    /// Dense output buffer construction failed.
    Grid(GridError),
    /// Node storage rejected a handle or slot.
    Arena(ArenaError),
}

impl LevelSetError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LevelSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "update list has {actual} entries, zero layer has {expected} nodes"
            ),
            Self::OutOfRange(e) => write!(f, "out of range: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Space(e) => write!(f, "space error: {e}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Arena(e) => write!(f, "arena error: {e}"),
        }
    }
}

impl Error for LevelSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OutOfRange> for LevelSetError {
    fn from(e: OutOfRange) -> Self {
        Self::OutOfRange(e)
    }
}

impl From<ConfigError> for LevelSetError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Off-lattice coordinates surface as [`OutOfRange::Coord`]; every other
/// space error is wrapped as-is.
impl From<SpaceError> for LevelSetError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::CoordOutOfBounds { coord, bounds } => {
                Self::OutOfRange(OutOfRange::Coord { coord, bounds })
            }
            other => Self::Space(other),
        }
    }
}

impl From<GridError> for LevelSetError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ArenaError> for LevelSetError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
