//! Error types for dense grid buffers.

use std::error::Error;
use std::fmt;

/// Errors arising from constructing a dense grid buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The shape has no axes or an axis of length zero.
    EmptyShape,
    /// The data buffer does not hold exactly one element per cell.
    DataLengthMismatch {
        /// `product(shape)`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// The number of cells does not fit in `usize`.
    CellCountOverflow {
        /// The requested shape.
        shape: Vec<usize>,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "grid shape must have at least one cell"),
            Self::DataLengthMismatch { expected, actual } => {
                write!(f, "grid data has {actual} elements, shape requires {expected}")
            }
            Self::CellCountOverflow { shape } => {
                write!(f, "grid shape {shape:?} has more cells than usize can count")
            }
        }
    }
}

impl Error for GridError {}
