//! Dense row-major grid buffers: [`DenseMask`] in, [`DenseField`] out.

use crate::error::GridError;
use crate::traits::MaskReader;

/// Number of cells in `shape`, or `CellCountOverflow` if it exceeds `usize`.
fn cell_count(shape: &[usize]) -> Result<usize, GridError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or_else(|| GridError::CellCountOverflow {
            shape: shape.to_vec(),
        })
}

/// Row-major strides for `shape`, slowest axis first.
///
/// Only called on shapes already accepted by [`cell_count`], so no
/// partial product overflows.
fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1usize; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Flat index of `coord` in a row-major buffer of `shape`.
fn flat_index(shape: &[usize], coord: &[i32]) -> Option<usize> {
    if coord.len() != shape.len() {
        return None;
    }
    let mut index = 0usize;
    for (&c, &extent) in coord.iter().zip(shape) {
        if c < 0 || c as usize >= extent {
            return None;
        }
        index = index * extent + c as usize;
    }
    Some(index)
}

/// An in-memory binary mask, stored row-major as one byte per pixel.
///
/// # Examples
///
/// ```
/// use narrowband_core::{DenseMask, MaskReader};
///
/// let mut mask = DenseMask::filled(&[3, 4], 0).unwrap();
/// mask.set(&[1, 2], 1);
/// assert_eq!(mask.dimensions(), &[3, 4]);
/// assert_eq!(mask.pixel_at(&[1, 2]), Some(1));
/// assert_eq!(mask.pixel_at(&[3, 0]), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMask {
    dims: Vec<u32>,
    shape: Vec<usize>,
    data: Vec<u8>,
}

impl DenseMask {
    /// Wrap an existing row-major buffer.
    pub fn new(dims: &[u32], data: Vec<u8>) -> Result<Self, GridError> {
        let shape: Vec<usize> = dims.iter().map(|&d| d as usize).collect();
        if shape.is_empty() || shape.contains(&0) {
            return Err(GridError::EmptyShape);
        }
        let expected = cell_count(&shape)?;
        if data.len() != expected {
            return Err(GridError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dims: dims.to_vec(),
            shape,
            data,
        })
    }

    /// A mask with every pixel set to `value`.
    pub fn filled(dims: &[u32], value: u8) -> Result<Self, GridError> {
        let shape: Vec<usize> = dims.iter().map(|&d| d as usize).collect();
        let len = cell_count(&shape)?;
        Self::new(dims, vec![value; len])
    }

    /// Set the pixel at `coord`. Returns `false` if `coord` is out of bounds.
    pub fn set(&mut self, coord: &[i32], value: u8) -> bool {
        match flat_index(&self.shape, coord) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of foreground (non-zero) pixels.
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&p| p != 0).count()
    }

    /// Raw row-major pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl MaskReader for DenseMask {
    fn dimensions(&self) -> &[u32] {
        &self.dims
    }

    fn pixel_at(&self, coord: &[i32]) -> Option<u8> {
        flat_index(&self.shape, coord).map(|i| self.data[i])
    }
}

/// A dense scalar field materialized from a sparse level set.
///
/// `values` is row-major over `shape`, slowest axis first.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseField {
    shape: Vec<usize>,
    values: Vec<f64>,
}

impl DenseField {
    /// Wrap a row-major value buffer.
    pub fn new(shape: Vec<usize>, values: Vec<f64>) -> Result<Self, GridError> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(GridError::EmptyShape);
        }
        let expected = cell_count(&shape)?;
        if values.len() != expected {
            return Err(GridError::DataLengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// Extent along each axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field, returning its value buffer.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Value at a position *relative to the field's own origin*.
    pub fn get(&self, index: &[i32]) -> Option<f64> {
        flat_index(&self.shape, index).map(|i| self.values[i])
    }

    /// Iterate over rows of the last axis.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        let width = self.shape.last().copied().unwrap_or(1);
        self.values.chunks(width)
    }

    /// Row-major strides, slowest axis first.
    pub fn strides(&self) -> Vec<usize> {
        strides(&self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_length() {
        assert_eq!(
            DenseMask::new(&[2, 2], vec![0; 3]),
            Err(GridError::DataLengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn new_rejects_empty_shape() {
        assert_eq!(DenseMask::new(&[], vec![]), Err(GridError::EmptyShape));
        assert_eq!(DenseMask::new(&[3, 0], vec![]), Err(GridError::EmptyShape));
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        let dims = [i32::MAX as u32; 3];
        let shape = vec![i32::MAX as usize; 3];
        assert_eq!(
            DenseMask::filled(&dims, 0),
            Err(GridError::CellCountOverflow {
                shape: shape.clone()
            })
        );
        assert_eq!(
            DenseField::new(shape.clone(), vec![]),
            Err(GridError::CellCountOverflow { shape })
        );
    }

    #[test]
    fn pixel_at_is_row_major() {
        let mask = DenseMask::new(&[2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(mask.pixel_at(&[0, 2]), Some(2));
        assert_eq!(mask.pixel_at(&[1, 0]), Some(3));
        assert_eq!(mask.pixel_at(&[1, 2]), Some(5));
    }

    #[test]
    fn pixel_at_rejects_bad_coords() {
        let mask = DenseMask::filled(&[2, 3], 1).unwrap();
        assert_eq!(mask.pixel_at(&[-1, 0]), None);
        assert_eq!(mask.pixel_at(&[0, 3]), None);
        assert_eq!(mask.pixel_at(&[0]), None);
        assert_eq!(mask.pixel_at(&[0, 0, 0]), None);
    }

    #[test]
    fn set_and_count_foreground() {
        let mut mask = DenseMask::filled(&[4, 4, 4], 0).unwrap();
        assert!(mask.set(&[1, 2, 3], 255));
        assert!(!mask.set(&[4, 0, 0], 1));
        assert_eq!(mask.foreground_count(), 1);
        assert_eq!(mask.pixel_at(&[1, 2, 3]), Some(255));
    }

    #[test]
    fn field_rows_and_strides() {
        let field = DenseField::new(vec![2, 3], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let rows: Vec<&[f64]> = field.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[3.0, 4.0, 5.0]);
        assert_eq!(field.strides(), vec![3, 1]);
        assert_eq!(field.get(&[1, 1]), Some(4.0));
    }
}
