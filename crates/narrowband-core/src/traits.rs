//! Boundary traits for dense input.

/// Read-only access to a dense binary mask.
///
/// This is the only contract the level-set engine has with image readers:
/// whatever decodes a file (or synthesizes a mask) exposes its extent and
/// per-pixel values through this trait. A pixel value of `0` is background;
/// any other value is foreground.
pub trait MaskReader {
    /// Extent of the mask along each axis, slowest-varying axis first.
    fn dimensions(&self) -> &[u32];

    /// Pixel value at `coord`.
    ///
    /// Returns `None` if `coord` has the wrong dimensionality or lies
    /// outside [`dimensions`](Self::dimensions).
    fn pixel_at(&self, coord: &[i32]) -> Option<u8>;
}
