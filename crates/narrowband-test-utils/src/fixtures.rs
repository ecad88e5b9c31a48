//! Mask fixtures.

use narrowband_core::DenseMask;
use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig, SparseLevelSet, ZeroLayerSide};

/// `rows x cols` background with one foreground pixel at `(r, c)`.
pub fn single_pixel(rows: u32, cols: u32, r: i32, c: i32) -> DenseMask {
    let mut mask = DenseMask::filled(&[rows, cols], 0).expect("non-empty mask");
    assert!(mask.set(&[r, c], 1), "pixel ({r}, {c}) off the mask");
    mask
}

/// Filled axis-aligned rectangle `[r0, r1) x [c0, c1)`.
pub fn rect(rows: u32, cols: u32, r0: i32, r1: i32, c0: i32, c1: i32) -> DenseMask {
    let mut mask = DenseMask::filled(&[rows, cols], 0).expect("non-empty mask");
    for r in r0..r1 {
        for c in c0..c1 {
            mask.set(&[r, c], 1);
        }
    }
    mask
}

/// Filled disk of `radius` centred on the mask.
pub fn disk(size: u32, radius: f64) -> DenseMask {
    let centre = (f64::from(size) - 1.0) / 2.0;
    let mut mask = DenseMask::filled(&[size, size], 0).expect("non-empty mask");
    for r in 0..size as i32 {
        for c in 0..size as i32 {
            let (dr, dc) = (f64::from(r) - centre, f64::from(c) - centre);
            if dr * dr + dc * dc <= radius * radius {
                mask.set(&[r, c], 1);
            }
        }
    }
    mask
}

/// Filled ball of `radius` centred in a `size`³ volume.
pub fn ball(size: u32, radius: f64) -> DenseMask {
    let centre = (f64::from(size) - 1.0) / 2.0;
    let mut mask = DenseMask::filled(&[size, size, size], 0).expect("non-empty mask");
    let n = size as i32;
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                let d2: f64 = [z, y, x]
                    .iter()
                    .map(|&v| (f64::from(v) - centre).powi(2))
                    .sum();
                if d2 <= radius * radius {
                    mask.set(&[z, y, x], 1);
                }
            }
        }
    }
    mask
}

/// Initialize `mask` with half-width `h` and the given zero-layer side.
pub fn init(mask: &DenseMask, h: u32, side: ZeroLayerSide) -> SparseLevelSet {
    let config = LevelSetConfig {
        zero_layer_side: side,
        ..LevelSetConfig::with_half_width(h)
    };
    BinaryMaskAdaptor::new(config)
        .expect("valid config")
        .initialize(mask)
        .expect("mask has a boundary")
}
