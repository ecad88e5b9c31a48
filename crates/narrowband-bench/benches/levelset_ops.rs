//! Criterion micro-benchmarks for level-set initialization and update.

use criterion::{criterion_group, criterion_main, Criterion};
use narrowband_bench::{disk_mask, reference_level_set, UpdateMode};
use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig, UpdateEngine};
use narrowband_space::RegionSpec;
use std::hint::black_box;

/// Benchmark: Initialize a level set from a 256x256 disk mask.
fn bench_initialize_disk_256(c: &mut Criterion) {
    let mask = disk_mask(256, 80.0);
    let adaptor = BinaryMaskAdaptor::new(LevelSetConfig::default()).unwrap();

    c.bench_function("initialize_disk_256", |b| {
        b.iter(|| {
            let ls = adaptor.initialize(&mask).unwrap();
            black_box(&ls);
        });
    });
}

/// Benchmark: Same disk with a wide band (half-width 8).
fn bench_initialize_disk_256_wide(c: &mut Criterion) {
    let mask = disk_mask(256, 80.0);
    let adaptor = BinaryMaskAdaptor::new(LevelSetConfig::with_half_width(8)).unwrap();

    c.bench_function("initialize_disk_256_wide", |b| {
        b.iter(|| {
            let ls = adaptor.initialize(&mask).unwrap();
            black_box(&ls);
        });
    });
}

/// Benchmark: One growth step (all -1) on a 256x256 disk.
///
/// The level set is cloned per iteration so every step starts from the
/// same front.
fn bench_update_grow_256(c: &mut Criterion) {
    let base = reference_level_set(256);
    let engine = UpdateEngine::default();
    let updates = UpdateMode::Grow.updates(base.zero_layer().len());

    c.bench_function("update_grow_256", |b| {
        b.iter(|| {
            let mut ls = base.clone();
            let stats = engine.update(&mut ls, &updates).unwrap();
            black_box(stats);
        });
    });
}

/// Benchmark: Sub-layer jitter on a 256x256 disk.
///
/// Updates are small deterministic pseudo-random offsets in [-0.25, 0.25),
/// so most nodes stay in their layer and the update is dominated by the
/// sweeps rather than list churn.
fn bench_update_jitter_256(c: &mut Criterion) {
    let base = reference_level_set(256);
    let engine = UpdateEngine::default();
    let updates: Vec<f64> = (0u64..base.zero_layer().len() as u64)
        .map(|i| {
            let bits = i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (bits >> 11) as f64 / (1u64 << 53) as f64 * 0.5 - 0.25
        })
        .collect();

    c.bench_function("update_jitter_256", |b| {
        b.iter(|| {
            let mut ls = base.clone();
            let stats = engine.update(&mut ls, &updates).unwrap();
            black_box(stats);
        });
    });
}

/// Benchmark: Zero update (no-op) on a 256x256 disk, in place.
fn bench_update_noop_256(c: &mut Criterion) {
    let mut ls = reference_level_set(256);
    let engine = UpdateEngine::default();
    let updates = vec![0.0; ls.zero_layer().len()];

    c.bench_function("update_noop_256", |b| {
        b.iter(|| {
            let stats = engine.update(&mut ls, &updates).unwrap();
            black_box(stats);
        });
    });
}

/// Benchmark: Rasterize the full 256x256 field.
fn bench_rasterize_all_256(c: &mut Criterion) {
    let ls = reference_level_set(256);

    c.bench_function("rasterize_all_256", |b| {
        b.iter(|| {
            let field = ls.rasterize(&RegionSpec::All).unwrap();
            black_box(&field);
        });
    });
}

criterion_group!(
    benches,
    bench_initialize_disk_256,
    bench_initialize_disk_256_wide,
    bench_update_grow_256,
    bench_update_jitter_256,
    bench_update_noop_256,
    bench_rasterize_all_256,
);
criterion_main!(benches);
