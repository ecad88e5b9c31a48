//! Command-line driver: read a mask, build a level set, apply one update,
//! and write the rasterized field.
//!
//! ```text
//! cargo run -p narrowband-bench --example update_driver -- <mask.txt> <mode> <out.txt>
//! ```
//!
//! The mask is plain text (see `narrowband_bench::parse_ascii_mask`). Mode
//! `2` grows the interior by one layer (every zero-layer update is `-1`),
//! mode `0` shrinks it (`+1`), and any other mode alternates in bands of
//! ten nodes. A mask that cannot be read is reported and a
//! built-in 64x64 disk is used instead. Failures are reported on stderr;
//! the driver always exits successfully.

use std::fs;

use narrowband_bench::{disk_mask, format_field, parse_ascii_mask, UpdateMode};
use narrowband_core::{DenseMask, MaskReader};
use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig, UpdateEngine};
use narrowband_space::RegionSpec;

fn read_mask(path: &str) -> DenseMask {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| parse_ascii_mask(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(mask) => mask,
        Err(e) => {
            eprintln!("Exception caught reading {path}: {e}");
            eprintln!("Falling back to a built-in 64x64 disk");
            disk_mask(64, 20.0)
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <mask.txt> <mode> <out.txt>", args[0]);
        return;
    }

    let mask = read_mask(&args[1]);
    println!(
        "Input image read: {:?}, {} foreground pixels",
        mask.dimensions(),
        mask.foreground_count()
    );

    let adaptor = match BinaryMaskAdaptor::new(LevelSetConfig::default()) {
        Ok(adaptor) => adaptor,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };
    let mut level_set = match adaptor.initialize(&mask) {
        Ok(ls) => ls,
        Err(e) => {
            eprintln!("Conversion failed: {e}");
            return;
        }
    };
    println!("Finished converting to sparse format");
    for k in -2..=2 {
        if let Ok(len) = level_set.layer_len(k.into()) {
            println!("  layer {k:>2}: {len} nodes");
        }
    }

    let mode = UpdateMode::from_arg(&args[2]);
    let updates = mode.updates(level_set.zero_layer().len());
    match UpdateEngine::default().update(&mut level_set, &updates) {
        Ok(stats) => println!(
            "Update ({mode:?}) applied: zero layer {} -> {}, created={}, destroyed={}, relayered={}, time={}μs",
            stats.zero_layer_before,
            stats.zero_layer_after,
            stats.created,
            stats.destroyed,
            stats.relayered,
            stats.total_us,
        ),
        Err(e) => {
            eprintln!("Update failed: {e}");
            return;
        }
    }

    let field = match level_set.rasterize(&RegionSpec::All) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Rasterize failed: {e}");
            return;
        }
    };
    match fs::write(&args[3], format_field(&field)) {
        Ok(()) => println!("Field written to {}", args[3]),
        Err(e) => eprintln!("Exception caught writing {}: {e}", args[3]),
    }
}
