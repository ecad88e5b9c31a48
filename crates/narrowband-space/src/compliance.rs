//! Lattice compliance test helpers.
//!
//! These functions verify the topological invariants the level-set engine
//! relies on. Reused across the edge-behavior test suites.

use crate::lattice::Lattice;
use crate::region::RegionSpec;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(space: &Lattice) {
    for coord in space.canonical_ordering() {
        let d = space.distance(&coord, &coord);
        assert_eq!(d, 0, "distance({coord:?}, {coord:?}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &Lattice) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert_eq!(dab, dba, "distance({a:?}, {b:?}) != distance({b:?}, {a:?})");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &Lattice) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(&coord) {
            let nb_neighbours = space.neighbours(&nb);
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every neighbour is at distance at most one.
pub fn assert_neighbours_adjacent(space: &Lattice) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(&coord) {
            let d = space.distance(&coord, &nb);
            assert!(d <= 1, "neighbour {nb:?} of {coord:?} is at distance {d}");
        }
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// coords whose ranks count up from zero.
pub fn assert_canonical_ordering_complete(space: &Lattice) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(space.rank(coord), Some(i), "rank of {coord:?}");
    }
}

/// Assert that `compile_region(All)` covers all cells in canonical order.
pub fn assert_compile_region_all_covers_all(space: &Lattice) {
    let plan = space
        .compile_region(&RegionSpec::All)
        .expect("compile_region(All) should succeed");
    assert_eq!(plan.coords(), space.canonical_ordering().as_slice());
    assert_eq!(plan.shape().iter().product::<usize>(), space.cell_count());
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(space: &Lattice) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_neighbours_symmetric(space);
    assert_neighbours_adjacent(space);
    assert_canonical_ordering_complete(space);
    assert_compile_region_all_covers_all(space);
}
