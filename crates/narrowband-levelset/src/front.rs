//! Bounded multi-source shortest-path sweeps used to estimate where a
//! moved front lies.
//!
//! Given seeds `(rank, key)`, a sweep settles every cell whose
//! `min(seed key + face distance)` stays within the zero-band limit. Cells
//! are settled in increasing key order, so the sweep touches only the
//! region the front can reach.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use narrowband_space::Lattice;

/// Keys at or beyond this bound can no longer reach the zero layer.
pub(crate) const ZERO_BAND_LIMIT: f64 = 0.5;

/// Whether the limit itself is inside the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bound {
    /// Settle keys `< 0.5`.
    Exclusive,
    /// Settle keys `<= 0.5`.
    Inclusive,
}

impl Bound {
    fn admits(self, key: f64) -> bool {
        match self {
            Self::Exclusive => key < ZERO_BAND_LIMIT,
            Self::Inclusive => key <= ZERO_BAND_LIMIT,
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest key first,
/// lowest rank on ties.
#[derive(Clone, Copy, Debug)]
struct Entry {
    key: f64,
    rank: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

/// Settle `min(seed + distance)` for every cell it keeps within `bound`.
///
/// Returns settled cells in settlement order.
pub(crate) fn sweep(
    lattice: &Lattice,
    seeds: impl IntoIterator<Item = (usize, f64)>,
    bound: Bound,
) -> IndexMap<usize, f64> {
    let mut tentative: IndexMap<usize, f64> = IndexMap::new();
    let mut heap = BinaryHeap::new();
    for (rank, key) in seeds {
        if !bound.admits(key) {
            continue;
        }
        if tentative.get(&rank).is_none_or(|&best| key < best) {
            tentative.insert(rank, key);
            heap.push(Entry { key, rank });
        }
    }

    let mut settled: IndexMap<usize, f64> = IndexMap::new();
    while let Some(Entry { key, rank }) = heap.pop() {
        if settled.contains_key(&rank) {
            continue;
        }
        settled.insert(rank, key);
        let next = key + 1.0;
        if !bound.admits(next) {
            continue;
        }
        for n in lattice.neighbour_ranks(rank) {
            if settled.contains_key(&n) {
                continue;
            }
            if tentative.get(&n).is_none_or(|&best| next < best) {
                tentative.insert(n, next);
                heap.push(Entry { key: next, rank: n });
            }
        }
    }
    settled
}
