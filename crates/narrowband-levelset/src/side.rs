//! Packed per-cell side bits.

/// One bit per lattice cell: set for the interior (negative) side.
///
/// Only background cells rely on their bit; band nodes carry a signed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SideMap {
    words: Vec<u64>,
    len: usize,
}

impl SideMap {
    /// All cells on the exterior side.
    pub(crate) fn exterior(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    pub(crate) fn set(&mut self, rank: usize, interior: bool) {
        debug_assert!(rank < self.len, "rank {rank} past side map of {}", self.len);
        let (word, bit) = (rank / 64, rank % 64);
        if interior {
            self.words[word] |= 1u64 << bit;
        } else {
            self.words[word] &= !(1u64 << bit);
        }
    }

    pub(crate) fn is_interior(&self, rank: usize) -> bool {
        self.words
            .get(rank / 64)
            .is_some_and(|&w| w & (1u64 << (rank % 64)) != 0)
    }

    /// Number of interior cells.
    pub(crate) fn interior_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
