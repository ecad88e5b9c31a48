//! Lattice edge (boundary) behavior.

/// How a lattice handles neighbours at its edges.
///
/// Level sets built from images normally use [`Absorb`](Self::Absorb): the
/// image border simply has fewer neighbours. `Wrap` is useful for periodic
/// domains.
///
/// # Examples
///
/// ```
/// use narrowband_space::{Lattice, EdgeBehavior};
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = Lattice::new(&[4, 4], EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(&[0, 0]).len(), 2);
/// assert_eq!(absorb.neighbours(&[1, 1]).len(), 4);
///
/// // Wrap: all cells have exactly 4 neighbours (torus).
/// let wrap = Lattice::new(&[4, 4], EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(&[0, 0]).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis value under this edge behavior.
    ///
    /// Returns `Some(resolved)` or `None` for an absorbed out-of-bounds step.
    pub(crate) fn resolve_axis(self, val: i64, len: u32) -> Option<i64> {
        let n = i64::from(len);
        if val >= 0 && val < n {
            return Some(val);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(val.clamp(0, n - 1)),
            Self::Wrap => Some(val.rem_euclid(n)),
        }
    }

    /// 1D distance along a single axis, accounting for wrap.
    pub(crate) fn axis_distance(self, a: i32, b: i32, len: u32) -> u32 {
        let diff = a.abs_diff(b);
        match self {
            Self::Wrap => diff.min(len - diff),
            Self::Absorb | Self::Clamp => diff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_in_bounds_is_identity() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            assert_eq!(edge.resolve_axis(3, 5), Some(3));
        }
    }

    #[test]
    fn resolve_out_of_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(-1, 5), None);
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(-1, 5), Some(0));
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(5, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(5, 5), Some(0));
    }

    #[test]
    fn wrap_distance_takes_short_way_round() {
        assert_eq!(EdgeBehavior::Wrap.axis_distance(0, 9, 10), 1);
        assert_eq!(EdgeBehavior::Absorb.axis_distance(0, 9, 10), 9);
    }
}
