//! N-dimensional box lattice with face-connected neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::region::{RegionPlan, RegionSpec};
use narrowband_core::Coord;
use smallvec::SmallVec;

/// An N-dimensional box grid with face-connected neighbourhood.
///
/// Each cell has a coordinate `[c0, c1, ..., c{n-1}]` with
/// `0 <= ci < dims[i]`. Cells are also addressed by their *rank*: the
/// row-major position of the coordinate, slowest axis first. Ranks are what
/// the sparse index stores; coordinates are what callers see.
///
/// Neighbours are the `2 * ndim` face neighbours (4-connected in 2D,
/// 6-connected in 3D). Boundary handling is controlled by
/// [`EdgeBehavior`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    dims: SmallVec<[u32; 4]>,
    strides: SmallVec<[usize; 4]>,
    cell_count: usize,
    edge: EdgeBehavior,
}

impl Lattice {
    /// Maximum extent per axis: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a lattice with the given extents and edge behavior.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `dims` is empty or any
    /// extent is 0, or `Err(SpaceError::DimensionTooLarge)` if any extent
    /// exceeds `i32::MAX` or the total cell count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use narrowband_space::{Lattice, EdgeBehavior};
    ///
    /// let grid = Lattice::new(&[16, 16], EdgeBehavior::Absorb).unwrap();
    /// assert_eq!(grid.cell_count(), 256);
    /// assert_eq!(grid.ndim(), 2);
    /// assert_eq!(grid.rank(&[1, 0]), Some(16));
    /// ```
    pub fn new(dims: &[u32], edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(SpaceError::EmptySpace);
        }
        if let Some((axis, &value)) = dims.iter().enumerate().find(|(_, &d)| d > Self::MAX_DIM) {
            return Err(SpaceError::DimensionTooLarge {
                axis,
                value,
                max: Self::MAX_DIM,
            });
        }
        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, dims.len());
        let mut cell_count = 1usize;
        for axis in (0..dims.len()).rev() {
            strides[axis] = cell_count;
            cell_count = cell_count.checked_mul(dims[axis] as usize).ok_or_else(|| {
                SpaceError::DimensionTooLarge {
                    axis,
                    value: dims[axis],
                    max: (usize::MAX / strides[axis]).min(Self::MAX_DIM as usize) as u32,
                }
            })?;
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
            strides,
            cell_count,
            edge,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Extent along each axis.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `coord` addresses a cell of this lattice.
    pub fn contains(&self, coord: &[i32]) -> bool {
        self.rank(coord).is_some()
    }

    /// Row-major rank of `coord`, or `None` if it is not on the lattice.
    pub fn rank(&self, coord: &[i32]) -> Option<usize> {
        if coord.len() != self.dims.len() {
            return None;
        }
        let mut rank = 0usize;
        for ((&c, &extent), &stride) in coord.iter().zip(&self.dims).zip(&self.strides) {
            if c < 0 || c as u32 >= extent {
                return None;
            }
            rank += c as usize * stride;
        }
        Some(rank)
    }

    /// Like [`rank`](Self::rank), but reports why the coordinate was rejected.
    pub fn check_bounds(&self, coord: &[i32]) -> Result<usize, SpaceError> {
        self.rank(coord).ok_or_else(|| SpaceError::CoordOutOfBounds {
            coord: SmallVec::from_slice(coord),
            bounds: self.describe_bounds(),
        })
    }

    /// Coordinate of the cell at `rank`, or `None` if `rank` is past the end.
    pub fn coord_of(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count() {
            return None;
        }
        let mut rest = rank;
        let coord = self
            .strides
            .iter()
            .map(|&stride| {
                let c = rest / stride;
                rest %= stride;
                c as i32
            })
            .collect();
        Some(coord)
    }

    /// Face neighbours of `coord`, in axis order (`-1` step before `+1`).
    ///
    /// Returns an empty list for coordinates off the lattice.
    pub fn neighbours(&self, coord: &[i32]) -> SmallVec<[Coord; 8]> {
        match self.rank(coord) {
            Some(rank) => self
                .neighbour_ranks(rank)
                .into_iter()
                .filter_map(|r| self.coord_of(r))
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Face neighbours of the cell at `rank`, as ranks.
    ///
    /// This is the hot path for band construction: no coordinate is
    /// materialized. Under [`EdgeBehavior::Clamp`] the list may contain
    /// `rank` itself.
    pub fn neighbour_ranks(&self, rank: usize) -> SmallVec<[usize; 8]> {
        let mut out = SmallVec::new();
        let mut rest = rank;
        for (&extent, &stride) in self.dims.iter().zip(&self.strides) {
            let c = (rest / stride) as i64;
            rest %= stride;
            for step in [-1i64, 1] {
                if let Some(n) = self.edge.resolve_axis(c + step, extent) {
                    // Replace this axis' contribution to the rank.
                    out.push((rank as i64 + (n - c) * stride as i64) as usize);
                }
            }
        }
        out
    }

    /// Graph-geodesic (Manhattan) distance between two cells.
    pub fn distance(&self, a: &[i32], b: &[i32]) -> u32 {
        a.iter()
            .zip(b)
            .zip(&self.dims)
            .map(|((&x, &y), &extent)| self.edge.axis_distance(x, y, extent))
            .sum()
    }

    /// All cells in row-major canonical order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        (0..self.cell_count()).filter_map(|r| self.coord_of(r)).collect()
    }

    /// Compile a region specification into a plan.
    pub fn compile_region(&self, spec: &RegionSpec) -> Result<RegionPlan, SpaceError> {
        match spec {
            RegionSpec::All => {
                let ranks: Vec<usize> = (0..self.cell_count()).collect();
                let coords = self.canonical_ordering();
                let shape = self.dims.iter().map(|&d| d as usize).collect();
                Ok(RegionPlan::new(coords, ranks, shape))
            }

            RegionSpec::Rect { min, max } => {
                self.check_bounds(min)?;
                self.check_bounds(max)?;
                if let Some(axis) = (0..self.ndim()).find(|&a| min[a] > max[a]) {
                    return Err(SpaceError::InvalidRegion {
                        reason: format!(
                            "Rect min {min:?} > max {max:?} on axis {axis}"
                        ),
                    });
                }
                let shape: Vec<usize> = min
                    .iter()
                    .zip(max.iter())
                    .map(|(&lo, &hi)| (hi - lo + 1) as usize)
                    .collect();
                let total: usize = shape.iter().product();
                let mut coords = Vec::with_capacity(total);
                let mut ranks = Vec::with_capacity(total);
                let mut cursor: Coord = min.clone();
                for _ in 0..total {
                    ranks.push(self.check_bounds(&cursor)?);
                    coords.push(cursor.clone());
                    // Odometer increment, fastest axis last.
                    for axis in (0..cursor.len()).rev() {
                        if cursor[axis] < max[axis] {
                            cursor[axis] += 1;
                            break;
                        }
                        cursor[axis] = min[axis];
                    }
                }
                Ok(RegionPlan::new(coords, ranks, shape))
            }

            RegionSpec::Coords(list) => {
                let mut ranks = list
                    .iter()
                    .map(|c| self.check_bounds(c))
                    .collect::<Result<Vec<_>, _>>()?;
                ranks.sort_unstable();
                ranks.dedup();
                let coords = ranks.iter().filter_map(|&r| self.coord_of(r)).collect();
                let shape = vec![ranks.len()];
                Ok(RegionPlan::new(coords, ranks, shape))
            }
        }
    }

    fn describe_bounds(&self) -> String {
        self.dims
            .iter()
            .map(|d| format!("[0, {d})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn c(r: i32, col: i32) -> Coord {
        smallvec![r, col]
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_absorb_interior() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Absorb).unwrap();
        let n = s.neighbours(&c(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(1, 2))); // north
        assert!(n.contains(&c(3, 2))); // south
        assert!(n.contains(&c(2, 1))); // west
        assert!(n.contains(&c(2, 3))); // east
    }

    #[test]
    fn neighbours_absorb_corner() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Absorb).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
    }

    #[test]
    fn neighbours_clamp_corner_self_loops() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Clamp).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 4);
        assert_eq!(n.iter().filter(|nb| **nb == c(0, 0)).count(), 2);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Wrap).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(4, 0))); // north wraps
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 4))); // west wraps
        assert!(n.contains(&c(0, 1)));
    }

    #[test]
    fn neighbours_3d_are_six_connected() {
        let s = Lattice::new(&[3, 3, 3], EdgeBehavior::Absorb).unwrap();
        assert_eq!(s.neighbours(&[1, 1, 1]).len(), 6);
        assert_eq!(s.neighbours(&[0, 0, 0]).len(), 3);
    }

    #[test]
    fn neighbour_ranks_are_one_step_away() {
        let s = Lattice::new(&[4, 6], EdgeBehavior::Absorb).unwrap();
        for rank in 0..s.cell_count() {
            let coord = s.coord_of(rank).unwrap();
            for nb in s.neighbour_ranks(rank) {
                let nb_coord = s.coord_of(nb).unwrap();
                assert_eq!(s.distance(&coord, &nb_coord), 1, "{coord:?} -> {nb_coord:?}");
            }
        }
        assert_eq!(s.neighbour_ranks(s.rank(&[1, 2]).unwrap()).to_vec(), vec![2, 14, 7, 9]);
    }

    #[test]
    fn off_lattice_coordinate_has_no_neighbours() {
        let s = Lattice::new(&[4, 4], EdgeBehavior::Wrap).unwrap();
        assert!(s.neighbours(&[4, 0]).is_empty());
        assert!(s.neighbours(&[0]).is_empty());
    }

    // ── Rank tests ──────────────────────────────────────────────

    #[test]
    fn rank_is_row_major() {
        let s = Lattice::new(&[3, 4], EdgeBehavior::Absorb).unwrap();
        assert_eq!(s.rank(&[0, 0]), Some(0));
        assert_eq!(s.rank(&[0, 3]), Some(3));
        assert_eq!(s.rank(&[2, 1]), Some(9));
        assert_eq!(s.rank(&[3, 0]), None);
        assert_eq!(s.rank(&[0, -1]), None);
        assert_eq!(s.rank(&[1]), None);
    }

    #[test]
    fn check_bounds_reports_coordinate() {
        let s = Lattice::new(&[3, 4], EdgeBehavior::Absorb).unwrap();
        match s.check_bounds(&[5, 0]) {
            Err(SpaceError::CoordOutOfBounds { coord, bounds }) => {
                assert_eq!(coord, c(5, 0));
                assert_eq!(bounds, "[0, 3) x [0, 4)");
            }
            other => panic!("expected CoordOutOfBounds, got {other:?}"),
        }
    }

    // ── Distance tests ──────────────────────────────────────────

    #[test]
    fn distance_manhattan_absorb() {
        let s = Lattice::new(&[10, 10], EdgeBehavior::Absorb).unwrap();
        assert_eq!(s.distance(&[0, 0], &[3, 4]), 7);
    }

    #[test]
    fn distance_manhattan_wrap() {
        let s = Lattice::new(&[10, 10], EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.distance(&[0, 0], &[9, 9]), 2);
        assert_eq!(s.distance(&[0, 0], &[3, 4]), 7);
    }

    // ── Region tests ────────────────────────────────────────────

    #[test]
    fn compile_region_all() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Absorb).unwrap();
        let plan = s.compile_region(&RegionSpec::All).unwrap();
        assert_eq!(plan.cell_count(), 25);
        assert_eq!(plan.shape(), &[5, 5]);
    }

    #[test]
    fn compile_region_rect() {
        let s = Lattice::new(&[10, 10], EdgeBehavior::Absorb).unwrap();
        let plan = s
            .compile_region(&RegionSpec::Rect {
                min: c(2, 3),
                max: c(4, 6),
            })
            .unwrap();
        assert_eq!(plan.cell_count(), 12); // 3 rows * 4 cols
        assert_eq!(plan.shape(), &[3, 4]);
        assert_eq!(plan.coords()[0], c(2, 3));
        assert_eq!(plan.coords()[4], c(3, 3));
        assert_eq!(plan.ranks()[11], 46);
    }

    #[test]
    fn compile_region_rect_invalid() {
        let s = Lattice::new(&[10, 10], EdgeBehavior::Absorb).unwrap();
        assert!(matches!(
            s.compile_region(&RegionSpec::Rect {
                min: c(5, 0),
                max: c(2, 3),
            }),
            Err(SpaceError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn compile_region_coords_sorted_and_deduped() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Absorb).unwrap();
        let plan = s
            .compile_region(&RegionSpec::Coords(vec![c(1, 2), c(3, 4), c(0, 0), c(1, 2)]))
            .unwrap();
        assert_eq!(plan.coords(), &[c(0, 0), c(1, 2), c(3, 4)]);
    }

    #[test]
    fn compile_region_coords_oob() {
        let s = Lattice::new(&[5, 5], EdgeBehavior::Absorb).unwrap();
        assert!(matches!(
            s.compile_region(&RegionSpec::Coords(vec![c(10, 0)])),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            Lattice::new(&[0, 5], EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        );
        assert_eq!(
            Lattice::new(&[], EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Lattice::new(&[5, big], EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { axis: 1, .. })
        ));
    }

    #[test]
    fn new_rejects_cell_count_overflow() {
        let max = Lattice::MAX_DIM;
        let err = Lattice::new(&[max, max, max], EdgeBehavior::Absorb).unwrap_err();
        let SpaceError::DimensionTooLarge { value, max: limit, .. } = err else {
            panic!("expected DimensionTooLarge, got {err:?}");
        };
        assert_eq!(value, max);
        assert!(limit < max);

        // the largest addressable extents on each axis still construct
        let s = Lattice::new(&[max, 1, 1], EdgeBehavior::Absorb).unwrap();
        assert_eq!(s.cell_count(), max as usize);
    }

    #[test]
    fn single_cell_wrap_neighbours_are_self() {
        let s = Lattice::new(&[1, 1], EdgeBehavior::Wrap).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 4);
        assert!(n.iter().all(|nb| nb == &c(0, 0)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_absorb() {
        let s = Lattice::new(&[6, 7], EdgeBehavior::Absorb).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_clamp() {
        let s = Lattice::new(&[6, 7], EdgeBehavior::Clamp).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_wrap_3d() {
        let s = Lattice::new(&[3, 4, 5], EdgeBehavior::Wrap).unwrap();
        compliance::run_full_compliance(&s);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![
            Just(EdgeBehavior::Absorb),
            Just(EdgeBehavior::Clamp),
            Just(EdgeBehavior::Wrap),
        ]
    }

    proptest! {
        #[test]
        fn rank_round_trips(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0i32..12, col in 0i32..12,
        ) {
            let s = Lattice::new(&[rows, cols], EdgeBehavior::Absorb).unwrap();
            let coord: Coord = smallvec![r % rows as i32, col % cols as i32];
            let rank = s.rank(&coord).unwrap();
            prop_assert_eq!(s.coord_of(rank), Some(coord));
        }

        #[test]
        fn neighbours_symmetric(
            rows in 2u32..10,
            cols in 2u32..10,
            edge in arb_edge(),
            r in 0i32..10, col in 0i32..10,
        ) {
            let s = Lattice::new(&[rows, cols], edge).unwrap();
            let coord: Coord = smallvec![r % rows as i32, col % cols as i32];
            for nb in s.neighbours(&coord) {
                prop_assert!(
                    s.neighbours(&nb).contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, coord,
                );
            }
        }
    }
}
