//! Breadth-first band construction around a seeded zero layer.
//!
//! Both the mask adaptor and the update engine end by handing a zero layer
//! to [`grow_band`], so a freshly initialized level set and one that has
//! been updated are layered by exactly the same rule.

use indexmap::IndexMap;
use narrowband_core::LayerId;
use narrowband_space::Lattice;

/// A cell of the band as computed, before it is committed to a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BandCell {
    pub(crate) rank: usize,
    pub(crate) value: f64,
    pub(crate) layer: LayerId,
}

/// Grow layers `±1..=±half_width` outward from `zero`.
///
/// `zero` lists `(rank, value)` pairs with values in `[-0.5, 0.5)`; the
/// first occurrence of a rank wins. Every cell at face distance `k` from the
/// zero layer joins layer `+k` or `-k` depending on `is_interior`. An
/// exterior cell takes `min(closer neighbour) + 1`, an interior cell
/// `max(closer neighbour) - 1`. Beyond the first layer only same-side
/// neighbours count as closer.
///
/// Cells come back zero layer first, then layer by layer in discovery
/// order.
pub(crate) fn grow_band(
    lattice: &Lattice,
    half_width: u32,
    zero: impl IntoIterator<Item = (usize, f64)>,
    is_interior: impl Fn(usize) -> bool,
) -> Vec<BandCell> {
    let mut cells: Vec<BandCell> = Vec::new();
    // rank → position in `cells`
    let mut placed: IndexMap<usize, usize> = IndexMap::new();

    for (rank, value) in zero {
        debug_assert!(LayerId::of_value(value).is_zero(), "zero seed {value}");
        if placed.contains_key(&rank) {
            continue;
        }
        placed.insert(rank, cells.len());
        cells.push(BandCell {
            rank,
            value,
            layer: LayerId::ZERO,
        });
    }

    let mut frontier = 0..cells.len();
    for k in 1..=half_width as i32 {
        let start = cells.len();
        for i in frontier {
            let src = cells[i];
            let src_interior = src.value < 0.0;
            for n in lattice.neighbour_ranks(src.rank) {
                let interior = is_interior(n);
                if !src.layer.is_zero() && interior != src_interior {
                    continue;
                }
                let candidate = if interior {
                    src.value - 1.0
                } else {
                    src.value + 1.0
                };
                match placed.get(&n) {
                    Some(&j) if j >= start => {
                        let cell = &mut cells[j];
                        cell.value = if interior {
                            cell.value.max(candidate)
                        } else {
                            cell.value.min(candidate)
                        };
                    }
                    Some(_) => {}
                    None => {
                        placed.insert(n, cells.len());
                        cells.push(BandCell {
                            rank: n,
                            value: candidate,
                            layer: LayerId(if interior { -k } else { k }),
                        });
                    }
                }
            }
        }
        frontier = start..cells.len();
        if frontier.is_empty() {
            break;
        }
    }

    debug_assert!(cells
        .iter()
        .all(|c| LayerId::of_value(c.value) == c.layer));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrowband_space::EdgeBehavior;

    fn line(n: u32) -> Lattice {
        Lattice::new(&[n], EdgeBehavior::Absorb).unwrap()
    }

    #[test]
    fn grows_signed_layers_on_a_line() {
        // cells 0..=3 interior, zero at 4, exterior beyond
        let lattice = line(9);
        let band = grow_band(&lattice, 2, [(4, 0.0)], |r| r < 4);
        let layers: Vec<(usize, i32, f64)> =
            band.iter().map(|c| (c.rank, c.layer.0, c.value)).collect();
        assert_eq!(
            layers,
            vec![
                (4, 0, 0.0),
                (3, -1, -1.0),
                (5, 1, 1.0),
                (2, -2, -2.0),
                (6, 2, 2.0),
            ]
        );
    }

    #[test]
    fn outer_value_takes_the_nearest_zero_node() {
        // two zero seeds flank cell 1 on a 3-cell line
        let lattice = line(3);
        let band = grow_band(&lattice, 1, [(0, 0.3), (2, -0.2)], |_| false);
        let mid = band.iter().find(|c| c.rank == 1).unwrap();
        assert_eq!(mid.layer, LayerId(1));
        assert!((mid.value - 0.8).abs() < 1e-12);
    }

    #[test]
    fn inner_value_takes_the_largest_zero_node() {
        let lattice = line(3);
        let band = grow_band(&lattice, 1, [(0, 0.3), (2, -0.2)], |_| true);
        let mid = band.iter().find(|c| c.rank == 1).unwrap();
        assert_eq!(mid.layer, LayerId(-1));
        assert!((mid.value - -0.7).abs() < 1e-12);
    }

    #[test]
    fn duplicate_zero_seeds_keep_the_first() {
        let lattice = line(4);
        let band = grow_band(&lattice, 1, [(1, 0.1), (1, -0.4)], |_| false);
        assert_eq!(band[0].value, 0.1);
        assert_eq!(band.iter().filter(|c| c.rank == 1).count(), 1);
    }

    #[test]
    fn stops_at_half_width() {
        let lattice = Lattice::new(&[7, 7], EdgeBehavior::Absorb).unwrap();
        let centre = lattice.rank(&[3, 3]).unwrap();
        let band = grow_band(&lattice, 2, [(centre, 0.0)], |_| false);
        // 1 + 4 + 8 cells within Manhattan distance 2
        assert_eq!(band.len(), 13);
        assert!(band.iter().all(|c| c.layer.distance() <= 2));
    }
}
