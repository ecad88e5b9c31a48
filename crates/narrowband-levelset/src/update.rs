//! The update engine: apply per-node updates to the zero layer and
//! re-layer the band around the moved front.
//!
//! An update runs in two halves. Planning reads the level set and computes
//! the complete new band without touching it:
//!
//! 1. Each zero-layer node (an *anchor*) gets a tentative value.
//! 2. Two bounded sweeps estimate the moved front: `U(x) = min(v'_a + d)`
//!    for cells that were outside, `L(x) = max(v'_a - d)` for cells that
//!    were inside, with `d` the face distance to anchor `a`.
//! 3. Every estimate in `[-0.5, 0.5)` joins the new zero layer. Neighbours
//!    whose estimates straddle zero with no zero node between them get one
//!    by interpolating the crossing.
//! 4. Layers `±1..=±half_width` are regrown breadth-first.
//!
//! The commit half then applies that band in one pass. A failed validation
//! leaves the level set untouched.

use std::time::Instant;

use indexmap::IndexMap;
use narrowband_core::LayerId;
use tracing::{debug, debug_span, trace};

use crate::band::{grow_band, BandCell};
use crate::config::{UpdateConfig, UpdatePolicy};
use crate::container::SparseLevelSet;
use crate::error::LevelSetError;
use crate::front::{sweep, Bound};
use crate::stats::UpdateStats;

/// Largest value a zero-layer node may hold.
const ZERO_LAYER_MAX: f64 = 0.5 - f64::EPSILON;

/// Applies update lists to a [`SparseLevelSet`].
///
/// # Examples
///
/// ```
/// use narrowband_core::{DenseMask, LayerId};
/// use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig, UpdateEngine};
///
/// let mut mask = DenseMask::filled(&[6, 6], 0).unwrap();
/// for r in 2..4 {
///     for c in 2..4 {
///         mask.set(&[r, c], 1);
///     }
/// }
/// let mut ls = BinaryMaskAdaptor::new(LevelSetConfig::default())
///     .unwrap()
///     .initialize(&mask)
///     .unwrap();
///
/// let engine = UpdateEngine::default();
/// let n = ls.zero_layer().len();
/// let stats = engine.update(&mut ls, &vec![0.0; n]).unwrap();
/// assert!(stats.band_unchanged());
///
/// assert!(engine.update(&mut ls, &vec![0.0; n + 1]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct UpdateEngine {
    config: UpdateConfig,
}

/// Where planning places a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Estimate {
    /// An anchor's tentative value or a settled sweep estimate.
    Value(f64),
    /// Out of reach of the front, on the exterior side.
    Exterior,
    /// Out of reach of the front, on the interior side.
    Interior,
}

/// The complete band an update will commit.
struct Plan {
    band: Vec<BandCell>,
    sides: Vec<(usize, bool)>,
    crossings: usize,
    swept: usize,
}

impl UpdateEngine {
    /// Create an engine, validating `config`.
    pub fn new(config: UpdateConfig) -> Result<Self, LevelSetError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    /// Apply `updates` to the zero layer of `level_set`.
    ///
    /// `updates[i]` belongs to the `i`-th node of the zero layer in list
    /// order. Fails with [`LevelSetError::SizeMismatch`] if the lengths
    /// differ, or [`LevelSetError::InvalidInput`] if an update (or the value
    /// it produces) is not finite; `level_set` is unchanged in both cases.
    pub fn update(
        &self,
        level_set: &mut SparseLevelSet,
        updates: &[f64],
    ) -> Result<UpdateStats, LevelSetError> {
        let start = Instant::now();
        let zero_layer_before = level_set.zero_layer().len();
        let _span = debug_span!("update", zero_layer = zero_layer_before).entered();

        if updates.len() != zero_layer_before {
            return Err(LevelSetError::SizeMismatch {
                expected: zero_layer_before,
                actual: updates.len(),
            });
        }
        if let Some((i, u)) = updates.iter().enumerate().find(|(_, u)| !u.is_finite()) {
            return Err(LevelSetError::invalid_input(format!(
                "update {i} is not finite ({u})"
            )));
        }

        let anchors = self.tentative_values(level_set, updates)?;
        let plan = plan(level_set, &anchors);
        let changes = level_set.commit(&plan.band, &plan.sides)?;

        let stats = UpdateStats {
            total_us: start.elapsed().as_micros() as u64,
            zero_layer_before,
            zero_layer_after: level_set.zero_layer().len(),
            created: changes.created,
            destroyed: changes.destroyed,
            relayered: changes.relayered,
            crossings_repaired: plan.crossings,
            swept_cells: plan.swept,
        };
        debug!(
            zero_layer_after = stats.zero_layer_after,
            created = stats.created,
            destroyed = stats.destroyed,
            relayered = stats.relayered,
            crossings = stats.crossings_repaired,
            swept = stats.swept_cells,
            total_us = stats.total_us,
            "level set updated"
        );
        Ok(stats)
    }

    /// Combine each update with its zero-layer node: rank → tentative
    /// value, in zero-layer order.
    fn tentative_values(
        &self,
        level_set: &SparseLevelSet,
        updates: &[f64],
    ) -> Result<IndexMap<usize, f64>, LevelSetError> {
        let mut anchors = IndexMap::with_capacity(updates.len());
        for (i, (handle, &u)) in level_set.zero_layer().iter().zip(updates).enumerate() {
            let node = level_set.node(handle)?;
            let rank = level_set.lattice().check_bounds(&node.coord)?;
            let value = match self.config.policy {
                UpdatePolicy::Replace => u,
                UpdatePolicy::Additive => node.value + self.config.time_step * u,
            };
            if !value.is_finite() {
                return Err(LevelSetError::invalid_input(format!(
                    "update {i} drives node at {:?} to {value}",
                    node.coord
                )));
            }
            anchors.insert(rank, value);
        }
        Ok(anchors)
    }
}

/// Compute the new band. Reads `level_set` only.
fn plan(level_set: &SparseLevelSet, anchors: &IndexMap<usize, f64>) -> Plan {
    let lattice = level_set.lattice();
    let seeds = || anchors.iter().map(|(&rank, &value)| (rank, value));

    let upper = sweep(lattice, seeds(), Bound::Exclusive);
    let lower = sweep(lattice, seeds().map(|(r, v)| (r, -v)), Bound::Inclusive);
    let swept = upper.len() + lower.len();

    // Anchors first, then settled cells on the side their envelope governs.
    let mut estimates: IndexMap<usize, f64> = anchors.clone();
    for (&rank, &u) in &upper {
        if !estimates.contains_key(&rank) && !level_set.was_interior(rank) {
            estimates.insert(rank, u);
        }
    }
    for (&rank, &neg) in &lower {
        if !estimates.contains_key(&rank) && level_set.was_interior(rank) {
            estimates.insert(rank, -neg);
        }
    }

    let estimate = |rank: usize| match estimates.get(&rank) {
        Some(&v) => Estimate::Value(v),
        None if level_set.was_interior(rank) => Estimate::Interior,
        None => Estimate::Exterior,
    };
    let is_interior = |rank: usize| match estimate(rank) {
        Estimate::Value(v) => v < 0.0,
        Estimate::Interior => true,
        Estimate::Exterior => false,
    };

    let mut zero: IndexMap<usize, f64> = estimates
        .iter()
        .filter(|&(_, &v)| LayerId::of_value(v).is_zero())
        .map(|(&rank, &v)| (rank, v))
        .collect();

    let mut crossings = 0;
    for (&rank, &phi) in &estimates {
        if zero.contains_key(&rank) {
            continue;
        }
        for n in lattice.neighbour_ranks(rank) {
            if zero.contains_key(&n) {
                continue;
            }
            let Estimate::Value(phi_n) = estimate(n) else {
                continue;
            };
            if (phi < 0.0) == (phi_n < 0.0) {
                continue;
            }
            let (pick, value) = crossing((rank, phi), (n, phi_n));
            trace!(rank, neighbour = n, phi, phi_n, pick, value, "crossing repaired");
            zero.insert(pick, value);
            crossings += 1;
            if pick == rank {
                break;
            }
        }
    }

    let band = grow_band(
        lattice,
        level_set.half_width(),
        zero.iter().map(|(&rank, &v)| (rank, v)),
        is_interior,
    );

    let sides = estimates
        .keys()
        .copied()
        .chain(level_set.node_ranks())
        .map(|rank| (rank, is_interior(rank)))
        .collect();

    Plan {
        band,
        sides,
        crossings,
        swept,
    }
}

/// Place a zero node on the edge between two cells on opposite sides.
///
/// The endpoint nearer the linear zero crossing wins, the interior one on a
/// tie, and takes its signed distance to the crossing.
fn crossing(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    let (outer, inner) = if a.1 >= 0.0 { (a, b) } else { (b, a) };
    let span = outer.1 - inner.1;
    if outer.1 < -inner.1 {
        (outer.0, (outer.1 / span).min(ZERO_LAYER_MAX))
    } else {
        (inner.0, (inner.1 / span).max(-0.5))
    }
}
