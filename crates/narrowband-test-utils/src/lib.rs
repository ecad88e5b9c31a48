//! Test utilities for narrowband development.
//!
//! Provides mask fixtures ([`fixtures`]), a checker for the structural
//! invariants every level set must satisfy between operations
//! ([`assert_band_invariants`]), and a full-state snapshot
//! ([`capture_state`]) for before/after comparisons.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use narrowband_core::{Coord, DenseField, LayerId};
use narrowband_levelset::SparseLevelSet;
use narrowband_space::RegionSpec;

/// Everything observable about a level set: per-layer `(coord, value)`
/// lists in list order, plus the full rasterized field.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSetState {
    pub layers: Vec<Vec<(Coord, f64)>>,
    pub field: DenseField,
}

pub fn capture_state(ls: &SparseLevelSet) -> LevelSetState {
    let h = ls.half_width() as i32;
    let layers = (-h..=h)
        .map(|k| {
            ls.layer_nodes(LayerId(k))
                .expect("layer within half-width")
                .map(|n| (n.coord.clone(), n.value))
                .collect()
        })
        .collect();
    LevelSetState {
        layers,
        field: ls
            .rasterize(&RegionSpec::All)
            .expect("full-lattice rasterize"),
    }
}

/// Coordinates of the nodes in `layer`, in list order.
pub fn layer_coords(ls: &SparseLevelSet, layer: i32) -> Vec<Vec<i32>> {
    ls.layer_nodes(LayerId(layer))
        .expect("layer within half-width")
        .map(|n| n.coord.to_vec())
        .collect()
}

/// Panics unless `ls` satisfies every band invariant:
///
/// - each node sits in the list of its layer, at the slot it records, and
///   the arena holds nothing else;
/// - each node's layer is the discretization of its value;
/// - a node in layer `k != 0` has a face neighbour in layer `k - sign(k)`;
/// - every face neighbour of a node with `|k| < H` is a node;
/// - no exterior node touches an interior node;
/// - background cells next to the band are on the same side as the
///   neighbouring node, and adjacent background cells share a side.
pub fn assert_band_invariants(ls: &SparseLevelSet) {
    let h = ls.half_width() as i32;
    let lattice = ls.lattice();
    let mut listed = 0usize;

    for k in -h..=h {
        let list = ls.layer(LayerId(k)).expect("layer within half-width");
        assert_eq!(list.layer(), LayerId(k));
        for (slot, handle) in list.iter_slots() {
            listed += 1;
            let node = ls.node(handle).expect("listed handle is live");
            assert_eq!(node.layer, LayerId(k), "node {:?} listed under {k}", node.coord);
            assert_eq!(node.slot, slot, "node {:?} records wrong slot", node.coord);
            assert_eq!(
                LayerId::of_value(node.value),
                node.layer,
                "node {:?} value {} disagrees with layer {}",
                node.coord,
                node.value,
                node.layer
            );
            let at = ls
                .node_at(&node.coord)
                .expect("node coord on lattice")
                .expect("node reachable by coord");
            assert_eq!(at, node);

            let neighbours: Vec<Option<f64>> = lattice
                .neighbours(&node.coord)
                .iter()
                .map(|c| ls.node_at(c).expect("neighbour on lattice").map(|n| n.value))
                .collect();
            let neighbour_layers: Vec<Option<LayerId>> = neighbours
                .iter()
                .map(|v| v.map(LayerId::of_value))
                .collect();

            if k != 0 {
                let closer = LayerId(k).toward_zero();
                assert!(
                    neighbour_layers.contains(&Some(closer)),
                    "node {:?} in layer {k} has no neighbour in layer {closer}",
                    node.coord
                );
            }
            if k.abs() < h {
                assert!(
                    neighbour_layers.iter().all(Option::is_some),
                    "node {:?} in layer {k} borders background",
                    node.coord
                );
            }
            for (c, layer) in lattice.neighbours(&node.coord).iter().zip(&neighbour_layers) {
                match layer {
                    Some(l) => assert!(
                        !(k > 0 && l.0 < 0 || k < 0 && l.0 > 0),
                        "layer {k} node {:?} touches layer {l} node {c:?}",
                        node.coord
                    ),
                    None if k != 0 => {
                        let interior = ls.is_interior(c).expect("neighbour on lattice");
                        assert_eq!(
                            interior,
                            k < 0,
                            "background {c:?} beside layer {k} node {:?} is on the wrong side",
                            node.coord
                        );
                    }
                    None => {}
                }
            }
        }
    }
    assert_eq!(listed, ls.node_count(), "arena holds unlisted nodes");

    for coord in lattice.canonical_ordering() {
        if ls.node_at(&coord).expect("on lattice").is_some() {
            continue;
        }
        let interior = ls.is_interior(&coord).expect("on lattice");
        for n in lattice.neighbours(&coord) {
            if ls.node_at(&n).expect("on lattice").is_none() {
                assert_eq!(
                    ls.is_interior(&n).expect("on lattice"),
                    interior,
                    "background cells {coord:?} and {n:?} disagree on side"
                );
            }
        }
    }
}

/// Panics unless the level set's values are exactly `expected`, row-major
/// over the whole lattice.
pub fn assert_field(ls: &SparseLevelSet, expected: &[f64]) {
    let field = ls
        .rasterize(&RegionSpec::All)
        .expect("full-lattice rasterize");
    assert_eq!(field.as_slice(), expected, "\nfield rows: {:?}", field.rows().collect::<Vec<_>>());
}
