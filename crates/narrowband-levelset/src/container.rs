//! The sparse level-set container.

use indexmap::IndexMap;
use narrowband_arena::{LayerList, Node, NodeArena, NodeHandle};
use narrowband_core::{DenseField, LayerId};
use narrowband_space::{Lattice, RegionSpec};
use tracing::trace;

use crate::band::BandCell;
use crate::config::LevelSetConfig;
use crate::error::{LevelSetError, OutOfRange};
use crate::side::SideMap;

/// Membership changes made by one commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BandChanges {
    pub(crate) created: usize,
    pub(crate) destroyed: usize,
    pub(crate) relayered: usize,
}

/// A narrow-band level set on an N-dimensional lattice.
///
/// Owns every node (in a [`NodeArena`]), one [`LayerList`] per layer in
/// `[-half_width, half_width]`, and a side bit per lattice cell. Cells with
/// no node are background and read as `±(half_width + 1)`.
///
/// Built by [`BinaryMaskAdaptor`](crate::BinaryMaskAdaptor), mutated only
/// by [`UpdateEngine`](crate::UpdateEngine). Between those calls every node
/// sits in exactly one list: the one for its layer.
#[derive(Clone, Debug)]
pub struct SparseLevelSet {
    lattice: Lattice,
    config: LevelSetConfig,
    arena: NodeArena,
    /// lattice rank → node
    index: IndexMap<usize, NodeHandle>,
    /// `layers[k + half_width]` holds layer `k`.
    layers: Vec<LayerList>,
    sides: SideMap,
}

impl SparseLevelSet {
    /// An empty band over `lattice` with the given background sides.
    pub(crate) fn with_sides(lattice: Lattice, config: LevelSetConfig, sides: SideMap) -> Self {
        debug_assert_eq!(sides.len(), lattice.cell_count());
        let h = config.half_width as i32;
        let layers = (-h..=h).map(|k| LayerList::new(LayerId(k))).collect();
        Self {
            lattice,
            config,
            arena: NodeArena::new(),
            index: IndexMap::new(),
            layers,
            sides,
        }
    }

    // ── Queries ──────────────────────────────────────────────────

    /// The active list for `layer`.
    ///
    /// Fails with [`OutOfRange::Layer`] if `|layer| > half_width`.
    pub fn layer(&self, layer: LayerId) -> Result<&LayerList, LevelSetError> {
        Ok(&self.layers[self.list_index(layer)?])
    }

    /// The zero level set's active list.
    pub fn zero_layer(&self) -> &LayerList {
        &self.layers[self.config.half_width as usize]
    }

    /// Number of nodes in `layer`.
    pub fn layer_len(&self, layer: LayerId) -> Result<usize, LevelSetError> {
        self.layer(layer).map(LayerList::len)
    }

    /// Nodes of `layer`, in list order.
    pub fn layer_nodes(
        &self,
        layer: LayerId,
    ) -> Result<impl Iterator<Item = &Node> + '_, LevelSetError> {
        let list = self.layer(layer)?;
        Ok(list.iter().filter_map(|h| self.arena.get(h).ok()))
    }

    /// The node behind `handle`.
    pub fn node(&self, handle: NodeHandle) -> Result<&Node, LevelSetError> {
        Ok(self.arena.get(handle)?)
    }

    /// The node at `coord`, or `None` if the cell is background.
    ///
    /// Fails with [`OutOfRange::Coord`] if `coord` is not on the lattice.
    pub fn node_at(&self, coord: &[i32]) -> Result<Option<&Node>, LevelSetError> {
        let rank = self.lattice.check_bounds(coord)?;
        Ok(self.node_at_rank(rank))
    }

    /// Level-set value at `coord`: the node's value, or the signed
    /// background constant.
    pub fn value_at(&self, coord: &[i32]) -> Result<f64, LevelSetError> {
        let rank = self.lattice.check_bounds(coord)?;
        Ok(self.value_at_rank(rank))
    }

    /// Whether `coord` lies on the interior (negative) side.
    pub fn is_interior(&self, coord: &[i32]) -> Result<bool, LevelSetError> {
        let rank = self.lattice.check_bounds(coord)?;
        Ok(self.value_at_rank(rank) < 0.0)
    }

    /// All nodes, layer by layer from `-half_width` up, in list order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.layers
            .iter()
            .flat_map(|list| list.iter())
            .filter_map(|h| self.arena.get(h).ok())
    }

    /// Total number of nodes in the band.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Band half-width.
    pub fn half_width(&self) -> u32 {
        self.config.half_width
    }

    /// Magnitude of the background value.
    pub fn background_value(&self) -> f64 {
        self.config.background_value()
    }

    /// The lattice the level set lives on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The configuration the level set was built with.
    pub fn config(&self) -> &LevelSetConfig {
        &self.config
    }

    /// Materialize `region` as a dense field.
    ///
    /// Each cell reads its node's value, or `-(H+1)` / `+(H+1)` for interior
    /// and exterior background. Values are row-major over the region's
    /// shape; a [`RegionSpec::Coords`] region is flattened to one axis.
    pub fn rasterize(&self, region: &RegionSpec) -> Result<DenseField, LevelSetError> {
        let plan = self.lattice.compile_region(region)?;
        let values = plan
            .ranks()
            .iter()
            .map(|&rank| self.value_at_rank(rank))
            .collect();
        Ok(DenseField::new(plan.shape().to_vec(), values)?)
    }

    // ── Rank-level access (crate-internal) ───────────────────────

    pub(crate) fn node_at_rank(&self, rank: usize) -> Option<&Node> {
        self.index
            .get(&rank)
            .and_then(|&h| self.arena.get(h).ok())
    }

    pub(crate) fn value_at_rank(&self, rank: usize) -> f64 {
        match self.node_at_rank(rank) {
            Some(node) => node.value,
            None if self.sides.is_interior(rank) => -self.background_value(),
            None => self.background_value(),
        }
    }

    /// Which side a cell was on before any pending change: the sign of its
    /// layer for nodes, the side bit for background.
    pub(crate) fn was_interior(&self, rank: usize) -> bool {
        match self.node_at_rank(rank) {
            Some(node) => node.layer.is_interior(),
            None => self.sides.is_interior(rank),
        }
    }

    pub(crate) fn node_ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.index.keys().copied()
    }

    // ── Commit ───────────────────────────────────────────────────

    /// Replace the band with `band` and write `sides` into the side map.
    ///
    /// Nodes that keep their layer keep their list slot; nodes that change
    /// layer, and new nodes, are appended in `band` order. Nodes absent from
    /// `band` are destroyed. Lists are compacted afterwards.
    pub(crate) fn commit(
        &mut self,
        band: &[BandCell],
        sides: &[(usize, bool)],
    ) -> Result<BandChanges, LevelSetError> {
        let mut changes = BandChanges::default();
        let incoming: IndexMap<usize, usize> = band
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.rank, i))
            .collect();

        let doomed: Vec<usize> = self
            .index
            .keys()
            .copied()
            .filter(|rank| !incoming.contains_key(rank))
            .collect();
        for rank in doomed {
            self.destroy(rank)?;
            changes.destroyed += 1;
        }

        for cell in band {
            match self.index.get(&cell.rank).copied() {
                Some(handle) => {
                    if self.relocate(handle, cell)? {
                        changes.relayered += 1;
                    }
                }
                None => {
                    let _created = self.create(cell)?;
                    changes.created += 1;
                }
            }
        }

        for &(rank, interior) in sides {
            self.sides.set(rank, interior);
        }
        self.compact_lists();
        Ok(changes)
    }

    fn create(&mut self, cell: &BandCell) -> Result<NodeHandle, LevelSetError> {
        let coord = self.lattice.coord_of(cell.rank).ok_or_else(|| {
            LevelSetError::invalid_input(format!("rank {} is off the lattice", cell.rank))
        })?;
        let li = self.list_index(cell.layer)?;
        let handle = self.arena.insert(Node {
            coord,
            value: cell.value,
            layer: cell.layer,
            slot: self.layers[li].next_slot(),
        });
        self.layers[li].push(handle);
        self.index.insert(cell.rank, handle);
        Ok(handle)
    }

    fn destroy(&mut self, rank: usize) -> Result<(), LevelSetError> {
        let Some(handle) = self.index.swap_remove(&rank) else {
            return Ok(());
        };
        let node = self.arena.remove(handle)?;
        let li = self.list_index(node.layer)?;
        let _vacated = self.layers[li].remove(node.slot)?;
        trace!(rank, layer = node.layer.0, value = node.value, "node demoted");
        Ok(())
    }

    /// Move an existing node to `cell`'s value and layer. Returns whether
    /// the layer changed.
    fn relocate(&mut self, handle: NodeHandle, cell: &BandCell) -> Result<bool, LevelSetError> {
        let node = self.arena.get_mut(handle)?;
        node.value = cell.value;
        if node.layer == cell.layer {
            return Ok(false);
        }
        let (old_layer, old_slot) = (node.layer, node.slot);
        let from = self.list_index(old_layer)?;
        let to = self.list_index(cell.layer)?;
        let _moved = self.layers[from].remove(old_slot)?;
        let slot = self.layers[to].push(handle);
        let node = self.arena.get_mut(handle)?;
        node.layer = cell.layer;
        node.slot = slot;
        Ok(true)
    }

    fn compact_lists(&mut self) {
        let arena = &mut self.arena;
        for list in &mut self.layers {
            list.compact(|handle, slot| {
                if let Ok(node) = arena.get_mut(handle) {
                    node.slot = slot;
                }
            });
        }
    }

    fn list_index(&self, layer: LayerId) -> Result<usize, OutOfRange> {
        let h = self.config.half_width;
        if layer.distance() > h {
            return Err(OutOfRange::Layer {
                layer,
                half_width: h,
            });
        }
        Ok((layer.0 + h as i32) as usize)
    }
}
