//! Per-update statistics.
//!
//! [`UpdateStats`] captures what a single
//! [`UpdateEngine::update`](crate::UpdateEngine::update) call did to the
//! band, plus how long it took.

/// Counts and timing collected during a single update.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Wall-clock time for the entire update, in microseconds.
    pub total_us: u64,
    /// Zero-layer node count before the update.
    pub zero_layer_before: usize,
    /// Zero-layer node count after the update.
    pub zero_layer_after: usize,
    /// Background cells promoted to nodes.
    pub created: usize,
    /// Nodes demoted to background.
    pub destroyed: usize,
    /// Surviving nodes that moved to a different layer.
    pub relayered: usize,
    /// Sign changes between neighbours that had no zero-layer node between
    /// them and were closed by interpolation.
    pub crossings_repaired: usize,
    /// Cells settled by the front-estimation sweeps.
    pub swept_cells: usize,
}

impl UpdateStats {
    /// Whether the update left the band membership untouched.
    pub fn band_unchanged(&self) -> bool {
        self.created == 0 && self.destroyed == 0 && self.relayered == 0
    }
}
