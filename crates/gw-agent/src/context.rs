//! Mutable world view passed to agent callbacks.

use gw_core::{EventQueue, WorldRng};
use gw_grid::{Grid, SpatialCaches};

/// The slice of world state an agent may touch during `update`/`on_event`.
///
/// Built once per phase by the orchestrator from disjoint field borrows, so
/// the entity collection itself stays borrowable for iteration while agents
/// mutate the grid, emit events, and roll the shared RNG.
pub struct AgentCtx<'a> {
    pub grid: &'a mut Grid,
    /// Pushes land in the pending buffer — visible to everyone next tick.
    pub events: &'a mut EventQueue,
    /// The world-owned RNG, for the rolls that share one reproducible
    /// stream (targeting, scoring jitter, basic-mode turns).
    pub rng: &'a mut WorldRng,
    pub caches: &'a mut SpatialCaches,
    /// Display-mode flag that doubles as the trail-maker policy switch.
    pub advanced_mode: bool,
}
