//! Derived spatial indexes over grid contents.
//!
//! # Staleness contract
//!
//! These lists are *views*, never authorities.  They must be rebuilt after
//! any bulk cell-type change (world generation, regeneration).  During
//! normal play the free-cell list is allowed to go stale — cell types churn
//! every tick — so every random pick self-heals: an empty list triggers one
//! rebuild before the pick, and only a still-empty list after rebuilding is
//! reported as an error.

use gw_core::{CoreResult, Position, WorldRng};

use crate::cell::CellType;
use crate::grid::Grid;

/// Cached positions of sources, sinks, and spawnable free cells.
#[derive(Default, Clone, Debug)]
pub struct SpatialCaches {
    sources: Vec<Position>,
    sinks: Vec<Position>,
    free: Vec<Position>,
}

impl SpatialCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive all three lists from the grid, in row-major order.
    ///
    /// Free cells are everything an agent may stand on or spawn into:
    /// empty cells, trails, and the three marker bands.
    pub fn rebuild(&mut self, grid: &Grid) {
        self.sources.clear();
        self.sinks.clear();
        self.free.clear();
        grid.for_each(|pos, cell| match cell.kind {
            CellType::Source => self.sources.push(pos),
            CellType::Sink => self.sinks.push(pos),
            CellType::Empty
            | CellType::Trail
            | CellType::MarkerA
            | CellType::MarkerB
            | CellType::MarkerC => self.free.push(pos),
            CellType::Wall | CellType::Signal => {}
        });
    }

    #[inline]
    pub fn sources(&self) -> &[Position] {
        &self.sources
    }

    #[inline]
    pub fn sinks(&self) -> &[Position] {
        &self.sinks
    }

    #[inline]
    pub fn free_cells(&self) -> &[Position] {
        &self.free
    }

    /// Uniform-random cached source cell, rebuilding once if the list is
    /// empty.
    pub fn random_source(&mut self, grid: &Grid, rng: &mut WorldRng) -> CoreResult<Position> {
        if self.sources.is_empty() {
            self.rebuild(grid);
        }
        rng.choose(&self.sources).copied()
    }

    /// Uniform-random cached sink cell, rebuilding once if the list is
    /// empty.
    pub fn random_sink(&mut self, grid: &Grid, rng: &mut WorldRng) -> CoreResult<Position> {
        if self.sinks.is_empty() {
            self.rebuild(grid);
        }
        rng.choose(&self.sinks).copied()
    }

    /// Uniform-random free cell, rebuilding once if the list is empty.
    ///
    /// Used for spawn placement.  The pick is not removed from the list, so
    /// two spawns may land on the same cell; the list also goes stale as
    /// cells change type underneath it, which the staleness contract allows.
    pub fn random_free(&mut self, grid: &Grid, rng: &mut WorldRng) -> CoreResult<Position> {
        if self.free.is_empty() {
            self.rebuild(grid);
        }
        rng.choose(&self.free).copied()
    }
}
