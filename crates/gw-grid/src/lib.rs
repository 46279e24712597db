//! `gw-grid` — the spatial substrate of the `rust_gridworld` engine.
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`cell`]   | `CellType`, `Cell`, the trail/signal decay rate         |
//! | [`grid`]   | `Grid` — dense row-major cell storage                   |
//! | [`noise`]  | `NoiseField` — multi-octave value noise in [0, 1]       |
//! | [`caches`] | `SpatialCaches` — derived source/sink/free-cell indexes |
//!
//! The grid is the single authority on cell state; the caches are derived,
//! rebuildable views and must never be treated as authoritative.

pub mod caches;
pub mod cell;
pub mod grid;
pub mod noise;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use caches::SpatialCaches;
pub use cell::{Cell, CellType, DECAY_RATE};
pub use grid::Grid;
pub use noise::NoiseField;
