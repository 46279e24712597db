//! `gw-sim` — the `World` orchestrator and its tick loop.
//!
//! # Tick pipeline
//!
//! ```text
//! while accumulator >= timestep:
//!   ① Count    — advance the tick counter.
//!   ② Flip     — promote last tick's pending events for delivery.
//!   ③ Deliver  — every active event to every living agent, in
//!                production order × insertion order.
//!   ④ Update   — every living agent, in insertion order, dt = timestep.
//!   ⑤ Sweep    — compact away entities flagged dead.
//!   ⑥ Decay    — evaporate Trail/Signal cells.
//!   ⑦ Redraw   — mark the frame dirty for the rendering layer.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_sim::{NoopObserver, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default())?;
//! world.step(elapsed_seconds, &mut NoopObserver);
//! for view in world.entities() {
//!     println!("{} {} {}", view.id, view.glyph, view.position);
//! }
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod world;
mod worldgen;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use world::{DEFAULT_TIMESTEP, DisplayFlags, EntityView, RunState, World};
