//! `gw-core` — foundational types for the `rust_gridworld` engine.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `EntityId`                                        |
//! | [`pos`]   | `Position`, the cardinal direction table          |
//! | [`time`]  | `StepClock` (fixed-timestep accumulator)          |
//! | [`rng`]   | `WorldRng` (global), `AgentRng` (per-agent)       |
//! | [`event`] | `Event`, `EventKind`, `EventQueue`                |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod event;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use event::{Event, EventKind, EventQueue};
pub use ids::EntityId;
pub use pos::{CARDINALS, Position};
pub use rng::{AgentRng, WorldRng};
pub use time::{ACCUM_EPS, StepClock};
