//! `gw-agent` — simulation actors.
//!
//! An [`Agent`] couples the base entity capabilities (id, position,
//! liveness) with movement state and a closed [`AgentKind`] behaviour
//! variant.  Dispatch is a `match` over the variant — exhaustiveness is
//! checked at compile time, and "is this entity an agent" never needs a
//! runtime type test.
//!
//! Behaviour runs against an [`AgentCtx`]: disjoint mutable borrows of the
//! world's grid, event queue, RNG, and spatial caches, assembled fresh by
//! the orchestrator for each delivery/update phase.

pub mod agent;
mod behavior;
pub mod context;
pub mod kind;
mod movement;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use context::AgentCtx;
pub use kind::AgentKind;
