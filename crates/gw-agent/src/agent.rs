//! The agent entity itself.

use gw_core::{AgentRng, EntityId, Position};

use crate::kind::AgentKind;

/// A simulation actor: base entity capabilities plus movement state and a
/// behaviour variant.
///
/// Agents are owned exclusively by the world's entity collection and
/// referenced everywhere else by id or position only.  Death is a flag
/// ([`kill`](Agent::kill)); actual removal is the world's end-of-tick
/// sweep, which keeps mid-tick iteration safe.
pub struct Agent {
    id: EntityId,
    position: Position,
    alive: bool,
    /// Current heading as a cardinal unit vector (or zero).  Persists
    /// between ticks — this is the "inertia" the wanderer relies on.
    pub(crate) velocity: Position,
    /// Cells per second along `velocity`.
    pub(crate) speed: f64,
    /// Sub-cell displacement carried between ticks, per axis, in (-1, 1).
    pub(crate) carry_x: f64,
    pub(crate) carry_y: f64,
    /// Private jitter stream, derived from the world seed at spawn.
    pub(crate) rng: AgentRng,
    pub(crate) kind: AgentKind,
}

impl Agent {
    /// Spawn an agent of `kind` at `position`.
    ///
    /// `global_seed` is the world seed; the agent's private RNG is derived
    /// from it and the id, never from ambient state.
    pub fn new(id: EntityId, position: Position, kind: AgentKind, global_seed: u64) -> Self {
        Self {
            id,
            position,
            alive: true,
            velocity: Position::ZERO,
            speed: kind.base_speed(),
            carry_x: 0.0,
            carry_y: 0.0,
            rng: AgentRng::new(global_seed, id),
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark dead.  The entity stays in the collection until the world's
    /// end-of-tick sweep removes it.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    #[inline]
    pub fn kind(&self) -> &AgentKind {
        &self.kind
    }

    /// One-character glyph for the rendering layer.
    #[inline]
    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
