//! Shared step-resolution primitive for mobile agents.

use gw_core::Position;

use crate::agent::Agent;
use crate::context::AgentCtx;

/// Unit step for one axis of carried displacement: the half-cell threshold
/// decides when an accumulated fraction rounds into a move.
#[inline]
fn axis_step(carry: f64) -> i32 {
    if carry >= 0.5 {
        1
    } else if carry <= -0.5 {
        -1
    } else {
        0
    }
}

impl Agent {
    /// Resolve one tick of movement along `velocity`.
    ///
    /// The displacement `velocity × dt × speed` is added to the agent's
    /// per-axis carry, then resolved as unit sub-steps while either axis
    /// has at least half a cell accumulated.  A displacement of a full cell
    /// or more therefore subdivides into sequential unit sub-steps; a
    /// sub-cell displacement lands once it accumulates past the half-cell
    /// threshold, so average speed is preserved exactly.
    ///
    /// A sub-step that would land on a wall or off the grid is rejected —
    /// the agent simply does not advance, it does not error — but still
    /// consumes its cell of displacement, so a boxed-in agent cannot bank
    /// an unbounded backlog against the wall.
    ///
    /// After resolution the destination cell is trail-marked (subject to
    /// the grid's cell-type rules).
    pub(crate) fn step_position(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        self.carry_x += f64::from(self.velocity.x) * dt * self.speed;
        self.carry_y += f64::from(self.velocity.y) * dt * self.speed;

        loop {
            let step = Position::new(axis_step(self.carry_x), axis_step(self.carry_y));
            if step == Position::ZERO {
                break;
            }
            let candidate = self.position() + step;
            if ctx.grid.is_passable(candidate) {
                self.set_position(candidate);
            }
            self.carry_x -= f64::from(step.x);
            self.carry_y -= f64::from(step.y);
        }

        ctx.grid.mark_trail(self.position());
    }
}
