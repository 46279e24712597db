//! Per-variant update and event-handling logic.

use gw_core::{ACCUM_EPS, CARDINALS, Event, EventKind, Position};
use gw_grid::CellType;

use crate::agent::Agent;
use crate::context::AgentCtx;
use crate::kind::AgentKind;

/// Chance per tick that a wanderer picks a fresh heading.
const WANDERER_TURN_CHANCE: f64 = 0.15;
/// Chance per tick that a basic-mode trail maker picks a fresh heading.
const TRAIL_MAKER_TURN_CHANCE: f64 = 0.4;
/// Chance that a seeker retargets onto a received ping.
const SEEKER_RETARGET_CHANCE: f64 = 0.2;
/// Weight of a neighbour's terrain value in trail-maker scoring.
const TERRAIN_WEIGHT: f64 = 0.1;
/// Half-width of the uniform jitter added to each neighbour score.
const SCORE_JITTER: f64 = 0.05;

impl Agent {
    /// Advance this agent by one tick.
    ///
    /// Called once per tick for every living entity, in insertion order,
    /// after event delivery.
    pub fn update(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        match self.kind {
            AgentKind::Wanderer => self.update_wanderer(ctx, dt),
            AgentKind::Seeker { .. } => self.update_seeker(ctx, dt),
            AgentKind::TrailMaker => self.update_trail_maker(ctx, dt),
            AgentKind::SignalSource { .. } => self.update_signal_source(ctx, dt),
            AgentKind::SignalSink => {}
        }
    }

    /// React to a delivered event.
    ///
    /// Every living agent sees every active event; variants filter for the
    /// kinds they care about.
    pub fn on_event(&mut self, ctx: &mut AgentCtx<'_>, event: &Event) {
        match self.kind {
            AgentKind::Seeker { .. } => {
                if event.kind == EventKind::Ping
                    && ctx.rng.gen_bool(SEEKER_RETARGET_CHANCE)
                {
                    self.kind = AgentKind::Seeker { target: Some(event.position) };
                }
            }
            // Signal sinks acknowledge Arrive events but hold no state yet
            // (scoring/consumption hooks land here); everyone else ignores
            // events entirely.
            _ => {}
        }
    }

    // ── Variant updates ───────────────────────────────────────────────────

    fn update_wanderer(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        if self.rng.gen_bool(WANDERER_TURN_CHANCE) {
            self.velocity = CARDINALS[self.rng.gen_range(0..CARDINALS.len())];
        }
        self.step_position(ctx, dt);
    }

    fn update_seeker(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        let AgentKind::Seeker { target } = self.kind else { return };

        let target = match target {
            Some(t) => t,
            None => {
                // A world with no sinks after a cache rebuild is a cache
                // invariant violation; the seeker idles this tick rather
                // than aborting the pipeline.
                let Ok(t) = ctx.caches.random_sink(ctx.grid, ctx.rng) else {
                    return;
                };
                self.kind = AgentKind::Seeker { target: Some(t) };
                t
            }
        };

        let diff = target - self.position();
        if diff.x == 0 && diff.y == 0 {
            self.kind = AgentKind::Seeker { target: None };
            ctx.events.push(Event::arrive(self.id(), self.position()));
            return;
        }

        // Greedy, one axis at a time: strictly larger |x| offset moves on
        // x, everything else (ties included) moves on y.
        self.velocity = if diff.x.abs() > diff.y.abs() {
            Position::new(diff.x.signum(), 0)
        } else {
            Position::new(0, diff.y.signum())
        };
        self.step_position(ctx, dt);
    }

    fn update_trail_maker(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        if ctx.advanced_mode {
            let mut best_score = f64::NEG_INFINITY;
            let mut best_dir = Position::ZERO;

            // Evaluation order over CARDINALS is the tie-break: with a
            // strict `>`, the earliest of equally scored directions wins.
            for dir in CARDINALS {
                let neighbor = self.position() + dir;
                let Some(cell) = ctx.grid.cell(neighbor) else {
                    continue; // off-grid neighbours are not scored
                };
                let mut score = match cell.kind {
                    CellType::MarkerA => 0.5,
                    CellType::MarkerB => 1.0,
                    CellType::MarkerC => 1.5,
                    CellType::Trail => -0.2,
                    CellType::Signal => 0.3,
                    _ => 0.0,
                };
                score += cell.terrain * TERRAIN_WEIGHT;
                score += ctx.rng.gen_range(-SCORE_JITTER..SCORE_JITTER);

                if score > best_score {
                    best_score = score;
                    best_dir = dir;
                }
            }
            self.velocity = best_dir;
        } else if ctx.rng.gen_bool(TRAIL_MAKER_TURN_CHANCE) {
            self.velocity = CARDINALS[ctx.rng.gen_range(0..CARDINALS.len())];
        }
        self.step_position(ctx, dt);
    }

    fn update_signal_source(&mut self, ctx: &mut AgentCtx<'_>, dt: f64) {
        let AgentKind::SignalSource { cooldown, mut timer } = self.kind else {
            return;
        };
        timer += dt;
        // Tolerant compare: N timesteps summing a hair under the cooldown
        // must still fire on the boundary tick.
        if timer >= cooldown - ACCUM_EPS {
            timer -= cooldown;
            ctx.grid.mark_signal(self.position());
            ctx.events.push(Event::ping(self.id(), self.position()));
        }
        self.kind = AgentKind::SignalSource { cooldown, timer };
    }
}
