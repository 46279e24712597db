//! The `World` struct and its tick loop.

use gw_agent::{Agent, AgentCtx, AgentKind};
use gw_core::{ACCUM_EPS, CoreError, EntityId, Event, EventQueue, Position, StepClock, WorldRng};
use gw_grid::{CellType, DECAY_RATE, Grid, NoiseField, SpatialCaches};
use gw_path::{PathError, find_path};

use crate::worldgen::{self, NOISE_OCTAVES, NOISE_PERSISTENCE};
use crate::{SimResult, WorldConfig, WorldObserver};

/// Simulated seconds consumed per tick.
pub const DEFAULT_TIMESTEP: f64 = 0.1;

/// Simulation run state.  Pausing suspends the pipeline entirely — no time
/// accumulation, no entity updates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    Running,
    Paused,
}

/// Display-mode flags for the rendering layer.
///
/// Only `advanced` feeds back into the simulation (it selects the
/// trail-maker movement policy); the rest merely change what the excluded
/// renderer draws.
#[derive(Copy, Clone, Debug)]
pub struct DisplayFlags {
    pub overlay: bool,
    pub noise: bool,
    pub ids: bool,
    pub advanced: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self { overlay: true, noise: false, ids: false, advanced: true }
    }
}

/// Read-only view of one living entity, for the query surface.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Position,
    pub glyph: char,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The orchestrator: owns the grid, noise field, RNG, event queue, entity
/// collection, and derived caches, and drives the per-tick pipeline.
///
/// A `World` is the sole unit of mutable simulation state and is driven by
/// one external loop at a time; everything inside runs to completion
/// synchronously.
pub struct World {
    config: WorldConfig,
    pub(crate) grid: Grid,
    noise: NoiseField,
    rng: WorldRng,
    events: EventQueue,
    /// Insertion-ordered entity arena.  Dead entries persist until the
    /// end-of-tick sweep so mid-tick iteration stays valid.
    entities: Vec<Agent>,
    caches: SpatialCaches,
    clock: StepClock,
    /// Next id to allocate; monotonically increasing, never reused.
    next_id: u32,
    state: RunState,
    quit: bool,
    redraw_pending: bool,
    flags: DisplayFlags,
    /// Last pathfinding result kept for display; never read by agents.
    shown_path: Vec<Position>,
}

impl World {
    /// Build and populate a world from `config`.
    pub fn new(config: WorldConfig) -> SimResult<Self> {
        config.validate()?;
        let mut world = Self {
            grid: Grid::new(config.width, config.height)?,
            noise: NoiseField::new(config.width, config.height),
            rng: WorldRng::new(config.seed),
            events: EventQueue::new(),
            entities: Vec::with_capacity(config.population()),
            caches: SpatialCaches::new(),
            clock: StepClock::new(DEFAULT_TIMESTEP)?,
            next_id: 1,
            state: RunState::Running,
            quit: false,
            redraw_pending: true,
            flags: DisplayFlags::default(),
            shown_path: Vec::new(),
            config,
        };
        world.generate()?;
        Ok(world)
    }

    // ── Generation ────────────────────────────────────────────────────────

    /// Noise → layout → population → caches, shared by init and regen.
    fn generate(&mut self) -> SimResult<()> {
        self.noise.generate(&mut self.rng, NOISE_OCTAVES, NOISE_PERSISTENCE);
        worldgen::apply_layout(&mut self.grid, &self.noise);
        // The layout replaced cell types in bulk; rebuild before spawn
        // placement reads the free list, and again after spawning stamps
        // the Source/Sink cells.
        self.caches.rebuild(&self.grid);
        self.spawn_population()?;
        self.caches.rebuild(&self.grid);
        Ok(())
    }

    /// Throw the current terrain and population away and roll new ones.
    ///
    /// The world RNG carries on from its current state — regenerating is
    /// part of the run, not a reseed — and the tick counter keeps counting.
    pub fn regenerate(&mut self) -> SimResult<()> {
        self.shown_path.clear();
        self.entities.clear();
        self.grid.fill(CellType::Empty);
        self.generate()?;
        self.redraw_pending = true;
        Ok(())
    }

    fn spawn_population(&mut self) -> SimResult<()> {
        let counts = [
            (self.config.wanderers, AgentKind::Wanderer),
            (self.config.seekers, AgentKind::seeker()),
            (self.config.trail_makers, AgentKind::TrailMaker),
            (self.config.signal_sources, AgentKind::signal_source()),
            (self.config.signal_sinks, AgentKind::SignalSink),
        ];
        for (count, kind) in counts {
            for _ in 0..count {
                let pos = self.caches.random_free(&self.grid, &mut self.rng)?;
                self.insert_agent(kind, pos);
            }
        }
        Ok(())
    }

    /// Allocate an id, stamp Source/Sink cells, and store the agent.
    fn insert_agent(&mut self, kind: AgentKind, position: Position) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let stamp = match kind {
            AgentKind::SignalSource { .. } => Some(CellType::Source),
            AgentKind::SignalSink => Some(CellType::Sink),
            _ => None,
        };
        if let (Some(stamp), Some(cell)) = (stamp, self.grid.cell_mut(position)) {
            cell.kind = stamp;
        }

        self.entities.push(Agent::new(id, position, kind, self.config.seed));
        id
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Spawn a single agent mid-run.
    ///
    /// Source/sink spawns stamp their cell type, so the caches are rebuilt
    /// to keep seeker targeting coherent.
    pub fn spawn(&mut self, kind: AgentKind, position: Position) -> SimResult<EntityId> {
        if !self.grid.in_bounds(position) {
            return Err(CoreError::OutOfRange(position).into());
        }
        let id = self.insert_agent(kind, position);
        self.caches.rebuild(&self.grid);
        self.redraw_pending = true;
        Ok(id)
    }

    /// Flag an entity dead.  Removal happens at the end-of-tick sweep;
    /// until then the entity stays in place (and stops acting only once
    /// the liveness filters skip it).  Returns `false` for unknown ids.
    pub fn kill(&mut self, id: EntityId) -> bool {
        match self.entities.iter_mut().find(|agent| agent.id() == id) {
            Some(agent) => {
                agent.kill();
                true
            }
            None => false,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Feed `elapsed` real seconds to the fixed-timestep accumulator and
    /// run every whole tick it covers.  No-op while paused.
    pub fn step<O: WorldObserver>(&mut self, elapsed: f64, observer: &mut O) {
        if self.state == RunState::Paused {
            return;
        }
        self.clock.accumulate(elapsed);
        while self.clock.try_step() {
            self.run_tick(observer);
        }
    }

    /// Run exactly `n` ticks, ignoring the accumulator and the pause state.
    ///
    /// This is the deterministic single-step control: the driving REPL
    /// pauses the world and then steps it tick by tick.
    pub fn step_ticks<O: WorldObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.clock.force_step();
            self.run_tick(observer);
        }
    }

    /// One full pass of the tick pipeline.  The tick counter has already
    /// been advanced by the clock.
    fn run_tick<O: WorldObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.tick();
        observer.on_tick_start(tick);

        // Promote last tick's events; snapshot them so delivery can hand
        // agents a mutable queue for the events they produce in response.
        self.events.flip();
        let active: Vec<Event> = self.events.active_events().to_vec();

        let dt = self.clock.timestep();
        let advanced_mode = self.flags.advanced;

        // Explicit field borrows so the borrow checker sees disjoint access
        // between the context and the entity collection.
        let mut ctx = AgentCtx {
            grid: &mut self.grid,
            events: &mut self.events,
            rng: &mut self.rng,
            caches: &mut self.caches,
            advanced_mode,
        };

        // Delivery: production order × entity insertion order.
        for event in &active {
            for agent in self.entities.iter_mut().filter(|a| a.is_alive()) {
                agent.on_event(&mut ctx, event);
            }
        }

        // Updates, same entity order as delivery.
        for agent in self.entities.iter_mut().filter(|a| a.is_alive()) {
            agent.update(&mut ctx, dt);
        }
        drop(ctx);

        // Sweep, then passive decay.
        self.entities.retain(Agent::is_alive);
        self.decay_transients();

        self.redraw_pending = true;
        observer.on_tick_end(tick, active.len(), self.entities.len());
    }

    /// Evaporate Trail/Signal cells.
    fn decay_transients(&mut self) {
        self.grid.for_each_mut(|_, cell| {
            if matches!(cell.kind, CellType::Trail | CellType::Signal) {
                cell.decay += DECAY_RATE;
                if cell.decay >= 1.0 - ACCUM_EPS {
                    cell.kind = CellType::Empty;
                    cell.decay = 0.0;
                }
            }
        });
    }

    // ── Run-state controls ────────────────────────────────────────────────

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    /// Pause and latch the shutdown flag for the driving loop to observe.
    pub fn quit(&mut self) {
        self.state = RunState::Paused;
        self.quit = true;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[inline]
    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    // ── Display-mode controls ─────────────────────────────────────────────

    pub fn toggle_overlay(&mut self) {
        self.flags.overlay = !self.flags.overlay;
        self.redraw_pending = true;
    }

    pub fn toggle_noise_view(&mut self) {
        self.flags.noise = !self.flags.noise;
        self.redraw_pending = true;
    }

    pub fn toggle_ids(&mut self) {
        self.flags.ids = !self.flags.ids;
        self.redraw_pending = true;
    }

    /// Also switches the trail makers between scoring and random-walk
    /// policies from their next update on.
    pub fn toggle_advanced(&mut self) {
        self.flags.advanced = !self.flags.advanced;
        self.redraw_pending = true;
    }

    #[inline]
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    // ── Displayed path ────────────────────────────────────────────────────

    /// Run A* between a random cached source and a random cached sink and
    /// keep the result for display.
    ///
    /// `Ok(None)` means the endpoints exist but no route does — a normal
    /// negative result.  Missing sources/sinks (after a cache rebuild) or
    /// degenerate endpoints surface as errors.  Simulation state other than
    /// the displayed path and the RNG draw is untouched.
    pub fn request_path(&mut self) -> SimResult<Option<&[Position]>> {
        let source = self.caches.random_source(&self.grid, &mut self.rng)?;
        let sink = self.caches.random_sink(&self.grid, &mut self.rng)?;
        match find_path(&self.grid, source, sink) {
            Ok(path) => {
                self.shown_path = path;
                self.redraw_pending = true;
                Ok(Some(&self.shown_path))
            }
            Err(PathError::NoPath { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn clear_path(&mut self) {
        self.shown_path.clear();
        self.redraw_pending = true;
    }

    #[inline]
    pub fn shown_path(&self) -> &[Position] {
        &self.shown_path
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    #[inline]
    pub fn timestep(&self) -> f64 {
        self.clock.timestep()
    }

    /// Events currently in their delivery window.
    #[inline]
    pub fn active_events(&self) -> &[Event] {
        self.events.active_events()
    }

    /// Living entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        self.entities.iter().filter(|a| a.is_alive()).map(|a| EntityView {
            id: a.id(),
            position: a.position(),
            glyph: a.glyph(),
        })
    }

    /// Number of living entities.
    pub fn entity_count(&self) -> usize {
        self.entities.iter().filter(|a| a.is_alive()).count()
    }

    /// Consume the redraw flag; `true` means the frame is dirty.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_pending, false)
    }

    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }
}
