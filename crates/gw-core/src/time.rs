//! Fixed-timestep simulation clock.
//!
//! # Design
//!
//! Real elapsed time is fed into an accumulator; whole timesteps are then
//! consumed one tick at a time.  This decouples the simulation rate from the
//! caller's invocation rate: as long as the cumulative real time matches,
//! the same number of ticks runs in the same order, regardless of how often
//! the driver polls.
//!
//! The tick counter is a monotonically increasing `u64`; it survives world
//! regeneration and only resets with the clock itself.

/// Tolerance for accumulated-float boundary comparisons.
///
/// Summing ten 0.1 timesteps in f64 lands a hair under 1.0; comparing
/// against `threshold - ACCUM_EPS` keeps boundary events on the exact tick.
pub const ACCUM_EPS: f64 = 1e-9;

/// Fixed-timestep accumulator plus tick counter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepClock {
    timestep: f64,
    accumulator: f64,
    tick: u64,
}

impl StepClock {
    /// Create a clock with the given timestep.
    ///
    /// Fails with [`CoreError::Config`](crate::CoreError::Config) if the
    /// timestep is not strictly positive (a zero timestep would spin the
    /// consume loop forever).
    pub fn new(timestep: f64) -> crate::CoreResult<Self> {
        if !(timestep > 0.0) {
            return Err(crate::CoreError::Config(format!(
                "timestep must be positive, got {timestep}"
            )));
        }
        Ok(Self { timestep, accumulator: 0.0, tick: 0 })
    }

    /// Add `elapsed` real seconds to the accumulator.
    #[inline]
    pub fn accumulate(&mut self, elapsed: f64) {
        self.accumulator += elapsed;
    }

    /// Consume one whole timestep if available, advancing the tick counter.
    ///
    /// Call in a loop: `while clock.try_step() { world.tick_once(); }`.
    /// The comparison is [`ACCUM_EPS`]-tolerant, so elapsed time delivered
    /// in fragments that sum a hair under a timestep still yields the tick.
    #[inline]
    pub fn try_step(&mut self) -> bool {
        if self.accumulator >= self.timestep - ACCUM_EPS {
            self.accumulator -= self.timestep;
            self.tick += 1;
            true
        } else {
            false
        }
    }

    /// Advance the tick counter without touching the accumulator.
    ///
    /// Used by the step-N-ticks control, which runs ticks unconditionally.
    #[inline]
    pub fn force_step(&mut self) {
        self.tick += 1;
    }

    /// The current tick count.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seconds of simulated time per tick.
    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }
}
