//! Deterministic world-level and per-agent RNG wrappers.
//!
//! # Determinism strategy
//!
//! All simulation randomness routes through one [`WorldRng`] per world,
//! seeded from the run's configuration.  Agents that need private jitter get
//! an [`AgentRng`] seeded by:
//!
//!   seed = global_seed XOR (entity_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive entity ids uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state with each other or with the world stream.
//! - Spawning additional agents does not disturb the streams of existing
//!   ones — runs are reproducible even as populations grow.
//! - Nothing is ever seeded from wall-clock time.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult, EntityId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// The world-owned deterministic RNG.
///
/// Used for terrain generation, spawn placement, and every behavioural roll
/// that belongs to the shared reproducible stream.  Single-threaded by
/// construction: the world owns exactly one and threads it through the tick
/// pipeline explicitly.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    ///
    /// Use an inclusive range (`a..=b`) for integer draws, a half-open one
    /// (`a..b`) for reals.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a uniformly random element of `slice`.
    ///
    /// Fails with [`CoreError::EmptyChoice`] on an empty slice — an empty
    /// input here almost always means a stale spatial cache, and callers are
    /// expected to surface it rather than invent a value.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> CoreResult<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0).ok_or(CoreError::EmptyChoice)
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG for agent-local jitter.
///
/// Created once at spawn from the world seed and the agent's id; never
/// reseeded.  Kept separate from [`WorldRng`] so an agent's private rolls
/// (e.g. a wanderer's direction changes) don't perturb the shared stream
/// that terrain and other agents depend on.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an entity id.
    pub fn new(global_seed: u64, entity: EntityId) -> Self {
        let seed = global_seed ^ u64::from(entity.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
