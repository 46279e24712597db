//! World initialization parameters.

use crate::{SimError, SimResult};

/// Immutable snapshot of world initialization parameters.
///
/// Consumed once at init and again at regeneration (the population counts
/// and dimensions are reused; the RNG is *not* reseeded).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Grid width in cells.  Must be positive.
    pub width: i32,
    /// Grid height in cells.  Must be positive.
    pub height: i32,

    // ── Population counts ─────────────────────────────────────────────────
    pub wanderers: usize,
    pub seekers: usize,
    pub trail_makers: usize,
    pub signal_sources: usize,
    pub signal_sinks: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 24,
            wanderers: 12,
            seekers: 4,
            trail_makers: 6,
            signal_sources: 4,
            signal_sinks: 4,
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// Total configured population across all variants.
    pub fn population(&self) -> usize {
        self.wanderers + self.seekers + self.trail_makers + self.signal_sources + self.signal_sinks
    }

    /// Fail fast on dimensions that cannot host a grid.
    pub fn validate(&self) -> SimResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SimError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
