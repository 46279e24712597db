//! Multi-octave value-noise generation.
//!
//! # Algorithm
//!
//! One uniform-random base lattice is generated, then accumulated over
//! `octaves` passes.  Pass `o` treats the lattice as blocks of side `2^o`
//! and bilinearly interpolates within each block, scaled by the current
//! amplitude; after each pass the amplitude is multiplied by `persistence`.
//! So the block size strictly doubles while the amplitude strictly shrinks
//! — coarser structure contributes *less*, the inverse of textbook value
//! noise.  The final field is normalized by the sum of amplitudes used.
//!
//! The accumulation order and the asymmetric block clamp
//! (`x1 = min(x0 + step, width - 1)`) are load-bearing: downstream terrain
//! layouts threshold the raw values, so the exact output must be preserved.

use gw_core::WorldRng;

/// A 2-D scalar field with values in [0, 1].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseField {
    width: i32,
    height: i32,
    values: Vec<f64>,
}

impl NoiseField {
    /// Create a zeroed field.  Non-positive dimensions degrade to an empty
    /// field rather than erroring — the degenerate cases are defined to
    /// produce a default-zero field.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            values: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Reinitialize to `width × height`, zeroing every value.
    pub fn resize(&mut self, width: i32, height: i32) {
        *self = NoiseField::new(width, height);
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Value at `(x, y)`, or 0.0 outside the field.
    #[inline]
    pub fn value(&self, x: i32, y: i32) -> f64 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0.0;
        }
        self.values[(y as usize) * (self.width as usize) + x as usize]
    }

    #[inline]
    fn base_at(base: &[f64], width: i32, x: i64, y: i64) -> f64 {
        base[(y as usize) * (width as usize) + x as usize]
    }

    /// Fill the field from `rng`.
    ///
    /// `persistence` should be in (0, 1).  Zero octaves (or a zero-sized
    /// field) leaves every value at 0.0.
    pub fn generate(&mut self, rng: &mut WorldRng, octaves: u32, persistence: f64) {
        if self.width <= 0 || self.height <= 0 {
            return;
        }

        let base: Vec<f64> = (0..self.values.len())
            .map(|_| rng.gen_range(0.0..1.0))
            .collect();

        self.values.fill(0.0);

        let mut amplitude = 1.0;
        let mut total_amplitude = 0.0;

        for octave in 0..octaves {
            // i64 keeps absurd octave counts well-defined: once the block
            // exceeds the field, every sample interpolates from block (0, 0).
            let step = 1i64 << octave.min(62);

            for y in 0..self.height {
                let y0 = (i64::from(y) / step) * step;
                let y1 = (y0 + step).min(i64::from(self.height) - 1);
                let fy = (i64::from(y) - y0) as f64 / step as f64;

                for x in 0..self.width {
                    let x0 = (i64::from(x) / step) * step;
                    let x1 = (x0 + step).min(i64::from(self.width) - 1);
                    let fx = (i64::from(x) - x0) as f64 / step as f64;

                    let v00 = Self::base_at(&base, self.width, x0, y0);
                    let v10 = Self::base_at(&base, self.width, x1, y0);
                    let v01 = Self::base_at(&base, self.width, x0, y1);
                    let v11 = Self::base_at(&base, self.width, x1, y1);

                    let v0 = v00 + (v10 - v00) * fx;
                    let v1 = v01 + (v11 - v01) * fx;
                    let v = v0 + (v1 - v0) * fy;

                    self.values[(y as usize) * (self.width as usize) + x as usize] +=
                        v * amplitude;
                }
            }

            total_amplitude += amplitude;
            amplitude *= persistence;
        }

        if total_amplitude > 0.0 {
            for v in &mut self.values {
                *v /= total_amplitude;
            }
        }
    }
}
