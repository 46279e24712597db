//! Terrain layout derived from the noise field.

use gw_grid::{CellType, Grid, NoiseField};

/// Octave count for terrain noise.
pub(crate) const NOISE_OCTAVES: u32 = 5;
/// Amplitude falloff per octave.
pub(crate) const NOISE_PERSISTENCE: f64 = 0.5;

// Noise-intensity bands, checked strongest first.
const WALL_BELOW: f64 = 0.12;
const MARKER_C_ABOVE: f64 = 0.88;
const MARKER_B_ABOVE: f64 = 0.72;
const MARKER_A_ABOVE: f64 = 0.55;

/// Stamp cell types and terrain strength from `noise` onto `grid`.
///
/// Border cells are always walls regardless of noise.  `terrain` is set for
/// every cell (border included) and the decay accumulator is zeroed — this
/// runs only during (re)generation, where the whole grid is being replaced.
pub(crate) fn apply_layout(grid: &mut Grid, noise: &NoiseField) {
    let (width, height) = (grid.width(), grid.height());
    grid.for_each_mut(|pos, cell| {
        let on_border =
            pos.x == 0 || pos.y == 0 || pos.x == width - 1 || pos.y == height - 1;
        let v = noise.value(pos.x, pos.y);

        cell.kind = if on_border || v < WALL_BELOW {
            CellType::Wall
        } else if v > MARKER_C_ABOVE {
            CellType::MarkerC
        } else if v > MARKER_B_ABOVE {
            CellType::MarkerB
        } else if v > MARKER_A_ABOVE {
            CellType::MarkerA
        } else {
            CellType::Empty
        };
        cell.terrain = v;
        cell.decay = 0.0;
    });
}
