//! Cell taxonomy and per-cell payload.

/// Per-tick decay added to Trail/Signal cells; at 1.0 the cell reverts to
/// Empty.  1.0 / 0.02 = 50 ticks of lifetime without re-marking.
pub const DECAY_RATE: f64 = 0.02;

/// The closed set of things a cell can be.  Exactly one per cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    /// Terrain classification bands derived from noise intensity, weakest
    /// to strongest.  Read by trail-maker scoring.
    MarkerA,
    MarkerB,
    MarkerC,
    /// Fixed path endpoint; stamped under signal sources at spawn.
    Source,
    /// Fixed path endpoint; stamped under signal sinks at spawn.
    Sink,
    /// Transient residue of agent movement; evaporates.
    Trail,
    /// Transient residue of a signal source firing; evaporates.
    Signal,
}

impl CellType {
    /// One-character glyph for the rendering layer.
    pub fn glyph(self) -> char {
        match self {
            CellType::Empty => ' ',
            CellType::Wall => '#',
            CellType::MarkerA => 'a',
            CellType::MarkerB => 'b',
            CellType::MarkerC => 'c',
            CellType::Source => 'S',
            CellType::Sink => 'K',
            CellType::Trail => '.',
            CellType::Signal => '*',
        }
    }

    /// Everything except walls can be entered and pathed through, whatever
    /// its marker or decay state.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellType::Wall
    }

    /// `true` for the cell types that agent movement may overwrite with a
    /// trail mark.
    #[inline]
    pub(crate) fn accepts_trail(self) -> bool {
        matches!(
            self,
            CellType::Empty | CellType::MarkerA | CellType::MarkerB | CellType::MarkerC
        )
    }
}

/// One cell of the grid.
///
/// `terrain` is written once during generation and immutable thereafter;
/// `decay` only means anything while `kind` is `Trail` or `Signal`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellType,
    /// Terrain strength in [0, 1], sampled from the noise field.
    pub terrain: f64,
    /// Evaporation accumulator for `Trail`/`Signal` cells.
    pub decay: f64,
}
