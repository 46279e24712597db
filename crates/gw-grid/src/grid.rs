//! Dense row-major cell storage.
//!
//! # Data layout
//!
//! Cells live in one `Vec<Cell>` of length `width × height`, row-major:
//! cell `(x, y)` is at index `y * width + x`.  All access goes through the
//! checked accessors ([`cell`](Grid::cell) / [`cell_mut`](Grid::cell_mut))
//! or is preceded by [`in_bounds`](Grid::in_bounds); there is no unchecked
//! public accessor.

use gw_core::{CoreError, CoreResult, Position};

use crate::cell::{Cell, CellType};

/// A fixed-size 2-D field of [`Cell`]s.
///
/// Created at world initialization, replaced wholesale on regeneration via
/// [`resize`](Grid::resize)/[`fill`](Grid::fill), and mutated in place
/// during simulation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `width × height` grid of default (Empty) cells.
    ///
    /// Fails fast on non-positive dimensions — the grid underlies every
    /// spatial invariant, so a degenerate grid is a configuration error,
    /// not something to limp along with.
    pub fn new(width: i32, height: i32) -> CoreResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        })
    }

    /// Reinitialize to `width × height`, discarding all prior contents.
    pub fn resize(&mut self, width: i32, height: i32) -> CoreResult<()> {
        *self = Grid::new(width, height)?;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` if `pos` addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y as usize) * (self.width as usize) + pos.x as usize)
    }

    /// Checked read access; `None` out of bounds.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Checked write access; `None` out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// `true` if `pos` is on the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| c.kind.is_passable())
    }

    /// Set every cell to `kind`, clearing both payload fields.
    pub fn fill(&mut self, kind: CellType) {
        for cell in &mut self.cells {
            *cell = Cell { kind, terrain: 0.0, decay: 0.0 };
        }
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Row-major iterator over all cells — the read-only snapshot surface.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i as i32;
            (Position::new(i % width, i / width), cell)
        })
    }

    /// Visit every cell read-only, in row-major order.
    pub fn for_each(&self, mut visitor: impl FnMut(Position, &Cell)) {
        for (pos, cell) in self.iter() {
            visitor(pos, cell);
        }
    }

    /// Visit every cell mutably, in row-major order.
    pub fn for_each_mut(&mut self, mut visitor: impl FnMut(Position, &mut Cell)) {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let i = i as i32;
            visitor(Position::new(i % width, i / width), cell);
        }
    }

    // ── Transient cell marking ────────────────────────────────────────────

    /// Leave a trail at `pos` if the cell admits one.
    ///
    /// Empty and marker cells become `Trail` with a fresh decay counter;
    /// walls, sources, sinks, signals, and existing trails are untouched
    /// (an existing trail keeps decaying — re-treading does not refresh it).
    pub fn mark_trail(&mut self, pos: Position) {
        if let Some(cell) = self.cell_mut(pos) {
            if cell.kind.accepts_trail() {
                cell.kind = CellType::Trail;
                cell.decay = 0.0;
            }
        }
    }

    /// Leave a signal at `pos` if the cell is empty or a trail.
    pub fn mark_signal(&mut self, pos: Position) {
        if let Some(cell) = self.cell_mut(pos) {
            if matches!(cell.kind, CellType::Empty | CellType::Trail) {
                cell.kind = CellType::Signal;
                cell.decay = 0.0;
            }
        }
    }
}
