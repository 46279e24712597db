//! Integer grid coordinates.
//!
//! `Position` is a plain value type: equality and vector arithmetic, no
//! identity.  Coordinates are `i32` so that off-grid candidates (one step
//! past an edge) are representable and can be rejected by a bounds check
//! instead of wrapping.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2-D integer coordinate on (or near) the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// The four cardinal unit vectors in scan order: east, west, south, north.
///
/// Every consumer that iterates directions (pathfinder neighbour expansion,
/// random direction picks, neighbour scoring) uses this table, so the order
/// doubles as the engine-wide tie-break policy.
pub const CARDINALS: [Position; 4] = [
    Position { x: 1, y: 0 },
    Position { x: -1, y: 0 },
    Position { x: 0, y: 1 },
    Position { x: 0, y: -1 },
];

impl Position {
    pub const ZERO: Position = Position { x: 0, y: 0 };

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;
    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: Position) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
