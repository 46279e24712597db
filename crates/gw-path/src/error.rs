use gw_core::Position;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the grid.
    #[error("path endpoint {0} out of bounds")]
    OutOfBounds(Position),

    /// The goal is unreachable from the start.  An expected, common outcome
    /// — callers treat it as a normal negative result.
    #[error("no path from {start} to {goal}")]
    NoPath { start: Position, goal: Position },
}

pub type PathResult<T> = Result<T, PathError>;
