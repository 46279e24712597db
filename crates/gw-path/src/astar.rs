//! A* over the grid with lazy open-set deletion.
//!
//! # Cost model
//!
//! Every orthogonal step costs exactly 1 and the heuristic is Manhattan
//! distance, so `g`, `h`, and `f` are all integers.  Using `u32` throughout
//! keeps heap ordering exact and deterministic — no float comparisons — and
//! the Manhattan heuristic is admissible and consistent on a uniform-cost
//! 4-connected grid, so the first finalization of the goal is optimal.
//!
//! # Open-set policy
//!
//! The open set is a `BinaryHeap` of `Reverse((f, cell_index))`; the cell
//! index doubles as a deterministic tie-break between equal-`f` entries.
//! There is no decrease-key: discovering a strictly better `g` for an
//! already-seen, not-yet-finalized cell just updates its score and parent
//! and pushes a duplicate entry.  Stale entries are skipped when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gw_core::{CARDINALS, Position};
use gw_grid::Grid;

use crate::{PathError, PathResult};

const NO_PARENT: u32 = u32::MAX;

/// Compute the shortest path from `start` to `goal`, inclusive of both.
///
/// Returns a single-element path when `start == goal`.  Fails with
/// [`PathError::OutOfBounds`] if either endpoint is off the grid and
/// [`PathError::NoPath`] once the reachable frontier is exhausted.  There
/// is no search budget: an unreachable goal visits every reachable cell
/// before failing.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> PathResult<Vec<Position>> {
    if !grid.in_bounds(start) {
        return Err(PathError::OutOfBounds(start));
    }
    if !grid.in_bounds(goal) {
        return Err(PathError::OutOfBounds(goal));
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let width = grid.width();
    let cell_count = (width as usize) * (grid.height() as usize);
    let index_of = |pos: Position| (pos.y as usize) * (width as usize) + pos.x as usize;
    let position_of = |index: u32| Position::new(index as i32 % width, index as i32 / width);

    // Dense per-cell search state.  g = best known cost from start.
    let mut g_score = vec![u32::MAX; cell_count];
    let mut parent = vec![NO_PARENT; cell_count];
    let mut finalized = vec![false; cell_count];

    let start_index = index_of(start) as u32;
    let goal_index = index_of(goal) as u32;
    g_score[start_index as usize] = 0;

    let mut open: BinaryHeap<Reverse<(u32, u32)>> = BinaryHeap::new();
    open.push(Reverse((start.manhattan(goal), start_index)));

    while let Some(Reverse((_f, current))) = open.pop() {
        if finalized[current as usize] {
            continue; // stale duplicate entry
        }
        finalized[current as usize] = true;

        if current == goal_index {
            return Ok(reconstruct(&parent, goal_index, position_of));
        }

        let current_pos = position_of(current);
        let tentative = g_score[current as usize] + 1;

        for dir in CARDINALS {
            let next_pos = current_pos + dir;
            if !grid.is_passable(next_pos) {
                continue;
            }
            let next = index_of(next_pos);
            if finalized[next] || tentative >= g_score[next] {
                continue;
            }
            g_score[next] = tentative;
            parent[next] = current;
            open.push(Reverse((tentative + next_pos.manhattan(goal), next as u32)));
        }
    }

    Err(PathError::NoPath { start, goal })
}

/// Follow parent back-links from the goal to the start, then reverse.
fn reconstruct(
    parent: &[u32],
    goal_index: u32,
    position_of: impl Fn(u32) -> Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal_index;
    loop {
        path.push(position_of(current));
        match parent[current as usize] {
            NO_PARENT => break,
            p => current = p,
        }
    }
    path.reverse();
    path
}
