// Random cell selection for the automated opponent.
// Uses no_std and avoids heap allocations.

use crate::{
    common::GameError,
    config::{GRID_CELLS, GRID_SIZE, MAX_DRAWS},
    grid::{CellState, Coordinate, Grid},
};
use log::trace;
use rand::Rng;

/// Draw a uniformly random cell of `grid` whose state satisfies `accept`.
///
/// Rejection sampling is tried `MAX_DRAWS` times; after that the remaining
/// candidates are collected and one is picked uniformly, which keeps the
/// distribution unchanged while guaranteeing termination. Returns `None`
/// when no cell qualifies.
pub(crate) fn draw_cell<R, F>(rng: &mut R, grid: &Grid, accept: F) -> Option<Coordinate>
where
    R: Rng + ?Sized,
    F: Fn(CellState) -> bool,
{
    for _ in 0..MAX_DRAWS {
        let coord = Coordinate::new(
            rng.random_range(0..GRID_SIZE),
            rng.random_range(0..GRID_SIZE),
        );
        if grid.get(coord).map(&accept).unwrap_or(false) {
            return Some(coord);
        }
    }

    let mut candidates = [Coordinate::new(0, 0); GRID_CELLS];
    let mut n = 0;
    for (coord, state) in grid.cells() {
        if accept(state) {
            candidates[n] = coord;
            n += 1;
        }
    }
    trace!("draw fell back to scan with {} candidates", n);
    if n == 0 {
        None
    } else {
        Some(candidates[rng.random_range(0..n)])
    }
}

/// Pick the next cell for the automated opponent to attack.
///
/// `view` is the grid the opponent attacks (the human fleet grid); cells that
/// are `Destroyed` or `Missed` are never returned. Fails with
/// [`GameError::GridExhausted`] once every cell has been attacked.
pub fn select_target<R: Rng + ?Sized>(rng: &mut R, view: &Grid) -> Result<Coordinate, GameError> {
    draw_cell(rng, view, |state| !state.is_attacked()).ok_or(GameError::GridExhausted)
}
