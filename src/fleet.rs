//! One side's ship layout and damage state.

use core::fmt;

use crate::common::GameError;
use crate::config::FLEET_SIZE;
use crate::grid::{CellState, Coordinate, Grid};

/// A fleet grid plus the number of ships still afloat.
///
/// `remaining` always equals the number of `Occupied` cells in `grid`. Only
/// the placement and resolution code mutates a fleet, through the crate-private
/// helpers below.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Fleet {
    grid: Grid,
    remaining: usize,
    placed: usize,
}

impl Fleet {
    /// Create an empty fleet (no ships placed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the fleet grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<CellState, GameError> {
        Ok(self.grid.get(coord)?)
    }

    /// Ships still afloat.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Ships placed so far, sunk or not.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// True once the full complement of ships has been placed.
    pub fn is_ready(&self) -> bool {
        self.placed >= FLEET_SIZE
    }

    /// True when every placed ship has been destroyed.
    pub fn is_defeated(&self) -> bool {
        self.placed > 0 && self.remaining == 0
    }

    /// Remove every ship and every attack mark.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.remaining = 0;
        self.placed = 0;
    }

    pub(crate) fn occupy(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.grid.set(coord, CellState::Occupied)?;
        self.remaining += 1;
        self.placed += 1;
        Ok(())
    }

    pub(crate) fn destroy(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.grid.set(coord, CellState::Destroyed)?;
        self.remaining = self.remaining.saturating_sub(1);
        Ok(())
    }

    pub(crate) fn mark_missed(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.grid.set(coord, CellState::Missed)?;
        Ok(())
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Fleet {{ remaining: {}, placed: {} }}\n{:?}",
            self.remaining, self.placed, self.grid
        )
    }
}
