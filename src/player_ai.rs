use crate::{
    common::GameError,
    grid::{CellState, Coordinate, Grid},
    targeting::draw_cell,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Auto-pilot for the human side: random placements and random untried
/// targets. Used by the simulator and in tests.
pub struct AiPlayer {
    rejections: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { rejections: 0 }
    }

    /// Number of choices the session rejected.
    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn choose_placement(&mut self, rng: &mut SmallRng, fleet: &Grid) -> Option<Coordinate> {
        draw_cell(rng, fleet, |state| state == CellState::Empty)
    }

    fn choose_target(&mut self, rng: &mut SmallRng, tracking: &Grid, _fleet: &Grid) -> Option<Coordinate> {
        draw_cell(rng, tracking, |state| state == CellState::Empty)
    }

    fn handle_rejection(&mut self, _err: &GameError) {
        self.rejections += 1;
    }
}
