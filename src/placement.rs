//! Ship placement rules.

use crate::{
    common::GameError,
    config::FLEET_SIZE,
    fleet::Fleet,
    grid::{CellState, Coordinate},
    targeting::draw_cell,
};
use log::debug;
use rand::Rng;

/// Place a ship at `coord`.
///
/// Fails with [`GameError::CellOccupied`] unless the cell is `Empty`; the
/// fleet is left untouched on any error. Retrying is up to the caller.
///
/// There is no cap on the number of ships; stopping at `FLEET_SIZE` is the
/// session's job (it leaves `Setup` on the fifth accepted placement).
pub fn place(fleet: &mut Fleet, coord: Coordinate) -> Result<(), GameError> {
    if fleet.get(coord)? != CellState::Empty {
        return Err(GameError::CellOccupied(coord));
    }
    fleet.occupy(coord)
}

/// Returns a random `Empty` cell of `fleet`.
pub fn random_placement<R: Rng + ?Sized>(rng: &mut R, fleet: &Fleet) -> Result<Coordinate, GameError> {
    draw_cell(rng, fleet.grid(), |state| state == CellState::Empty).ok_or(GameError::GridExhausted)
}

/// Fill `fleet` with randomly placed ships until it holds a full complement.
pub fn populate<R: Rng + ?Sized>(rng: &mut R, fleet: &mut Fleet) -> Result<(), GameError> {
    while fleet.placed() < FLEET_SIZE {
        let coord = random_placement(rng, fleet)?;
        place(fleet, coord)?;
        debug!("ship {} deployed", fleet.placed());
    }
    Ok(())
}
