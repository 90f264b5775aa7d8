//! Attack resolution.

use crate::{
    common::{AttackOutcome, GameError},
    fleet::Fleet,
    grid::{CellState, Coordinate, Grid},
};

/// Apply an attack at `coord` against `defender`.
///
/// When the attacker keeps a tracking grid it is passed as `tracking`; a
/// non-empty tracking cell rejects the attack. The defender's own cell is
/// always checked as well, so re-attacking a `Destroyed` or `Missed` cell is
/// rejected with [`GameError::AlreadyAttacked`] whether or not a tracking
/// grid was supplied. Every check runs before the first write.
pub fn resolve_attack(
    defender: &mut Fleet,
    mut tracking: Option<&mut Grid>,
    coord: Coordinate,
) -> Result<AttackOutcome, GameError> {
    let target = defender.get(coord)?;
    if let Some(grid) = tracking.as_deref() {
        if grid.get(coord)? != CellState::Empty {
            return Err(GameError::AlreadyAttacked(coord));
        }
    }
    if target.is_attacked() {
        return Err(GameError::AlreadyAttacked(coord));
    }

    let (outcome, mark) = if target == CellState::Occupied {
        defender.destroy(coord)?;
        (AttackOutcome::Hit, CellState::Destroyed)
    } else {
        defender.mark_missed(coord)?;
        (AttackOutcome::Miss, CellState::Missed)
    };
    if let Some(grid) = tracking.as_deref_mut() {
        grid.set(coord, mark)?;
    }
    Ok(outcome)
}
