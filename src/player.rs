use crate::{
    common::{AttackOutcome, GameError},
    grid::{Coordinate, Grid},
};
use rand::rngs::SmallRng;

/// Source of the human side's decisions.
///
/// Implementations return coordinates that are already on the grid; returning
/// `None` signals that no more input is coming.
pub trait Player {
    /// Choose where to place the next ship, given the fleet grid so far.
    fn choose_placement(&mut self, rng: &mut SmallRng, fleet: &Grid) -> Option<Coordinate>;

    /// Choose the next cell to attack, given the tracking grid and own fleet.
    fn choose_target(&mut self, rng: &mut SmallRng, tracking: &Grid, fleet: &Grid) -> Option<Coordinate>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _coord: Coordinate, _outcome: AttackOutcome) {}

    /// Inform the player of an opponent attack against its fleet.
    fn handle_opponent_attack(&mut self, _coord: Coordinate, _outcome: AttackOutcome) {}

    /// Inform the player that its last choice was rejected and must be retried.
    fn handle_rejection(&mut self, _err: &GameError) {}
}
