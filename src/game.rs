use crate::{
    common::{AttackOutcome, GameError, Phase, Side},
    config::GRID_CELLS,
    fleet::Fleet,
    grid::{Coordinate, Grid},
    placement,
    player::Player,
    resolve::resolve_attack,
    targeting::select_target,
};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

/// A single game: both fleets, the human's tracking grid and the turn state.
#[derive(Debug, Clone)]
pub struct GameSession {
    human: Fleet,
    opponent: Fleet,
    tracking: Grid,
    phase: Phase,
    attacks: usize,
}

impl GameSession {
    /// Start a game in `Setup` with a randomly deployed opponent fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut opponent = Fleet::new();
        placement::populate(rng, &mut opponent)?;
        Self::with_opponent(opponent)
    }

    /// Start a game in `Setup` against a prepared opponent fleet.
    ///
    /// The fleet may carry earlier damage; its attacked cells are copied into
    /// the tracking grid so the human's record matches the fleet. A fleet with
    /// no ship afloat is rejected with [`GameError::FleetSunk`].
    pub fn with_opponent(opponent: Fleet) -> Result<Self, GameError> {
        if !opponent.is_ready() {
            return Err(GameError::FleetIncomplete {
                placed: opponent.placed(),
            });
        }
        if opponent.remaining() == 0 {
            return Err(GameError::FleetSunk);
        }
        let mut tracking = Grid::new();
        for (coord, state) in opponent.grid().cells() {
            if state.is_attacked() {
                tracking.set(coord, state)?;
            }
        }
        info!("new session, opponent fleet deployed");
        Ok(Self {
            human: Fleet::new(),
            opponent,
            tracking,
            phase: Phase::Setup,
            attacks: 0,
        })
    }

    /// Discard the current game and start over with a new opponent fleet.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.human.clear();
        self.opponent.clear();
        self.tracking.clear();
        placement::populate(rng, &mut self.opponent)?;
        self.phase = Phase::Setup;
        self.attacks = 0;
        info!("session reset");
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, once the session is finished.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn human_fleet(&self) -> &Fleet {
        &self.human
    }

    pub fn opponent_fleet(&self) -> &Fleet {
        &self.opponent
    }

    /// The human's record of attacks against the opponent fleet.
    pub fn tracking(&self) -> &Grid {
        &self.tracking
    }

    /// Attacks resolved so far by both sides.
    pub fn attacks(&self) -> usize {
        self.attacks
    }

    /// Place one human ship. Once the fleet is complete the human moves first.
    pub fn place_ship(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        placement::place(&mut self.human, coord)?;
        debug!("human ship {} placed at {}", self.human.placed(), coord);
        if self.human.is_ready() && self.opponent.is_ready() {
            self.phase = Phase::HumanTurn;
            info!("fleets deployed, battle begins");
        }
        Ok(())
    }

    /// Resolve a human attack on the opponent fleet.
    ///
    /// A rejected attack keeps the session in `HumanTurn` with no change.
    pub fn human_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, GameError> {
        self.expect_phase(Phase::HumanTurn)?;
        let outcome = resolve_attack(&mut self.opponent, Some(&mut self.tracking), coord)?;
        self.attacks += 1;
        debug!("human attacks {} -> {:?}", coord, outcome);
        self.advance(Phase::OpponentTurn);
        Ok(outcome)
    }

    /// Let the automated opponent take its turn.
    ///
    /// Cells that were attacked before are redrawn internally, so the caller
    /// only ever sees a resolved attack.
    pub fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coordinate, AttackOutcome), GameError> {
        self.expect_phase(Phase::OpponentTurn)?;
        for _ in 0..GRID_CELLS {
            let coord = select_target(rng, self.human.grid())?;
            match resolve_attack(&mut self.human, None, coord) {
                Ok(outcome) => {
                    self.attacks += 1;
                    debug!("opponent attacks {} -> {:?}", coord, outcome);
                    self.advance(Phase::HumanTurn);
                    return Ok((coord, outcome));
                }
                Err(GameError::AlreadyAttacked(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(GameError::GridExhausted)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        match self.phase {
            Phase::Finished(_) => Err(GameError::SessionOver),
            actual if actual == expected => Ok(()),
            actual => Err(GameError::WrongPhase { expected, actual }),
        }
    }

    // Win check runs after every resolved attack, whoever made it.
    fn advance(&mut self, next: Phase) {
        self.phase = if self.opponent.is_defeated() {
            Phase::Finished(Side::Human)
        } else if self.human.is_defeated() {
            Phase::Finished(Side::Opponent)
        } else {
            next
        };
        if let Phase::Finished(winner) = self.phase {
            info!("{:?} wins after {} attacks", winner, self.attacks);
        }
    }
}

/// Run `session` to completion, asking `player` for the human side's moves.
///
/// Rejected placements and attacks are reported back to the player and asked
/// for again. Returns the winning side.
pub fn play<P: Player + ?Sized>(
    session: &mut GameSession,
    player: &mut P,
    rng: &mut SmallRng,
) -> Result<Side, GameError> {
    while session.phase() == Phase::Setup {
        let coord = player
            .choose_placement(rng, session.human_fleet().grid())
            .ok_or(GameError::InputClosed)?;
        match session.place_ship(coord) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => player.handle_rejection(&e),
            Err(e) => return Err(e),
        }
    }

    loop {
        match session.phase() {
            Phase::HumanTurn => {
                let coord = player
                    .choose_target(rng, session.tracking(), session.human_fleet().grid())
                    .ok_or(GameError::InputClosed)?;
                match session.human_attack(coord) {
                    Ok(outcome) => player.handle_attack_result(coord, outcome),
                    Err(e) if e.is_recoverable() => player.handle_rejection(&e),
                    Err(e) => return Err(e),
                }
            }
            Phase::OpponentTurn => {
                let (coord, outcome) = session.opponent_turn(rng)?;
                player.handle_opponent_attack(coord, outcome);
            }
            Phase::Finished(winner) => return Ok(winner),
            Phase::Setup => {
                return Err(GameError::WrongPhase {
                    expected: Phase::HumanTurn,
                    actual: Phase::Setup,
                })
            }
        }
    }
}
