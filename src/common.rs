//! Common types for Battleships: game errors, attack outcomes and phases.

use crate::grid::{Coordinate, GridError};

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The attack destroyed a ship.
    Hit,
    /// The attack landed on open water.
    Miss,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Fleets are being deployed.
    Setup,
    HumanTurn,
    OpponentTurn,
    /// Terminal; carries the winner.
    Finished(Side),
}

/// Errors returned by placement, attack and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the 8×8 grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement on a cell that is not empty.
    CellOccupied(Coordinate),
    /// Attack on a cell that was attacked before.
    AlreadyAttacked(Coordinate),
    /// The game has a winner; no further moves are accepted.
    SessionOver,
    /// Operation not allowed in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// A fleet handed to a session does not hold a full complement of ships.
    FleetIncomplete { placed: usize },
    /// A fleet handed to a session has no ship left afloat.
    FleetSunk,
    /// No cell is left to draw from.
    GridExhausted,
    /// The input collaborator stopped supplying coordinates.
    InputClosed,
}

impl GameError {
    /// Errors that leave the game untouched and simply ask for another coordinate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_) | GameError::AlreadyAttacked(_)
        )
    }
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            GameError::CellOccupied(c) => write!(f, "Square {} is already taken", c),
            GameError::AlreadyAttacked(c) => write!(f, "Square {} was already attacked", c),
            GameError::SessionOver => write!(f, "The game is over"),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, session is in {:?}", expected, actual)
            }
            GameError::FleetIncomplete { placed } => {
                write!(f, "Fleet holds {} ships, expected a full fleet", placed)
            }
            GameError::FleetSunk => write!(f, "Fleet has no ships left afloat"),
            GameError::GridExhausted => write!(f, "Every square has already been drawn"),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
