#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod fleet;
mod game;
pub mod grid;
pub mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod resolve;
pub mod targeting;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use fleet::Fleet;
pub use game::*;
pub use grid::{CellState, Coordinate, Grid, GridError};
pub use placement::{place, populate, random_placement};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use resolve::resolve_attack;
pub use targeting::select_target;
