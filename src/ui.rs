#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    config::{COLUMN_LABELS, GRID_SIZE},
    grid::{CellState, Coordinate, Grid},
};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Instructions,
    Quit,
}

impl MenuChoice {
    /// Parse a menu selection (`1`, `2` or `3`).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::NewGame),
            "2" => Some(MenuChoice::Instructions),
            "3" | "q" | "Q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub const MENU: &str = "Select an option:\n\t1. New Game\n\t2. Read Instructions\n\t3. Quit\n";

pub const INSTRUCTIONS: &str = "\
Each side hides 5 ships on an 8x8 grid, one square per ship.
Squares are named by column then row, e.g. G3.
Take turns firing at the enemy grid; the first side to lose all 5 ships loses.
On your tracking grid H marks a hit and M a miss. On your fleet grid
S is a ship, D a destroyed ship and M a miss.
";

fn render(grid: &Grid, symbol: impl Fn(CellState) -> char) -> String {
    let mut out = String::from("  ");
    for c in COLUMN_LABELS.iter() {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{} |", r + 1);
        for c in 0..GRID_SIZE {
            let state = grid.get(Coordinate::new(r, c)).unwrap_or_default();
            let _ = write!(out, "{}|", symbol(state));
        }
        out.push('\n');
    }
    out
}

/// Text view of a fleet grid: `S` ship, `D` destroyed, `M` missed.
pub fn render_fleet(grid: &Grid) -> String {
    render(grid, |state| match state {
        CellState::Empty => ' ',
        CellState::Occupied => 'S',
        CellState::Destroyed => 'D',
        CellState::Missed => 'M',
    })
}

/// Text view of a tracking grid: `H` hit, `M` miss.
pub fn render_tracking(grid: &Grid) -> String {
    render(grid, |state| match state {
        CellState::Destroyed => 'H',
        CellState::Missed => 'M',
        _ => ' ',
    })
}
