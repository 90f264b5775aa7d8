//! A fixed-size cell grid shared by fleet layouts and attack tracking.
//!
//! The same [`CellState`] type is used in two contexts:
//!
//! * a **fleet grid** records one side's ships and the damage they took, and
//!   may hold any of the four states;
//! * a **tracking grid** records what an attacker has learned about the
//!   enemy fleet and only ever holds `Empty`, `Missed` or `Destroyed` (a hit).
//!
//! Both are structurally identical; only the owner decides how to read them.

use core::fmt;

use crate::config::{COLUMN_LABELS, GRID_SIZE};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Nothing placed and never attacked (tracking: unknown).
    #[default]
    Empty,
    /// Holds a ship that has not been hit. Never appears on a tracking grid.
    Occupied,
    /// A ship that was hit (tracking: hit marker).
    Destroyed,
    /// An attacked cell without a ship.
    Missed,
}

impl CellState {
    /// True for cells that have already been attacked.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Destroyed | CellState::Missed)
    }
}

/// Errors returned by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside `[0, GRID_SIZE)`.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `(row, col)` position. Construction does not validate; grids do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on an 8×8 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Parse a label such as `G3`: column letter `A`-`H` (any case) followed
    /// by row digit `1`-`8`. Surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        let col_ch = chars.next()?.to_ascii_uppercase();
        let row_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let col = COLUMN_LABELS.iter().position(|&c| c == col_ch)?;
        let row = row_ch.to_digit(10)? as usize;
        if row == 0 || row > GRID_SIZE {
            return None;
        }
        Some(Self::new(row - 1, col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMN_LABELS.get(self.col) {
            Some(c) if self.row < GRID_SIZE => write!(f, "{}{}", c, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// An 8×8 matrix of [`CellState`].
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<CellState, GridError> {
        self.check_bounds(coord)?;
        Ok(self.cells[coord.row][coord.col])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        self.cells[coord.row][coord.col] = state;
        Ok(())
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &state)| (Coordinate::new(r, c), state))
        })
    }

    #[inline]
    fn check_bounds(&self, coord: Coordinate) -> Result<(), GridError> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Destroyed => 'D',
                    CellState::Missed => 'M',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
