/// Width and height of every grid.
pub const GRID_SIZE: usize = 8;

/// Number of cells on a grid.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Ships each side deploys. Every ship occupies a single cell.
pub const FLEET_SIZE: usize = 5;

/// Random draws attempted before falling back to an explicit scan of the
/// remaining candidate cells.
pub const MAX_DRAWS: usize = 256;

/// Column labels used by the textual coordinate scheme (`A1`..`H8`).
pub const COLUMN_LABELS: [char; GRID_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
