//! Shared value types for the treegrid library.

pub mod error;
pub mod piece;
pub mod square;

pub use error::{TreeGridError, TreeGridResult};
pub use piece::Piece;
pub use square::{Square, SquareName};

/// Side length of the board.
pub const BOARD_DIM: u8 = 8;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_DIM as usize) * (BOARD_DIM as usize);

/// The eight knight-move offsets as (row, col) deltas, in the fixed
/// order the pathfinder probes them.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];
