//! The chess board - linked cell grid and knight pathfinding.

pub mod board;
pub mod cell;
pub mod pathfinder;

pub use board::Board;
pub use cell::{Cell, CellId, Direction};
pub use pathfinder::KnightPathFinder;
