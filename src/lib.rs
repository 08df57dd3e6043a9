//! treegrid - in-memory search structures.
//!
//! Two cores: an unbalanced binary search tree with ordered traversal and
//! order-agnostic node searches, and an 8x8 chess board modeled as a grid
//! of linked cells with a breadth-first knight-move pathfinder. Both are
//! exercised by the criterion benchmarks comparing container performance.

pub mod chess;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use chess::{Board, Cell, CellId, Direction, KnightPathFinder};
pub use tree::{build_tree, find_breadth_first, find_depth_first, BinaryTree, TreeNode};
pub use types::{
    Piece, Square, SquareName, TreeGridError, TreeGridResult, BOARD_CELLS, BOARD_DIM,
    KNIGHT_OFFSETS,
};
