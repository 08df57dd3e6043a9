//! Error types for the treegrid library.

use thiserror::Error;

use super::Square;

/// All errors that can occur in the treegrid library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeGridError {
    /// A square name that does not parse or lies outside the board.
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),

    /// No sequence of moves connects the two squares.
    #[error("No path from {from} to {to}")]
    Unreachable { from: Square, to: Square },
}

/// Convenience result type for treegrid operations.
pub type TreeGridResult<T> = Result<T, TreeGridError>;
