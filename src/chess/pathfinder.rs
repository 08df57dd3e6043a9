//! Shortest knight paths over the board (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::types::{Square, TreeGridError, TreeGridResult, KNIGHT_OFFSETS};

use super::board::Board;

/// Finds shortest sequences of knight moves between two squares.
///
/// Runs a breadth-first search over the knight-move adjacency induced by
/// [`Board::delta`] and the eight knight offsets. Because every move has
/// equal weight, the first time the goal is dequeued it was reached via a
/// minimum-length path. Among equal-length paths the one discovered first
/// wins, which follows the fixed probe order of
/// [`KNIGHT_OFFSETS`](crate::types::KNIGHT_OFFSETS).
pub struct KnightPathFinder<'a> {
    board: &'a Board,
}

impl<'a> KnightPathFinder<'a> {
    /// Create a pathfinder borrowing the given board.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// The legal knight destinations from a square, in probe order.
    /// At most 8; fewer near the edges.
    pub fn possible_moves(&self, from: Square) -> Vec<Square> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| self.board.delta(from, d_row, d_col))
            .collect()
    }

    /// The shortest sequence of squares from `from` to `to` inclusive.
    ///
    /// `from == to` yields the single-square path. The search visits at
    /// most 64 squares, so it always terminates; on the connected 8x8
    /// knight graph every pair of squares is reachable, but exhaustion
    /// is still surfaced as [`TreeGridError::Unreachable`].
    pub fn find_path(&self, from: Square, to: Square) -> TreeGridResult<Vec<Square>> {
        let mut visited: HashSet<Square> = HashSet::new();
        let mut came_from: HashMap<Square, Square> = HashMap::new();
        let mut queue: VecDeque<Square> = VecDeque::new();

        visited.insert(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                let path = reconstruct_path(&came_from, to);
                debug!(
                    "knight path {} -> {}: {} moves, {} squares seen",
                    from,
                    to,
                    path.len() - 1,
                    visited.len()
                );
                return Ok(path);
            }
            for next in self.possible_moves(current) {
                if visited.insert(next) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        Err(TreeGridError::Unreachable { from, to })
    }

    /// [`find_path`](Self::find_path) by display names, e.g. "A1" to "H8".
    ///
    /// Both names are validated before the search starts; a bad name is
    /// an [`TreeGridError::InvalidSquare`], never an `Unreachable`.
    pub fn find_path_named(&self, from: &str, to: &str) -> TreeGridResult<Vec<Square>> {
        let from = Square::from_name(from)
            .ok_or_else(|| TreeGridError::InvalidSquare(from.to_string()))?;
        let to =
            Square::from_name(to).ok_or_else(|| TreeGridError::InvalidSquare(to.to_string()))?;
        self.find_path(from, to)
    }
}

/// Walk the predecessor chain back from the goal, then flip it so the
/// path reads start to goal.
fn reconstruct_path(came_from: &HashMap<Square, Square>, to: Square) -> Vec<Square> {
    let mut path = vec![to];
    let mut current = to;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
