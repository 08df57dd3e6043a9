//! Board coordinates and their display names.

use std::fmt;

use super::BOARD_DIM;

/// A validated coordinate on the 8x8 board.
///
/// Row 0 is the top rank (rank 8) and row 7 the bottom rank (rank 1);
/// column 0 is file 'A' and column 7 file 'H'. A `Square` can only be
/// constructed in range, so holding one is proof the coordinate is on
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Construct a square from a (row, col) pair, returning None for
    /// coordinates outside the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_DIM && col < BOARD_DIM {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Construct a square from its row-major cell index (0..64).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < (BOARD_DIM as usize) * (BOARD_DIM as usize) {
            Self::new((index / BOARD_DIM as usize) as u8, (index % BOARD_DIM as usize) as u8)
        } else {
            None
        }
    }

    /// Parse a square from its display name, e.g. "A8" or "e5".
    /// Returns None for anything unparseable or off the board.
    pub fn from_name(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b @ b'A'..=b'H' => b - b'A',
            b @ b'a'..=b'h' => b - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b'8' - b,
            _ => return None,
        };
        Self::new(row, col)
    }

    /// Apply a signed (row, col) offset, returning None if the result
    /// lands off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..BOARD_DIM as i16).contains(&row) && (0..BOARD_DIM as i16).contains(&col) {
            Self::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// The row (0 = rank 8, 7 = rank 1).
    pub fn row(self) -> u8 {
        self.row
    }

    /// The column (0 = file A, 7 = file H).
    pub fn col(self) -> u8 {
        self.col
    }

    /// The row-major cell index (`row * 8 + col`).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_DIM as usize + self.col as usize
    }

    /// The display name: file letter then rank digit, e.g. (0,0) -> "A8".
    pub fn name(self) -> SquareName {
        SquareName([b'A' + self.col, b'8' - self.row])
    }

    /// Every square on the board, in row-major order (A8, B8, .. H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_DIM).flat_map(|row| (0..BOARD_DIM).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The two-character display name of a square.
///
/// Column 0..7 maps to letters 'A'..'H' and row 0..7 to rank digits
/// '8' down to '1'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareName([u8; 2]);

impl SquareName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        // Both bytes are drawn from 'A'..'H' and '1'..'8'.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for SquareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for SquareName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
