//! Piece tokens that can occupy board cells.

/// The kind of piece occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    /// The king.
    King = 0,
    /// The queen.
    Queen = 1,
    /// A rook.
    Rook = 2,
    /// A bishop.
    Bishop = 3,
    /// A knight.
    Knight = 4,
    /// A pawn.
    Pawn = 5,
}

impl Piece {
    /// Convert a u8 value to a Piece, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::King),
            1 => Some(Self::Queen),
            2 => Some(Self::Rook),
            3 => Some(Self::Bishop),
            4 => Some(Self::Knight),
            5 => Some(Self::Pawn),
            _ => None,
        }
    }

    /// Return a human-readable name for this piece.
    pub fn name(&self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
            Self::Pawn => "pawn",
        }
    }

    /// Parse a piece from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "king" => Some(Self::King),
            "queen" => Some(Self::Queen),
            "rook" => Some(Self::Rook),
            "bishop" => Some(Self::Bishop),
            "knight" => Some(Self::Knight),
            "pawn" => Some(Self::Pawn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
