//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Contribution of one piece of this type to the game phase metric.
    ///
    /// Minor pieces count 1, rooks 2, queens 4; pawns and kings do not
    /// contribute. Full opening material sums to 24.
    #[inline]
    #[must_use]
    pub const fn phase(self) -> i32 {
        match self {
            Piece::Knight | Piece::Bishop => 1,
            Piece::Rook => 2,
            Piece::Queen => 4,
            Piece::Pawn | Piece::King => 0,
        }
    }

    /// Parse a piece from a lowercase character (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Seventh rank for this color (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn seventh_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Map a square into this side's own orientation.
    ///
    /// Identity for White; vertical mirror for Black, so that any
    /// square-indexed heuristic (shield patterns, piece-square tables,
    /// trapped-piece squares) can be written once from White's point of
    /// view and reused for both sides.
    #[inline]
    #[must_use]
    pub const fn relative_square(self, sq: Square) -> Square {
        match self {
            Color::White => sq,
            Color::Black => sq.flip_vertical(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_square_white_identity() {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            assert_eq!(Color::White.relative_square(sq), sq);
        }
    }

    #[test]
    fn test_relative_square_black_mirror() {
        // a1 <-> a8, h2 <-> h7
        assert_eq!(Color::Black.relative_square(Square(0, 0)), Square(7, 0));
        assert_eq!(Color::Black.relative_square(Square(1, 7)), Square(6, 7));
    }

    #[test]
    fn test_relative_square_involution() {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let twice = Color::Black.relative_square(Color::Black.relative_square(sq));
            assert_eq!(twice, sq);
        }
    }

    #[test]
    fn test_rank_capabilities() {
        assert_eq!(Color::White.back_rank(), 0);
        assert_eq!(Color::Black.back_rank(), 7);
        assert_eq!(Color::White.seventh_rank(), 6);
        assert_eq!(Color::Black.seventh_rank(), 1);
        assert_eq!(Color::White.pawn_direction(), 1);
        assert_eq!(Color::Black.pawn_direction(), -1);
    }

    #[test]
    fn test_phase_weights() {
        let full: i32 = 2 * (2 * Piece::Knight.phase()
            + 2 * Piece::Bishop.phase()
            + 2 * Piece::Rook.phase()
            + Piece::Queen.phase());
        assert_eq!(full, 24, "full opening material is the phase ceiling");
    }
}
