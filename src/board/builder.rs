//! Fluent builder for constructing chess positions.
//!
//! Convenient for tests that need sparse, hand-picked material rather than
//! FEN strings.
//!
//! # Example
//! ```
//! use hce::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(3, 3), Color::White, Piece::Bishop)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.piece_material(Color::White), 320);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board.set_side_to_move(self.side_to_move);
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_places_pieces() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::White, Piece::King)
            .piece(Square(7, 7), Color::Black, Piece::King)
            .piece(Square(4, 4), Color::White, Piece::Rook)
            .side_to_move(Color::Black)
            .build();
        assert_eq!(board.piece_at(Square(4, 4)), Some((Color::White, Piece::Rook)));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.piece_material(Color::White), 500);
    }

    #[test]
    fn test_builder_replaces_on_same_square() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::Rook)
            .piece(Square(4, 4), Color::Black, Piece::Knight)
            .build();
        assert_eq!(board.piece_at(Square(4, 4)), Some((Color::Black, Piece::Knight)));
        assert_eq!(board.piece_material(Color::White), 0);
    }
}
