//! Core value types for the board representation.

mod bitboard;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use piece::{Color, Piece};
pub use square::Square;
