//! Chess position representation.
//!
//! The board keeps per-side bitboards together with the incrementally
//! counted evaluation inputs: material totals (pawn and non-pawn kept
//! separately) and piece-square partial sums for both game phases. The
//! evaluation core reads these accumulators; every mutation path
//! (FEN parsing, the builder) maintains them through a single pair of
//! set/remove operations, so they can never drift from the piece placement.

pub(crate) mod attack_tables;
mod builder;
mod error;
mod fen;
pub(crate) mod pst;
mod state;
mod types;

pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Piece, Square};
