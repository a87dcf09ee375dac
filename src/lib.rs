//! Hand-crafted chess position evaluation.
//!
//! Computes a centipawn score for a position from the perspective of the
//! side to move, by combining material, piece-square placement, mobility,
//! king safety, pawn structure and material-imbalance corrections into a
//! single tapered (midgame/endgame interpolated) integer, backed by a
//! lockless evaluation cache.
//!
//! # Example
//! ```
//! use hce::{evaluate, Board, NoCache};
//!
//! let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//!     .parse()
//!     .unwrap();
//! let score = evaluate(&board, &NoCache, false);
//! assert!(score.abs() < 50, "startpos is roughly balanced");
//! ```

pub mod board;
pub mod cache;
pub mod eval;
mod zobrist;

pub use board::{Board, BoardBuilder, Color, FenError, Piece, Square, SquareError};
pub use cache::{EvalCache, EvalTable, NoCache};
pub use eval::{
    evaluate, evaluate_with, game_phase, Heuristics, ScoreVector, StandardHeuristics,
    MAX_GAME_PHASE,
};
