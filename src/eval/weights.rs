//! Evaluation weight constants and saturating lookup tables.
//!
//! All values are read-only for the lifetime of the process and shared by
//! every evaluation; nothing here is mutated at runtime.

pub(crate) use crate::board::pst::PIECE_VALUES;

/// Bonus for the side to move.
pub(crate) const TEMPO: i32 = 10;

/// Bonus for holding both bishops.
pub(crate) const BISHOP_PAIR: i32 = 30;

/// Penalty for a knight pair; two knights are worth less than twice one.
pub(crate) const KNIGHT_PAIR: i32 = 8;

/// Penalty for a rook pair.
pub(crate) const ROOK_PAIR: i32 = 16;

/// Knight value adjustment by own pawn count (0-8): knights lose value as
/// pawns disappear.
pub(crate) const KNIGHT_PAWN_ADJUST: [i32; 9] = [-20, -16, -12, -8, -4, 0, 4, 8, 12];

/// Rook value adjustment by own pawn count (0-8): rooks gain value as
/// pawns disappear.
pub(crate) const ROOK_PAWN_ADJUST: [i32; 9] = [15, 12, 9, 6, 3, 0, -3, -6, -9];

/// Below this much non-pawn material a pawnless side cannot force mate
/// (roughly one minor piece).
pub(crate) const LONE_MINOR_THRESHOLD: i32 = 400;

/// Saturating king-danger curve, indexed by accumulated attacker weight.
///
/// Indices must be clamped into 0..100 before lookup; the tail is flat so
/// any legal overshoot saturates at 500.
#[rustfmt::skip]
pub(crate) const SAFETY_TABLE: [i32; 100] = [
      0,   0,   1,   2,   3,   5,   7,   9,  12,  15,
     18,  22,  26,  30,  35,  39,  44,  50,  56,  62,
     68,  75,  82,  85,  89,  97, 105, 113, 122, 131,
    140, 150, 169, 180, 191, 202, 213, 225, 237, 248,
    260, 272, 283, 295, 307, 319, 330, 342, 354, 366,
    377, 389, 401, 412, 424, 436, 448, 459, 471, 483,
    494, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
];
