//! Pawn-structure evaluation: passed, isolated and doubled pawns.

use crate::board::{Bitboard, Board, Color, Piece};

const DOUBLED_PAWN: i32 = 10;
const ISOLATED_PAWN: i32 = 10;

/// Passed-pawn bonus by the pawn's rank in its own orientation. Index 0
/// and 7 are unreachable for a pawn.
const PASSED_PAWN: [i32; 8] = [0, 10, 15, 25, 40, 70, 120, 0];

/// Pawn-structure score, White minus Black.
pub(super) fn pawn_structure(board: &Board) -> i32 {
    side_score(board, Color::White) - side_score(board, Color::Black)
}

fn side_score(board: &Board, color: Color) -> i32 {
    let own = board.pieces[color.index()][Piece::Pawn.index()];
    let enemy = board.pieces[color.opponent().index()][Piece::Pawn.index()];
    let mut score = 0;

    for sq in own.iter() {
        let front = forward_ranks(color, sq.rank());
        let span = front
            & (Bitboard::file_mask(sq.file()) | Bitboard::adjacent_files_mask(sq.file())).0;
        // Passed: no enemy pawn ahead on this or a neighboring file, and no
        // own pawn ahead on the same file (the rearmost of doubled pawns is
        // not passed)
        if enemy.0 & span == 0 && own.0 & front & Bitboard::file_mask(sq.file()).0 == 0 {
            score += PASSED_PAWN[color.relative_square(sq).rank()];
        }

        if (own & Bitboard::adjacent_files_mask(sq.file())).is_empty() {
            score -= ISOLATED_PAWN;
        }
    }

    for file in 0..8 {
        let on_file = (own & Bitboard::file_mask(file)).popcount() as i32;
        if on_file > 1 {
            score -= DOUBLED_PAWN * (on_file - 1);
        }
    }

    score
}

/// All squares strictly ahead of `rank` in this side's pawn direction.
fn forward_ranks(color: Color, rank: usize) -> u64 {
    match color {
        Color::White => {
            if rank >= 7 {
                0
            } else {
                !0u64 << (8 * (rank + 1))
            }
        }
        Color::Black => {
            if rank == 0 {
                0
            } else {
                !0u64 >> (8 * (8 - rank))
            }
        }
    }
}
