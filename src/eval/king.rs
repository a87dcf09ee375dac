//! King shelter and blocked-piece heuristics.
//!
//! All patterns are written from White's point of view and reflected
//! through [`Color::relative_square`] for Black.

use super::ScoreVector;
use crate::board::{Board, Color, Piece, Square};

const SHIELD_RANK_2: i32 = 10;
const SHIELD_RANK_3: i32 = 5;

const P_KNIGHT_TRAPPED_A8: i32 = 150;
const P_KNIGHT_TRAPPED_A7: i32 = 100;
const P_BISHOP_TRAPPED_A7: i32 = 100;
const P_BISHOP_TRAPPED_A6: i32 = 50;
const P_BLOCK_CENTRAL_PAWN: i32 = 24;
const P_KING_BLOCKS_ROOK: i32 = 24;
const P_C3_KNIGHT: i32 = 5;

/// Pawn-shield score in front of the king.
///
/// Only counted for a king on the wing files; a shield pawn on its start
/// rank is worth more than one already pushed a square.
pub(super) fn king_shield(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let king_file = color.relative_square(king).file();
    let files: std::ops::Range<usize> = if king_file > 4 {
        5..8
    } else if king_file < 3 {
        0..3
    } else {
        return 0;
    };

    let mut shield = 0;
    for file in files {
        if own_pawn(board, color, Square(1, file)) {
            shield += SHIELD_RANK_2;
        } else if own_pawn(board, color, Square(2, file)) {
            shield += SHIELD_RANK_3;
        }
    }
    shield
}

/// Penalties for trapped and blocked pieces, accumulated into
/// `v.blockages` for this side.
pub(super) fn blocked_pieces(board: &Board, color: Color, v: &mut ScoreVector) {
    let c = color.index();
    let mut penalty = 0;

    // Knight trapped in the corner behind enemy pawns
    if own(board, color, Square(7, 0), Piece::Knight)
        && (enemy_pawn(board, color, Square(6, 0)) || enemy_pawn(board, color, Square(6, 2)))
    {
        penalty += P_KNIGHT_TRAPPED_A8;
    }
    if own(board, color, Square(7, 7), Piece::Knight)
        && (enemy_pawn(board, color, Square(6, 7)) || enemy_pawn(board, color, Square(6, 5)))
    {
        penalty += P_KNIGHT_TRAPPED_A8;
    }
    if own(board, color, Square(6, 0), Piece::Knight)
        && enemy_pawn(board, color, Square(5, 0))
        && enemy_pawn(board, color, Square(6, 1))
    {
        penalty += P_KNIGHT_TRAPPED_A7;
    }
    if own(board, color, Square(6, 7), Piece::Knight)
        && enemy_pawn(board, color, Square(5, 7))
        && enemy_pawn(board, color, Square(6, 6))
    {
        penalty += P_KNIGHT_TRAPPED_A7;
    }

    // Bishop trapped on a7/h7 or a6/h6 by an enemy pawn chain
    if own(board, color, Square(6, 0), Piece::Bishop) && enemy_pawn(board, color, Square(5, 1)) {
        penalty += P_BISHOP_TRAPPED_A7;
    }
    if own(board, color, Square(6, 7), Piece::Bishop) && enemy_pawn(board, color, Square(5, 6)) {
        penalty += P_BISHOP_TRAPPED_A7;
    }
    if own(board, color, Square(5, 0), Piece::Bishop) && enemy_pawn(board, color, Square(4, 1)) {
        penalty += P_BISHOP_TRAPPED_A6;
    }
    if own(board, color, Square(5, 7), Piece::Bishop) && enemy_pawn(board, color, Square(4, 6)) {
        penalty += P_BISHOP_TRAPPED_A6;
    }

    // Undeveloped bishop holding a blocked central pawn in place
    if own(board, color, Square(0, 2), Piece::Bishop)
        && own(board, color, Square(1, 3), Piece::Pawn)
        && occupied(board, color, Square(2, 3))
    {
        penalty += P_BLOCK_CENTRAL_PAWN;
    }
    if own(board, color, Square(0, 5), Piece::Bishop)
        && own(board, color, Square(1, 4), Piece::Pawn)
        && occupied(board, color, Square(2, 4))
    {
        penalty += P_BLOCK_CENTRAL_PAWN;
    }

    // Uncastled king shutting its own rook in the corner
    if (own(board, color, Square(0, 5), Piece::King) || own(board, color, Square(0, 6), Piece::King))
        && (own(board, color, Square(0, 6), Piece::Rook)
            || own(board, color, Square(0, 7), Piece::Rook))
    {
        penalty += P_KING_BLOCKS_ROOK;
    }
    if (own(board, color, Square(0, 1), Piece::King) || own(board, color, Square(0, 2), Piece::King))
        && (own(board, color, Square(0, 0), Piece::Rook)
            || own(board, color, Square(0, 1), Piece::Rook))
    {
        penalty += P_KING_BLOCKS_ROOK;
    }

    // c3 knight in front of the c-pawn with a d4 pawn and no e4 pawn
    if own(board, color, Square(2, 2), Piece::Knight)
        && own(board, color, Square(1, 2), Piece::Pawn)
        && own(board, color, Square(3, 3), Piece::Pawn)
        && !own(board, color, Square(3, 4), Piece::Pawn)
    {
        penalty += P_C3_KNIGHT;
    }

    v.blockages[c] -= penalty;
}

fn own(board: &Board, color: Color, rel: Square, piece: Piece) -> bool {
    let sq = color.relative_square(rel);
    board.pieces[color.index()][piece.index()].contains(sq)
}

fn own_pawn(board: &Board, color: Color, rel: Square) -> bool {
    own(board, color, rel, Piece::Pawn)
}

fn enemy_pawn(board: &Board, color: Color, rel: Square) -> bool {
    let sq = color.relative_square(rel);
    board.pieces[color.opponent().index()][Piece::Pawn.index()].contains(sq)
}

fn occupied(board: &Board, color: Color, rel: Square) -> bool {
    board.all_occupied.contains(color.relative_square(rel))
}
