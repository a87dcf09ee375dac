//! Per-piece positional heuristics: mobility, king tropism, king-zone
//! attacks and piece-specific themes.
//!
//! All scores are accumulated into the caller's [`ScoreVector`] on the
//! moving side's index; the pipeline takes White-minus-Black differences at
//! the end. Every square pattern is written from White's point of view and
//! reflected through [`Color::relative_square`] for Black.

use super::ScoreVector;
use crate::board::attack_tables::{slider_attacks, KING_ATTACKS, KNIGHT_ATTACKS};
use crate::board::{Bitboard, Board, Color, Piece, Square};

// Mobility weights per phase and the mobility count treated as neutral.
const KNIGHT_MOB_MG: i32 = 4;
const KNIGHT_MOB_EG: i32 = 4;
const KNIGHT_MOB_BASE: i32 = 4;
const BISHOP_MOB_MG: i32 = 3;
const BISHOP_MOB_EG: i32 = 3;
const BISHOP_MOB_BASE: i32 = 7;
const ROOK_MOB_MG: i32 = 2;
const ROOK_MOB_EG: i32 = 4;
const ROOK_MOB_BASE: i32 = 7;
const QUEEN_MOB_MG: i32 = 1;
const QUEEN_MOB_EG: i32 = 2;
const QUEEN_MOB_BASE: i32 = 14;

// King-zone attack weights feeding the safety table.
const KNIGHT_ATTACK_WEIGHT: i32 = 2;
const BISHOP_ATTACK_WEIGHT: i32 = 2;
const ROOK_ATTACK_WEIGHT: i32 = 3;
const QUEEN_ATTACK_WEIGHT: i32 = 4;

const ROOK_OPEN_FILE: i32 = 10;
const ROOK_SEMI_OPEN_FILE: i32 = 5;
const ROOK_ON_SEVENTH: i32 = 20;
const QUEEN_EARLY_DEVELOPMENT: i32 = 2;

pub(super) fn evaluate_knight(board: &Board, sq: Square, color: Color, v: &mut ScoreVector) {
    let c = color.index();
    let attacks = KNIGHT_ATTACKS[sq.as_index()];
    let mob = mobility(board, color, attacks);

    v.mg_mobility[c] += KNIGHT_MOB_MG * (mob - KNIGHT_MOB_BASE);
    v.eg_mobility[c] += KNIGHT_MOB_EG * (mob - KNIGHT_MOB_BASE);

    king_pressure(board, sq, color, attacks, 3, 3, KNIGHT_ATTACK_WEIGHT, v);
}

pub(super) fn evaluate_bishop(board: &Board, sq: Square, color: Color, v: &mut ScoreVector) {
    let c = color.index();
    let attacks = slider_attacks(sq.as_index(), board.all_occupied.0, true);
    let mob = mobility(board, color, attacks);

    v.mg_mobility[c] += BISHOP_MOB_MG * (mob - BISHOP_MOB_BASE);
    v.eg_mobility[c] += BISHOP_MOB_EG * (mob - BISHOP_MOB_BASE);

    king_pressure(board, sq, color, attacks, 2, 1, BISHOP_ATTACK_WEIGHT, v);
}

pub(super) fn evaluate_rook(board: &Board, sq: Square, color: Color, v: &mut ScoreVector) {
    let c = color.index();
    let enemy = color.opponent();
    let attacks = slider_attacks(sq.as_index(), board.all_occupied.0, false);
    let mob = mobility(board, color, attacks);

    v.mg_mobility[c] += ROOK_MOB_MG * (mob - ROOK_MOB_BASE);
    v.eg_mobility[c] += ROOK_MOB_EG * (mob - ROOK_MOB_BASE);

    king_pressure(board, sq, color, attacks, 2, 1, ROOK_ATTACK_WEIGHT, v);

    let own_pawns = board.pieces[c][Piece::Pawn.index()];
    let enemy_pawns = board.pieces[enemy.index()][Piece::Pawn.index()];
    let file = Bitboard::file_mask(sq.file());
    if (own_pawns & file).is_empty() {
        v.positional_themes[c] += if (enemy_pawns & file).is_empty() {
            ROOK_OPEN_FILE
        } else {
            ROOK_SEMI_OPEN_FILE
        };
    }

    // A rook on the seventh is only worth the name while it attacks
    // something there: enemy pawns on the rank, or the king cut off behind
    if sq.rank() == color.seventh_rank() {
        let seventh = Bitboard::rank_mask(color.seventh_rank());
        let king_on_eighth = board
            .king_square(enemy)
            .is_some_and(|k| k.rank() == enemy.back_rank());
        if !(enemy_pawns & seventh).is_empty() || king_on_eighth {
            v.positional_themes[c] += ROOK_ON_SEVENTH;
        }
    }
}

pub(super) fn evaluate_queen(board: &Board, sq: Square, color: Color, v: &mut ScoreVector) {
    let c = color.index();
    let attacks = slider_attacks(sq.as_index(), board.all_occupied.0, true)
        | slider_attacks(sq.as_index(), board.all_occupied.0, false);
    let mob = mobility(board, color, attacks);

    v.mg_mobility[c] += QUEEN_MOB_MG * (mob - QUEEN_MOB_BASE);
    v.eg_mobility[c] += QUEEN_MOB_EG * (mob - QUEEN_MOB_BASE);

    king_pressure(board, sq, color, attacks, 2, 4, QUEEN_ATTACK_WEIGHT, v);

    // Queen sorties ahead of the minor pieces lose time to development
    if color.relative_square(sq).rank() > 1 {
        const HOME_MINORS: [(usize, Piece); 4] = [
            (1, Piece::Knight),
            (6, Piece::Knight),
            (2, Piece::Bishop),
            (5, Piece::Bishop),
        ];
        for (home_file, minor) in HOME_MINORS {
            let home = color.relative_square(Square(0, home_file));
            if board.piece_at(home) == Some((color, minor)) {
                v.positional_themes[c] -= QUEEN_EARLY_DEVELOPMENT;
            }
        }
    }
}

/// Attack squares not occupied by the piece's own side.
fn mobility(board: &Board, color: Color, attacks: u64) -> i32 {
    (attacks & !board.occupied[color.index()].0).count_ones() as i32
}

/// Tropism toward the enemy king plus king-zone attack accounting.
///
/// The king zone is the enemy king's square and its neighbors. A piece
/// attacking any zone square bumps the attacker count once and adds its
/// weight per attacked zone square.
fn king_pressure(
    board: &Board,
    sq: Square,
    color: Color,
    attacks: u64,
    tropism_mg: i32,
    tropism_eg: i32,
    attack_weight: i32,
    v: &mut ScoreVector,
) {
    let c = color.index();
    let Some(enemy_king) = board.king_square(color.opponent()) else {
        return;
    };

    let tropism = 7 - sq.distance(enemy_king);
    v.mg_tropism[c] += tropism_mg * tropism;
    v.eg_tropism[c] += tropism_eg * tropism;

    let zone = KING_ATTACKS[enemy_king.as_index()] | Bitboard::from_square(enemy_king).0;
    let zone_attacks = (attacks & zone).count_ones() as i32;
    if zone_attacks > 0 {
        v.attack_count[c] += 1;
        v.attack_weight[c] += attack_weight * zone_attacks;
    }
}
