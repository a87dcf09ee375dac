//! Tapered, cache-aware position evaluation.
//!
//! Scores are integers in centipawns, always from the side to move's point
//! of view. Internally every term is computed from White's point of view
//! and the sign is flipped once at the end for Black.
//!
//! The evaluation blends a middlegame and an endgame score by the amount of
//! non-pawn material left on the board (the game phase), then layers
//! phase-independent terms on top: material-imbalance adjustments, pawn
//! structure, blocked pieces, rook placement themes and a nonlinear
//! king-safety score. A low-material correction flattens or halves scores
//! in positions the stronger side cannot win.

mod king;
mod pawns;
mod pieces;
pub(crate) mod weights;

#[cfg(test)]
mod tests;

use crate::board::{Board, Color, Piece, Square};
use crate::cache::EvalCache;

use weights::{
    BISHOP_PAIR, KNIGHT_PAIR, KNIGHT_PAWN_ADJUST, LONE_MINOR_THRESHOLD, PIECE_VALUES, ROOK_PAIR,
    ROOK_PAWN_ADJUST, SAFETY_TABLE, TEMPO,
};

/// Game-phase value of the full opening piece set. The phase is clamped to
/// this ceiling, so promotions cannot push the middlegame weight past 1.
pub const MAX_GAME_PHASE: i32 = 24;

/// Per-evaluation accumulators, indexed by `Color::index()`.
///
/// A fresh vector is built for every evaluation; nothing in here survives
/// between calls, which is what makes concurrent evaluation safe without
/// locks.
#[derive(Clone, Debug, Default)]
pub struct ScoreVector {
    pub game_phase: i32,
    pub mg_mobility: [i32; 2],
    pub eg_mobility: [i32; 2],
    /// Number of pieces with at least one attack on the enemy king zone.
    pub attack_count: [i32; 2],
    /// Accumulated weight of those attacks; index into the safety table.
    pub attack_weight: [i32; 2],
    pub mg_tropism: [i32; 2],
    pub eg_tropism: [i32; 2],
    pub king_shield: [i32; 2],
    pub material_adjust: [i32; 2],
    pub blockages: [i32; 2],
    pub positional_themes: [i32; 2],
}

/// The positional heuristics the evaluation pipeline delegates to.
///
/// [`StandardHeuristics`] is the production set; tests substitute
/// instrumented implementations to observe how often the pipeline calls
/// back in (for example, to prove a cache hit short-circuits evaluation).
pub trait Heuristics {
    /// Score one knight, bishop, rook or queen: mobility, king tropism and
    /// king-zone attacks, plus piece-specific themes. Never called for
    /// pawns or kings.
    fn evaluate_piece(&self, board: &Board, sq: Square, color: Color, piece: Piece, v: &mut ScoreVector);

    /// Pawn-structure score from White's point of view.
    fn pawn_structure(&self, board: &Board) -> i32;

    /// Pawn-shield score in front of this side's king.
    fn king_shield(&self, board: &Board, color: Color) -> i32;

    /// Penalties for structurally trapped or blocked pieces, accumulated
    /// into `v.blockages`.
    fn blocked_pieces(&self, board: &Board, color: Color, v: &mut ScoreVector);
}

/// The default heuristic set.
pub struct StandardHeuristics;

impl Heuristics for StandardHeuristics {
    fn evaluate_piece(&self, board: &Board, sq: Square, color: Color, piece: Piece, v: &mut ScoreVector) {
        match piece {
            Piece::Knight => pieces::evaluate_knight(board, sq, color, v),
            Piece::Bishop => pieces::evaluate_bishop(board, sq, color, v),
            Piece::Rook => pieces::evaluate_rook(board, sq, color, v),
            Piece::Queen => pieces::evaluate_queen(board, sq, color, v),
            Piece::Pawn | Piece::King => {
                debug_assert!(false, "pawns and kings are scored by the pipeline itself")
            }
        }
    }

    fn pawn_structure(&self, board: &Board) -> i32 {
        pawns::pawn_structure(board)
    }

    fn king_shield(&self, board: &Board, color: Color) -> i32 {
        king::king_shield(board, color)
    }

    fn blocked_pieces(&self, board: &Board, color: Color, v: &mut ScoreVector) {
        king::blocked_pieces(board, color, v);
    }
}

/// Evaluate a position with the standard heuristics.
///
/// Returns a centipawn score relative to the side to move. With `use_cache`
/// set, the cache is probed before any work and the final score is stored
/// after; with it clear, the cache is neither read nor written.
#[must_use]
pub fn evaluate<C: EvalCache>(board: &Board, cache: &C, use_cache: bool) -> i32 {
    evaluate_with(board, cache, use_cache, &StandardHeuristics)
}

/// Evaluate a position with a caller-supplied heuristic set.
#[must_use]
pub fn evaluate_with<C: EvalCache, H: Heuristics>(
    board: &Board,
    cache: &C,
    use_cache: bool,
    heuristics: &H,
) -> i32 {
    let key = board.hash();
    if use_cache {
        if let Some(score) = cache.probe(key) {
            #[cfg(feature = "logging")]
            log::trace!("eval cache hit: key={key:016x} score={score}");
            return score;
        }
    }

    let mut v = ScoreVector::default();
    let white_pov = raw_evaluate(board, heuristics, &mut v);
    let corrected = draw_correction(board, white_pov);
    let score = match board.side_to_move() {
        Color::White => corrected,
        Color::Black => -corrected,
    };

    if use_cache {
        cache.store(key, score);
    }
    score
}

/// Sum of the phase contributions of all non-pawn pieces on the board.
///
/// 24 at full opening material, 0 with bare kings and pawns. Promotions can
/// exceed [`MAX_GAME_PHASE`]; the interpolation clamps.
#[must_use]
pub fn game_phase(board: &Board) -> i32 {
    let mut phase = 0;
    for color in Color::BOTH {
        for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            phase += piece.phase() * board.piece_count(color, piece) as i32;
        }
    }
    phase
}

/// Full evaluation from White's point of view, before the low-material
/// draw correction and the side-to-move sign flip.
fn raw_evaluate<H: Heuristics>(board: &Board, heuristics: &H, v: &mut ScoreVector) -> i32 {
    v.game_phase = game_phase(board);

    let mut mg = board.piece_material(Color::White) + board.pawn_material(Color::White)
        + board.pcsq_mg[0]
        - board.piece_material(Color::Black)
        - board.pawn_material(Color::Black)
        - board.pcsq_mg[1];
    let mut eg = board.piece_material(Color::White) + board.pawn_material(Color::White)
        + board.pcsq_eg[0]
        - board.piece_material(Color::Black)
        - board.pawn_material(Color::Black)
        - board.pcsq_eg[1];

    for color in Color::BOTH {
        let c = color.index();
        v.king_shield[c] = heuristics.king_shield(board, color);
        heuristics.blocked_pieces(board, color, v);
    }
    // Shelter only matters while enough material is left to attack the king
    mg += v.king_shield[0] - v.king_shield[1];

    let mut result = match board.side_to_move() {
        Color::White => TEMPO,
        Color::Black => -TEMPO,
    };

    material_adjustments(board, v);
    result += heuristics.pawn_structure(board);

    for rank in 0..8 {
        for file in 0..8 {
            let sq = Square(rank, file);
            if let Some((color, piece)) = board.piece_at(sq) {
                if !matches!(piece, Piece::Pawn | Piece::King) {
                    heuristics.evaluate_piece(board, sq, color, piece, v);
                }
            }
        }
    }

    mg += v.mg_mobility[0] - v.mg_mobility[1] + v.mg_tropism[0] - v.mg_tropism[1];
    eg += v.eg_mobility[0] - v.eg_mobility[1] + v.eg_tropism[0] - v.eg_tropism[1];

    let mg_weight = v.game_phase.min(MAX_GAME_PHASE);
    let eg_weight = MAX_GAME_PHASE - mg_weight;
    result += (mg * mg_weight + eg * eg_weight) / MAX_GAME_PHASE;

    result += v.blockages[0] - v.blockages[1];
    result += v.positional_themes[0] - v.positional_themes[1];
    result += v.material_adjust[0] - v.material_adjust[1];
    result += king_safety(board, v);

    result
}

/// Material-imbalance adjustments: pair bonuses and penalties, plus knight
/// and rook value shifts driven by the own pawn count.
pub(crate) fn material_adjustments(board: &Board, v: &mut ScoreVector) {
    for color in Color::BOTH {
        let c = color.index();
        if board.piece_count(color, Piece::Bishop) > 1 {
            v.material_adjust[c] += BISHOP_PAIR;
        }
        if board.piece_count(color, Piece::Knight) > 1 {
            v.material_adjust[c] -= KNIGHT_PAIR;
        }
        if board.piece_count(color, Piece::Rook) > 1 {
            v.material_adjust[c] -= ROOK_PAIR;
        }

        let pawns = board.piece_count(color, Piece::Pawn).min(8) as usize;
        v.material_adjust[c] +=
            KNIGHT_PAWN_ADJUST[pawns] * board.piece_count(color, Piece::Knight) as i32;
        v.material_adjust[c] +=
            ROOK_PAWN_ADJUST[pawns] * board.piece_count(color, Piece::Rook) as i32;
    }
}

/// Merge the per-side attack accumulators into a king-safety score.
///
/// A side's attack weight is zeroed unless at least two of its pieces
/// attack the enemy king zone and it still has a queen; the surviving
/// weight indexes the saturating safety table.
pub(crate) fn king_safety(board: &Board, v: &mut ScoreVector) -> i32 {
    for color in Color::BOTH {
        let c = color.index();
        if v.attack_count[c] < 2 || board.piece_count(color, Piece::Queen) == 0 {
            v.attack_weight[c] = 0;
        }
    }
    safety_score(v.attack_weight[0]) - safety_score(v.attack_weight[1])
}

fn safety_score(weight: i32) -> i32 {
    SAFETY_TABLE[weight.clamp(0, SAFETY_TABLE.len() as i32 - 1) as usize]
}

/// Flatten or halve the score in low-material positions the stronger side
/// cannot win. Applied to the White-relative score.
pub(crate) fn draw_correction(board: &Board, score: i32) -> i32 {
    // A score of exactly zero treats Black as the stronger side; the
    // outcome is identical either way, but the branch must be fixed so
    // evaluation stays deterministic.
    let stronger = if score > 0 { Color::White } else { Color::Black };
    let weaker = stronger.opponent();

    if board.pawn_material(stronger) > 0 {
        return score;
    }

    let strong_pieces = board.piece_material(stronger);
    let weak_pieces = board.piece_material(weaker);
    let knight = PIECE_VALUES[Piece::Knight.index()];
    let bishop = PIECE_VALUES[Piece::Bishop.index()];
    let rook = PIECE_VALUES[Piece::Rook.index()];

    // A bare king or a lone minor cannot mate
    if strong_pieces < LONE_MINOR_THRESHOLD {
        return 0;
    }
    // Two knights cannot force mate against a bare king
    if board.pawn_material(weaker) == 0 && strong_pieces == 2 * knight {
        return 0;
    }

    // Notoriously drawish piece configurations keep their sign but are
    // halved: R vs minor, and R + minor vs R
    if strong_pieces == rook && (weak_pieces == bishop || weak_pieces == knight) {
        return score / 2;
    }
    if (strong_pieces == rook + bishop || strong_pieces == rook + knight) && weak_pieces == rook {
        return score / 2;
    }

    score
}
