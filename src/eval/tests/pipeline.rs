use crate::board::{Board, Color};
use crate::cache::NoCache;
use crate::eval::weights::TEMPO;
use crate::eval::{evaluate, game_phase};

#[test]
fn test_startpos_scores_tempo_for_side_to_move() {
    // Every other term cancels by symmetry in the starting position
    let board = Board::new();
    assert_eq!(evaluate(&board, &NoCache, false), TEMPO);
}

#[test]
fn test_startpos_is_symmetric_for_black() {
    let mut board = Board::new();
    board.set_side_to_move(Color::Black);
    assert_eq!(evaluate(&board, &NoCache, false), TEMPO);
}

#[test]
fn test_queen_advantage_dominates() {
    let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    assert!(evaluate(&board, &NoCache, false) > 700);
}

#[test]
fn test_score_is_relative_to_side_to_move() {
    let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        .parse()
        .unwrap();
    assert!(evaluate(&board, &NoCache, false) < -700);
}

#[test]
fn test_mirrored_position_scores_the_same() {
    // Mirroring swaps colors and the side to move, so the score relative
    // to the mover must not change
    let board: Board = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"
        .parse()
        .unwrap();
    assert_eq!(
        evaluate(&board, &NoCache, false),
        evaluate(&board.mirrored(), &NoCache, false)
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
        .parse()
        .unwrap();
    assert_eq!(
        evaluate(&board, &NoCache, false),
        evaluate(&board, &NoCache, false)
    );
}

#[test]
fn test_game_phase_startpos_is_full() {
    assert_eq!(game_phase(&Board::new()), 24);
}

#[test]
fn test_game_phase_bare_kings_is_zero() {
    let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    assert_eq!(game_phase(&board), 0);
}

#[test]
fn test_promotions_exceed_the_phase_ceiling_without_panic() {
    // Three extra queens push the raw phase past the ceiling; the
    // interpolation clamps and the evaluation still completes
    let board: Board = "QQQQkqqq/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    assert!(game_phase(&board) > 24);
    let _ = evaluate(&board, &NoCache, false);
}

#[test]
fn test_shield_rewards_the_castled_king() {
    // Identical material; only White's pawn cover differs. Queens keep the
    // phase above zero so the middlegame shield term participates.
    let covered: Board = "q5k1/5ppp/8/8/8/8/5PPP/Q5K1 w - - 0 1".parse().unwrap();
    let exposed: Board = "q5k1/5ppp/8/8/5PPP/8/8/Q5K1 w - - 0 1".parse().unwrap();
    assert!(
        evaluate(&covered, &NoCache, false) > evaluate(&exposed, &NoCache, false),
        "an intact pawn shield must outscore an advanced one"
    );
}
