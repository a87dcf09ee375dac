use crate::board::Board;
use crate::cache::NoCache;
use crate::eval::{draw_correction, evaluate, raw_evaluate, ScoreVector, StandardHeuristics};

fn raw(board: &Board) -> i32 {
    let mut v = ScoreVector::default();
    raw_evaluate(board, &StandardHeuristics, &mut v)
}

#[test]
fn test_lone_bishop_cannot_win() {
    let board: Board = "k7/8/8/8/8/8/5B2/4K3 w - - 0 1".parse().unwrap();
    assert_eq!(evaluate(&board, &NoCache, false), 0);
}

#[test]
fn test_lone_knight_for_black_cannot_win() {
    let board: Board = "1n2k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    assert_eq!(evaluate(&board, &NoCache, false), 0);
}

#[test]
fn test_two_knights_cannot_force_mate() {
    let board: Board = "k7/8/8/8/8/8/1NN5/4K3 w - - 0 1".parse().unwrap();
    assert_eq!(evaluate(&board, &NoCache, false), 0);
}

#[test]
fn test_two_knights_against_a_pawn_still_count() {
    // The defender's pawn gives the knights something to win against
    let board: Board = "k7/p7/8/8/8/8/1NN5/4K3 w - - 0 1".parse().unwrap();
    assert!(evaluate(&board, &NoCache, false) > 0);
}

#[test]
fn test_rook_vs_bishop_is_halved() {
    let board: Board = "kb6/8/8/8/8/8/8/1KR5 w - - 0 1".parse().unwrap();
    let full = raw(&board);
    assert!(full > 0);
    assert_eq!(draw_correction(&board, full), full / 2);
    assert_eq!(evaluate(&board, &NoCache, false), full / 2);
}

#[test]
fn test_rook_vs_knight_is_halved() {
    let board: Board = "kn6/8/8/8/8/8/8/1KR5 w - - 0 1".parse().unwrap();
    let full = raw(&board);
    assert!(full > 0);
    assert_eq!(evaluate(&board, &NoCache, false), full / 2);
}

#[test]
fn test_rook_and_minor_vs_rook_is_halved() {
    let board: Board = "kr6/8/8/8/8/8/8/1KRB4 w - - 0 1".parse().unwrap();
    let full = raw(&board);
    assert!(full > 0);
    assert_eq!(evaluate(&board, &NoCache, false), full / 2);

    let board: Board = "kr6/8/8/8/8/8/8/1KRN4 w - - 0 1".parse().unwrap();
    let full = raw(&board);
    assert!(full > 0);
    assert_eq!(evaluate(&board, &NoCache, false), full / 2);
}

#[test]
fn test_pawns_disable_the_correction() {
    let board: Board = "kb6/8/8/8/8/8/P7/1KR5 w - - 0 1".parse().unwrap();
    assert_eq!(draw_correction(&board, 300), 300);
}

#[test]
fn test_king_and_pawn_can_win() {
    let board: Board = "k7/8/8/8/8/8/P7/K7 w - - 0 1".parse().unwrap();
    assert!(evaluate(&board, &NoCache, false) > 0);
}

#[test]
fn test_zero_score_stays_zero() {
    let board: Board = "k7/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    assert_eq!(draw_correction(&board, 0), 0);
}

#[test]
fn test_negative_halving_truncates_toward_zero() {
    // Black is the stronger, pawnless side with rook vs knight
    let board: Board = "kr6/8/8/8/8/8/8/1KN5 w - - 0 1".parse().unwrap();
    assert_eq!(draw_correction(&board, -75), -37);
}
