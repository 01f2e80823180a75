//! Evaluation tests on whole positions.
//!
//! Term-level checks live next to the terms; these cover how the terms
//! combine and that the evaluator treats both colors alike.

use super::board;
use crate::board::{Board, Color};

/// Mirror a FEN vertically and swap the colors of every piece.
fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let placement: Vec<String> = parts[0]
        .split('/')
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect())
        .collect();
    let side = if parts[1] == "w" { "b" } else { "w" };
    // Castling and en passant never affect the score
    format!("{} {} - - 0 1", placement.join("/"), side)
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1",
    "4k3/1P6/8/8/3q4/8/6PP/6K1 w - - 0 1",
];

#[test]
fn test_mirrored_positions_negate() {
    for fen in POSITIONS {
        let original = board(fen);
        let mirrored = board(&mirror_fen(fen));
        assert_eq!(
            original.evaluate(),
            -mirrored.evaluate(),
            "asymmetric evaluation for {fen}"
        );
        assert_eq!(
            original.evaluate_for(Color::White),
            mirrored.evaluate_for(Color::Black),
            "side-relative score differs for {fen}"
        );
    }
}

#[test]
fn test_breakdown_terms_mirror() {
    let fen = POSITIONS[2];
    let a = board(fen).eval_breakdown();
    let b = board(&mirror_fen(fen)).eval_breakdown();
    assert_eq!(a.material, -b.material);
    assert_eq!(a.mobility, -b.mobility);
    assert_eq!(a.center, -b.center);
    assert_eq!(a.king_safety, -b.king_safety);
    assert_eq!(a.passed_pawns, -b.passed_pawns);
    assert_eq!(a.threats, -b.threats);
}

#[test]
fn test_kings_only_is_level() {
    let board = board("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(board.eval_material(), 0);
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_evaluate_ignores_side_to_move() {
    let white = board("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let black = board("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 4 4");
    assert_eq!(white.evaluate(), black.evaluate());
    assert_eq!(black.evaluate_for(Color::Black), -black.evaluate());
}

#[test]
fn test_material_edge_dominates() {
    // A clean extra rook outweighs any positional term
    let up = board("4k3/pppppppp/8/8/8/8/PPPPPPPP/R3K3 w - - 0 1");
    assert!(up.evaluate() > 300, "score {}", up.evaluate());
}

#[test]
fn test_advanced_passer_worth_more() {
    let far = board("4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
    let near = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    assert!(near.eval_passed_pawns() > far.eval_passed_pawns());
}

#[test]
fn test_hanging_queen_penalized() {
    // Black queen attacked by a pawn and undefended
    let hanging = board("4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1");
    let safe = board("4k3/8/8/3q4/8/4P3/8/4K3 b - - 0 1");
    assert!(hanging.eval_threats() > safe.eval_threats());
}

#[test]
fn test_start_position_breakdown() {
    let parts = Board::new().eval_breakdown();
    assert_eq!(parts, Default::default());
}
