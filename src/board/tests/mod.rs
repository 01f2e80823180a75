//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Evaluation terms on hand-picked positions
//! - `search.rs` - Search behaviour and agreement with plain minimax
//! - `proptest.rs` - Property-based tests

mod eval;
mod perft;

use crate::board::{Board, Move, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid fen")
}

/// The legal move written in coordinate notation, panicking if absent.
fn legal(board: &Board, text: &str) -> Move {
    board
        .parse_move(text)
        .unwrap_or_else(|err| panic!("{text} should be legal: {err}"))
}
