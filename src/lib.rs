//! Chess rules engine with an alpha-beta AI opponent.
//!
//! [`board`] holds the rules: position state, legal move generation, attack
//! detection, evaluation and search. [`engine`] wraps the search in an
//! opponent that can run on a background thread.
//!
//! # Example
//! ```
//! use castle_engine::board::{Board, Color, SearchParams};
//! use castle_engine::engine::{Engine, MoveChoice};
//!
//! let board = Board::new();
//! let mut engine = Engine::with_seed(SearchParams::depth(2), 7);
//! match engine.choose_move(&board, Color::White) {
//!     MoveChoice::Play { mv, .. } => assert!(board.legal_moves(Color::White).contains(&mv)),
//!     MoveChoice::GameOver(status) => panic!("unexpected {status}"),
//! }
//! ```

#[macro_use]
mod logging;

pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, GameStatus, Move, Piece, PieceKind, Square};
pub use engine::{Engine, EngineController, MoveChoice};
pub use tt::TranspositionTable;
