//! Chess board representation and game logic.
//!
//! Uses an 8x8 mailbox for move generation and position evaluation.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use castle_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub(crate) mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{EngineError, FenError, MoveError, SquareError};
pub use eval::EvalBreakdown;
pub use fen::START_FEN;
pub use state::{Board, UnmakeInfo};
pub use status::GameStatus;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square, PROMOTION_KINDS,
};

// Public API - search functions and configuration
pub use search::{
    is_mate_score, mate_distance, search, SearchParams, SearchResult, SearchStats, SearchTables,
    DEFAULT_TT_MB, MATE_SCORE,
};

// Re-export search internals for users who need fine-grained control
pub use search::{mvv_lva, HistoryTable, KillerTable};

pub(crate) use types::MAX_PLY;
