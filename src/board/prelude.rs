//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use castle_engine::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.game_status(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CastlingRights, Color, FenError, GameStatus, Move, MoveError,
    MoveKind, Piece, PieceKind, Square, SquareError,
};
pub use crate::engine::{Engine, MoveChoice};
