//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - piece identities
//! - `Square` - an on-board (rank, file) pair
//! - `Move` and `MoveKind` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;

pub(crate) use moves::MAX_PLY;
