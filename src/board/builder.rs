//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use castle_engine::board::{BoardBuilder, Color, Piece, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Piece::new(PieceKind::King, Color::White))
//!     .piece(e8, Piece::new(PieceKind::King, Color::Black))
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.board.castling_rights.set(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.board.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.board.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.board.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number (at least 1).
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.board.fullmove_number = number.max(1);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
