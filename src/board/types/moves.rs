//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Deepest ply the per-ply search tables track.
pub(crate) const MAX_PLY: usize = 64;

/// What a move does beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    /// Pawn captures the pawn that just double-stepped past it.
    EnPassant,
    /// King steps two squares; the rook jumps to the square it crossed.
    Castling,
    /// Pawn reaches the last rank and becomes the given kind.
    Promotion(PieceKind),
}

/// A fully described move.
///
/// `captured` is filled in by the generator from the position the move was
/// generated in, so ordering and killer bookkeeping never need the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub kind: MoveKind,
    pub captured: Option<PieceKind>,
}

impl Move {
    /// Create a plain move (quiet or capture)
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square, piece: Piece, captured: Option<PieceKind>) -> Self {
        Move {
            from,
            to,
            piece,
            kind: MoveKind::Normal,
            captured,
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            kind: MoveKind::EnPassant,
            captured: Some(PieceKind::Pawn),
        }
    }

    /// Create a castling move; `to` is the king's destination
    #[inline]
    #[must_use]
    pub const fn castling(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            kind: MoveKind::Castling,
            captured: None,
        }
    }

    /// Create a promotion move (capturing or not)
    #[inline]
    #[must_use]
    pub const fn promotion(
        from: Square,
        to: Square,
        piece: Piece,
        promote_to: PieceKind,
        captured: Option<PieceKind>,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            kind: MoveKind::Promotion(promote_to),
            captured,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.kind == MoveKind::Castling
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Get the promotion piece kind, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// Same move with a different promotion choice. Non-promotions are
    /// returned unchanged.
    #[must_use]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match self.kind {
            MoveKind::Promotion(_) => Move {
                kind: MoveKind::Promotion(kind),
                ..self
            },
            _ => self,
        }
    }

    /// True if both moves go between the same squares with the same
    /// promotion choice. Killer slots compare this way.
    #[inline]
    #[must_use]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion_kind() == other.promotion_kind()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion_kind() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.to_char())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion_kind() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
