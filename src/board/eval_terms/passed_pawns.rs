//! Passed pawn evaluation.
//!
//! A pawn is passed when no enemy pawn stands ahead of it on its own or an
//! adjacent file. The bonus grows with every rank advanced and with the
//! owner's king closing in to escort it.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, PieceKind, Square};

use super::tables::{PASSED_BASE, PASSED_KING_ESCORT, PASSED_PER_RANK};

impl Board {
    /// Evaluate passed pawns.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_passed_pawns(&self) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            let king = self.king_square(color);
            for (sq, piece) in self.pieces_of(color) {
                if piece.kind != PieceKind::Pawn || !self.is_passed_pawn(sq, color) {
                    continue;
                }
                let advanced = color.relative_rank(sq.rank()).saturating_sub(1) as i32;
                let escort = king.map_or(0, |k| 7 - k.chebyshev_distance(sq) as i32);
                score += color.sign()
                    * (PASSED_BASE + PASSED_PER_RANK * advanced + PASSED_KING_ESCORT * escort);
            }
        }
        score
    }

    /// True if no enemy pawn can ever block or capture the pawn on `sq`.
    #[must_use]
    pub fn is_passed_pawn(&self, sq: Square, color: Color) -> bool {
        let enemy_pawn = Piece::new(PieceKind::Pawn, color.opponent());
        let mut ahead = sq;
        while let Some(next) = ahead.offset(color.pawn_direction(), 0) {
            for df in -1..=1 {
                if next
                    .offset(0, df)
                    .is_some_and(|s| self.piece_at(s) == Some(enemy_pawn))
                {
                    return false;
                }
            }
            ahead = next;
        }
        true
    }
}
