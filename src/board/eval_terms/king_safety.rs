//! King safety evaluation.
//!
//! Three parts per side:
//! - pawn shield on the three squares in front of the king
//! - enemy pieces in the 5x5 box around the king, weighted by value and
//!   inverse Manhattan distance
//! - a penalty when no pawn of either color stands on the king's file

use crate::board::state::Board;
use crate::board::types::{Color, Piece, PieceKind, Square};

use super::tables::{KING_OPEN_FILE, KING_PROXIMITY_DIVISOR, KING_ZONE_RADIUS, PAWN_SHIELD};

impl Board {
    /// Evaluate king safety for both sides.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_king_safety(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.king_safety_for(color))
            .sum()
    }

    fn king_safety_for(&self, color: Color) -> i32 {
        let Some(king) = self.king_square(color) else {
            return 0;
        };
        let mut score = 0;

        let own_pawn = Piece::new(PieceKind::Pawn, color);
        for df in -1..=1 {
            if let Some(sq) = king.offset(color.pawn_direction(), df) {
                if self.piece_at(sq) == Some(own_pawn) {
                    score += PAWN_SHIELD;
                }
            }
        }

        for dr in -KING_ZONE_RADIUS..=KING_ZONE_RADIUS {
            for df in -KING_ZONE_RADIUS..=KING_ZONE_RADIUS {
                let Some(sq) = king.offset(dr, df) else {
                    continue;
                };
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color != color {
                        let distance = dr.abs() + df.abs();
                        score -= piece.value() / (KING_PROXIMITY_DIVISOR * distance);
                    }
                }
            }
        }

        let file_has_pawn = (0..8).any(|rank| {
            self.piece_at(Square::new_unchecked(rank, king.file()))
                .is_some_and(|piece| piece.kind == PieceKind::Pawn)
        });
        if !file_has_pawn {
            score -= KING_OPEN_FILE;
        }

        score
    }
}
