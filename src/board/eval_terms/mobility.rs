//! Mobility and center control.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind, Square};

use super::helpers::AttackMap;
use super::tables::{
    CENTER_ATTACK, CENTER_PAWN_OCCUPANT, CENTER_PIECE_OCCUPANT, CENTER_SQUARES, MOBILITY_PER_MOVE,
};

impl Board {
    /// Evaluate mobility for knights, bishops, rooks and queens.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_mobility(&self) -> i32 {
        self.pieces()
            .filter(|(_, piece)| piece.kind.is_minor_or_major())
            .map(|(sq, piece)| {
                piece.color.sign() * self.piece_mobility(sq, piece) as i32 * MOBILITY_PER_MOVE
            })
            .sum()
    }

    /// Occupation of and attacks on d4, e4, d5, e5.
    pub(crate) fn eval_center_with_map(&self, map: &AttackMap) -> i32 {
        let mut score = 0;
        for (rank, file) in CENTER_SQUARES {
            let sq = Square::new_unchecked(rank, file);
            if let Some(piece) = self.piece_at(sq) {
                let bonus = if piece.kind == PieceKind::Pawn {
                    CENTER_PAWN_OCCUPANT
                } else {
                    CENTER_PIECE_OCCUPANT
                };
                score += piece.color.sign() * bonus;
            }
            for color in Color::BOTH {
                score += color.sign() * i32::from(map.count(color, sq)) * CENTER_ATTACK;
            }
        }
        score
    }
}
