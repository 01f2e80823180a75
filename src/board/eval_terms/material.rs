//! Material and pawn placement.

use crate::board::state::Board;
use crate::board::types::PieceKind;

use super::tables::PAWN_PST;

impl Board {
    /// Material balance from White's perspective.
    #[must_use]
    pub fn eval_material(&self) -> i32 {
        self.pieces()
            .map(|(_, piece)| piece.color.sign() * piece.value())
            .sum()
    }

    /// Pawn placement bonus from White's perspective.
    #[must_use]
    pub fn eval_pawn_placement(&self) -> i32 {
        self.pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
            .map(|(sq, piece)| {
                let rel = piece.color.relative_rank(sq.rank());
                piece.color.sign() * PAWN_PST[rel][sq.file()]
            })
            .sum()
    }
}
