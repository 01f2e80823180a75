//! Minor piece evaluation.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, PieceKind};

use super::tables::BISHOP_PAIR;

impl Board {
    /// Bishop pair bonus. Returns the score from White's perspective.
    #[must_use]
    pub fn eval_bishop_pair(&self) -> i32 {
        Color::BOTH
            .iter()
            .filter(|&&color| self.count(Piece::new(PieceKind::Bishop, color)) >= 2)
            .map(|color| color.sign() * BISHOP_PAIR)
            .sum()
    }
}
