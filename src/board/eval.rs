//! Static evaluation.
//!
//! The evaluator is a plain sum of independent terms, recomputed from
//! scratch on every call. Scores are centipawns from White's perspective;
//! `evaluate_for` flips them for the side the search is maximizing.

use super::eval_terms::tables::CHECK_BONUS;
use super::{Board, Color};

/// Every evaluation term, White-relative, for inspection and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub pawn_placement: i32,
    pub mobility: i32,
    pub center: i32,
    pub pawn_structure: i32,
    pub king_safety: i32,
    pub open_files: i32,
    pub bishop_pair: i32,
    pub passed_pawns: i32,
    pub threats: i32,
    pub check: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.material
            + self.pawn_placement
            + self.mobility
            + self.center
            + self.pawn_structure
            + self.king_safety
            + self.open_files
            + self.bishop_pair
            + self.passed_pawns
            + self.threats
            + self.check
    }
}

impl Board {
    /// Static score in centipawns, positive when White stands better.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.eval_breakdown().total()
    }

    /// Static score from `color`'s point of view.
    #[inline]
    #[must_use]
    pub fn evaluate_for(&self, color: Color) -> i32 {
        color.sign() * self.evaluate()
    }

    /// All terms of the evaluation, White-relative.
    #[must_use]
    pub fn eval_breakdown(&self) -> EvalBreakdown {
        let map = self.compute_attack_map();
        EvalBreakdown {
            material: self.eval_material(),
            pawn_placement: self.eval_pawn_placement(),
            mobility: self.eval_mobility(),
            center: self.eval_center_with_map(&map),
            pawn_structure: self.eval_pawn_structure(),
            king_safety: self.eval_king_safety(),
            open_files: self.eval_open_files(),
            bishop_pair: self.eval_bishop_pair(),
            passed_pawns: self.eval_passed_pawns(),
            threats: self.eval_threats_with_map(&map),
            check: self.eval_check(),
        }
    }

    /// Small bonus for the side currently giving check.
    #[must_use]
    pub fn eval_check(&self) -> i32 {
        let mut score = 0;
        if self.is_in_check(Color::Black) {
            score += CHECK_BONUS;
        }
        if self.is_in_check(Color::White) {
            score -= CHECK_BONUS;
        }
        score
    }
}
