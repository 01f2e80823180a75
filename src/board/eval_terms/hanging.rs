//! Threatened piece evaluation.
//!
//! Every attacked piece costs its owner part of its value. The cost grows
//! when nothing of its own color covers the square and again when the
//! cheapest attacker is worth less than the victim.

use crate::board::state::Board;
use crate::board::types::Color;

use super::helpers::AttackMap;
use super::tables::{
    CHEAP_ATTACKER_DEN, CHEAP_ATTACKER_NUM, THREAT_PERCENT, UNDEFENDED_DEN, UNDEFENDED_NUM,
};

impl Board {
    /// Evaluate threats against both sides.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_threats(&self) -> i32 {
        let map = self.compute_attack_map();
        self.eval_threats_with_map(&map)
    }

    pub(crate) fn eval_threats_with_map(&self, map: &AttackMap) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| -color.sign() * self.threat_penalty(color, map))
            .sum()
    }

    /// Total penalty (positive) for `color`'s attacked pieces.
    fn threat_penalty(&self, color: Color, map: &AttackMap) -> i32 {
        let enemy = color.opponent();
        let mut total = 0;
        for (sq, piece) in self.pieces_of(color) {
            let Some(cheapest) = map.cheapest(enemy, sq) else {
                continue;
            };
            let value = piece.value();
            let mut penalty = value * THREAT_PERCENT / 100;
            if !map.is_attacked(color, sq) {
                penalty = penalty * UNDEFENDED_NUM / UNDEFENDED_DEN;
            }
            if cheapest < value {
                penalty = penalty * CHEAP_ATTACKER_NUM / CHEAP_ATTACKER_DEN;
            }
            total += penalty;
        }
        total
    }
}
