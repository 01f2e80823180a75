//! Helper methods for evaluation.
//!
//! Contains attack computation shared by the threat and center terms.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind, Square};

/// Per-square attack information for both colors.
///
/// Built once per evaluation from every piece's attack targets, so the
/// threat and center terms don't walk the board again for each square.
#[derive(Debug, Clone)]
pub struct AttackMap {
    /// Number of attackers, `[color][square]`
    counts: [[u8; 64]; 2],
    /// Value of the cheapest attacker, `[color][square]`
    cheapest: [[Option<i32>; 64]; 2],
}

impl AttackMap {
    /// Attackers of `color` on `sq`.
    #[inline]
    pub fn count(&self, color: Color, sq: Square) -> u8 {
        self.counts[color.index()][sq.index()]
    }

    #[inline]
    pub fn is_attacked(&self, color: Color, sq: Square) -> bool {
        self.count(color, sq) > 0
    }

    /// Value of the cheapest piece of `color` attacking `sq`.
    #[inline]
    pub fn cheapest(&self, color: Color, sq: Square) -> Option<i32> {
        self.cheapest[color.index()][sq.index()]
    }
}

impl Board {
    /// Compute the attack map for both colors.
    pub(crate) fn compute_attack_map(&self) -> AttackMap {
        let mut map = AttackMap {
            counts: [[0; 64]; 2],
            cheapest: [[None; 64]; 2],
        };
        let mut targets = Vec::with_capacity(28);
        for (from, piece) in self.pieces() {
            targets.clear();
            self.attack_targets(from, piece, &mut targets);
            let c_idx = piece.color.index();
            let value = piece.value();
            for sq in &targets {
                let idx = sq.index();
                map.counts[c_idx][idx] = map.counts[c_idx][idx].saturating_add(1);
                let slot = &mut map.cheapest[c_idx][idx];
                *slot = Some(slot.map_or(value, |v| v.min(value)));
            }
        }
        map
    }

    /// Own pawns per file.
    pub(crate) fn pawn_file_counts(&self, color: Color) -> [i32; 8] {
        let mut files = [0; 8];
        for (sq, piece) in self.pieces_of(color) {
            if piece.kind == PieceKind::Pawn {
                files[sq.file()] += 1;
            }
        }
        files
    }
}
