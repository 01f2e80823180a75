//! Pawn structure evaluation.
//!
//! Evaluates doubled and isolated pawns file by file.

use crate::board::state::Board;
use crate::board::types::Color;

use super::tables::{DOUBLED_PAWN, ISOLATED_PAWN};

impl Board {
    /// Evaluate pawn structure.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_pawn_structure(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * pawn_structure_penalty(&self.pawn_file_counts(color)))
            .sum()
    }
}

/// Penalty (as a negative score) for one side's pawn files.
fn pawn_structure_penalty(files: &[i32; 8]) -> i32 {
    let mut score = 0;
    for (file, &count) in files.iter().enumerate() {
        if count > 1 {
            score -= DOUBLED_PAWN * (count - 1);
        }
        let left = file > 0 && files[file - 1] > 0;
        let right = file < 7 && files[file + 1] > 0;
        if count > 0 && !left && !right {
            score -= ISOLATED_PAWN * count;
        }
    }
    score
}
