//! Heavy pieces on open and semi-open files.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind};

use super::tables::{OPEN_FILE, SEMI_OPEN_FILE};

impl Board {
    /// Bonus per file holding a rook or queen with no own pawn on it:
    /// full when the file has no pawns at all, half when only enemy pawns.
    /// Returns the score from White's perspective.
    #[must_use]
    pub fn eval_open_files(&self) -> i32 {
        let pawns = [
            self.pawn_file_counts(Color::White),
            self.pawn_file_counts(Color::Black),
        ];
        let mut score = 0;
        for color in Color::BOTH {
            let mut heavy_files = [false; 8];
            for (sq, piece) in self.pieces_of(color) {
                if matches!(piece.kind, PieceKind::Rook | PieceKind::Queen) {
                    heavy_files[sq.file()] = true;
                }
            }
            let own = &pawns[color.index()];
            let enemy = &pawns[color.opponent().index()];
            for file in (0..8).filter(|&f| heavy_files[f] && own[f] == 0) {
                let bonus = if enemy[file] == 0 { OPEN_FILE } else { SEMI_OPEN_FILE };
                score += color.sign() * bonus;
            }
        }
        score
    }
}
