use super::super::{Board, CastleSide, Color, Move, Piece, PieceKind, Square};

const KING_HOME_FILE: usize = 4;

impl Board {
    /// Castling moves for the king on `from`.
    ///
    /// Needs the right still held (it is dropped for good once the king or
    /// that rook moves, or the rook is captured at home), the king and rook on
    /// their home squares, every square between them empty, and the king's
    /// start, transit and landing squares free of enemy attack.
    pub(crate) fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let home = Square::new_unchecked(color.back_rank(), KING_HOME_FILE);
        if from != home {
            return;
        }
        let king = Piece::new(PieceKind::King, color);
        let rook = Piece::new(PieceKind::Rook, color);
        let enemy = color.opponent();

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            if self.piece_at(side.rook_home(color)) != Some(rook) {
                continue;
            }

            let rook_file = side.rook_from_file();
            let (low, high) = if rook_file < KING_HOME_FILE {
                (rook_file + 1, KING_HOME_FILE)
            } else {
                (KING_HOME_FILE + 1, rook_file)
            };
            let path_clear = (low..high)
                .all(|file| self.is_empty(Square::new_unchecked(color.back_rank(), file)));
            if !path_clear {
                continue;
            }

            let transit = Square::new_unchecked(color.back_rank(), side.rook_to_file());
            let landing = Square::new_unchecked(color.back_rank(), side.king_to_file());
            if [home, transit, landing]
                .iter()
                .any(|&sq| self.is_attacked(sq, enemy))
            {
                continue;
            }

            moves.push(Move::castling(from, landing, king));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color};

    fn castles(fen: &str) -> Vec<String> {
        Board::from_fen(fen)
            .unwrap()
            .generate_moves()
            .into_iter()
            .filter(|mv| mv.is_castling())
            .map(|mv| mv.to_string())
            .collect()
    }

    #[test]
    fn test_both_sides_available() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec!["e1g1", "e1c1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            vec!["e8g8", "e8c8"]
        );
    }

    #[test]
    fn test_blocked_by_piece_between() {
        // Knight on b1 blocks queenside even though the king never crosses b1
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1"), vec!["e1g1"]);
    }

    #[test]
    fn test_not_out_of_or_through_check() {
        // Rook on e8 gives check
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // Bishop on c4 covers f1
        assert_eq!(castles("6k1/8/8/8/2b5/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
        // Pawn on h2 covers g1 diagonally even though g1 is empty
        assert_eq!(castles("6k1/8/8/8/8/8/7p/R3K2R w KQ - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn test_attacked_b1_does_not_block_queenside() {
        // Only the king's squares must be safe; the rook may cross attacked b1
        assert_eq!(
            castles("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1"),
            vec!["e1c1"]
        );
    }

    #[test]
    fn test_requires_right_and_rook() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K2R w Q - 0 1").is_empty());
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert_eq!(board.legal_moves(Color::Black).iter().filter(|m| m.is_castling()).count(), 0);
    }
}
