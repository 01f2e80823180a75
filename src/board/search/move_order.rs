//! Move ordering for the alpha-beta search.

use super::constants::{CAPTURE_BASE, KILLER_SCORE, MVV_LVA_VICTIM_WEIGHT, QUEEN_PROMOTION_BONUS};
use super::SearchTables;
use crate::board::{Move, PieceKind};

/// MVV-LVA score: high-value victims taken by low-value attackers first.
#[inline]
#[must_use]
pub fn mvv_lva(mv: Move) -> i32 {
    match mv.captured {
        Some(victim) => victim.value() * MVV_LVA_VICTIM_WEIGHT - mv.piece.value(),
        None => 0,
    }
}

impl SearchTables {
    /// Ordering priority of `mv` at `ply`. Higher is tried earlier.
    #[must_use]
    pub fn move_score(&self, mv: Move, ply: usize) -> i32 {
        let mut score = 0;
        if mv.is_capture() {
            score += CAPTURE_BASE + mvv_lva(mv);
        } else if self.killers.is_killer(ply, mv) {
            score += KILLER_SCORE;
        }
        score += self.history.score(mv);
        if mv.promotion_kind() == Some(PieceKind::Queen) {
            score += QUEEN_PROMOTION_BONUS;
        }
        score
    }

    /// Sort `moves` best-first. The sort is stable, so equal scores keep
    /// generation order.
    pub fn order_moves(&self, moves: &mut [Move], ply: usize) {
        moves.sort_by_cached_key(|&mv| std::cmp::Reverse(self.move_score(mv, ply)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_captures_ordered_by_mvv_lva() {
        // Pawn takes queen, then queen takes queen, then pawn takes rook
        let board = Board::from_fen("4k3/8/8/3q1r2/4P3/8/8/3QK3 w - - 0 1").unwrap();
        let tables = SearchTables::new(1);
        let mut moves = board.legal_moves(board.side_to_move());
        tables.order_moves(&mut moves, 0);
        assert_eq!(moves[0].to_string(), "e4d5");
        assert_eq!(moves[1].to_string(), "d1d5");
        assert_eq!(moves[2].to_string(), "e4f5");
        assert!(!moves[3].is_capture());
    }

    #[test]
    fn test_killer_before_other_quiets() {
        let board = Board::new();
        let mut tables = SearchTables::new(1);
        let killer = board.parse_move("g1f3").unwrap();
        tables.killers.update(1, killer);

        let mut moves = board.legal_moves(board.side_to_move());
        tables.order_moves(&mut moves, 1);
        assert_eq!(moves[0], killer);

        // Killers are per ply
        let mut moves = board.legal_moves(board.side_to_move());
        tables.order_moves(&mut moves, 2);
        assert_eq!(moves[0].to_string(), "b1a3");
    }

    #[test]
    fn test_history_breaks_quiet_ties() {
        let board = Board::new();
        let mut tables = SearchTables::new(1);
        let mv = board.parse_move("e2e4").unwrap();
        tables.history.update(mv, 2);
        let mut moves = board.legal_moves(board.side_to_move());
        tables.order_moves(&mut moves, 0);
        assert_eq!(moves[0], mv);
    }

    #[test]
    fn test_queen_promotion_first_among_quiets() {
        let board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let tables = SearchTables::new(1);
        let mut moves = board.legal_moves(board.side_to_move());
        tables.order_moves(&mut moves, 0);
        assert_eq!(moves[0].to_string(), "b7b8q");
    }
}
