//! Attack detection.
//!
//! Built only on the per-piece movement geometry shared with the raw move
//! generator, never on `legal_moves`, since the legality filter itself asks
//! these questions. A pawn attacks its two forward diagonals; its straight
//! advance is never an attack.

use super::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// True if any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let mut found = false;
        self.for_each_attacker(sq, by, |_, _| {
            found = true;
            false
        });
        found
    }

    /// True if `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }

    /// Every piece of `by` attacking `sq`.
    #[must_use]
    pub fn attackers(&self, sq: Square, by: Color) -> Vec<(Square, Piece)> {
        let mut found = Vec::new();
        self.for_each_attacker(sq, by, |from, piece| {
            found.push((from, piece));
            true
        });
        found
    }

    /// Value of the cheapest piece of `by` attacking `sq`.
    #[must_use]
    pub fn cheapest_attacker_value(&self, sq: Square, by: Color) -> Option<i32> {
        let mut cheapest: Option<i32> = None;
        self.for_each_attacker(sq, by, |_, piece| {
            let value = piece.value();
            cheapest = Some(cheapest.map_or(value, |c| c.min(value)));
            true
        });
        cheapest
    }

    /// Walk outward from `sq` along each piece's movement pattern, reporting
    /// matching pieces of `by`. Stops early when `visit` returns false.
    fn for_each_attacker<F>(&self, sq: Square, by: Color, mut visit: F)
    where
        F: FnMut(Square, Piece) -> bool,
    {
        let pawn = Piece::new(PieceKind::Pawn, by);
        for df in [-1, 1] {
            if let Some(from) = sq.offset(-by.pawn_direction(), df) {
                if self.piece_at(from) == Some(pawn) && !visit(from, pawn) {
                    return;
                }
            }
        }

        for (offsets, kind) in [
            (&KNIGHT_OFFSETS, PieceKind::Knight),
            (&KING_OFFSETS, PieceKind::King),
        ] {
            let leaper = Piece::new(kind, by);
            for &(dr, df) in offsets {
                if let Some(from) = sq.offset(dr, df) {
                    if self.piece_at(from) == Some(leaper) && !visit(from, leaper) {
                        return;
                    }
                }
            }
        }

        for (directions, line_kind) in [
            (&ROOK_DIRECTIONS, PieceKind::Rook),
            (&BISHOP_DIRECTIONS, PieceKind::Bishop),
        ] {
            for &(dr, df) in directions {
                let mut cursor = sq;
                while let Some(from) = cursor.offset(dr, df) {
                    if let Some(piece) = self.piece_at(from) {
                        let slides_here = piece.kind == line_kind || piece.kind == PieceKind::Queen;
                        if piece.color == by && slides_here && !visit(from, piece) {
                            return;
                        }
                        break;
                    }
                    cursor = from;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(board.is_attacked(sq("d3"), Color::White));
        assert!(board.is_attacked(sq("f3"), Color::White));
        assert!(!board.is_attacked(sq("e3"), Color::White));
        assert!(!board.is_attacked(sq("e4"), Color::White));
    }

    #[test]
    fn test_slider_blocked() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R1n4K w - - 0 1").unwrap();
        assert!(board.is_attacked(sq("c1"), Color::White));
        assert!(!board.is_attacked(sq("d1"), Color::White));
        assert!(board.is_attacked(sq("a8"), Color::White));

        // A king next door still attacks the square the rook can't reach
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R1n1K3 w - - 0 1").unwrap();
        assert!(board.is_attacked(sq("d1"), Color::White));
        assert!(!board
            .attackers(sq("d1"), Color::White)
            .iter()
            .any(|(_, piece)| piece.kind == PieceKind::Rook));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = Board::from_fen("8/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn test_attackers_and_cheapest() {
        // e5 attacked by pawn d4, knight f3, queen e2 (through empty e3/e4)
        let board = Board::from_fen("4k3/8/8/8/3P4/5N2/4Q3/4K3 w - - 0 1").unwrap();
        let attackers = board.attackers(sq("e5"), Color::White);
        assert_eq!(attackers.len(), 3);
        assert_eq!(board.cheapest_attacker_value(sq("e5"), Color::White), Some(100));
        assert_eq!(board.cheapest_attacker_value(sq("a6"), Color::White), Some(900));
        assert_eq!(board.cheapest_attacker_value(sq("h5"), Color::Black), None);
    }

    #[test]
    fn test_check_detection() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_in_check(Color::White));
    }
}
