use super::{Board, CastleSide, Color, Move, MoveKind, Piece, PieceKind, Square, UnmakeInfo};

impl Board {
    /// Return a new board with `mv` played. `self` is left untouched.
    ///
    /// The move must come from `legal_moves` (or `find_legal_move`); nothing
    /// here re-validates it. Promotions use the piece carried by the move,
    /// which the generator sets to a Queen.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    /// Like `apply_move`, but a promotion becomes `promotion` when given.
    #[must_use]
    pub fn apply_move_with_promotion(&self, mv: Move, promotion: Option<PieceKind>) -> Board {
        let mv = match promotion {
            Some(kind) => mv.with_promotion(kind),
            None => mv,
        };
        self.apply_move(mv)
    }

    /// Play `mv` in place, returning what `unmake_move` needs to take it back.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let color = mv.piece.color;
        let info = UnmakeInfo {
            captured: None,
            previous_side_to_move: self.side_to_move,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let capture_sq = match mv.kind {
            MoveKind::EnPassant => Square::new(mv.from.rank(), mv.to.file()),
            _ => Some(mv.to),
        };
        let captured = capture_sq.and_then(|sq| self.remove_piece(sq).map(|piece| (sq, piece)));

        self.remove_piece(mv.from);
        let placed = match mv.kind {
            MoveKind::Promotion(kind) => Piece::new(kind, color),
            _ => mv.piece,
        };
        self.set_piece(mv.to, placed);

        if mv.kind == MoveKind::Castling {
            if let Some((rook_from, rook_to)) = castling_rook_squares(mv) {
                if let Some(rook) = self.remove_piece(rook_from) {
                    self.set_piece(rook_to, rook);
                }
            }
        }

        if mv.piece.kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        self.castling_rights.remove_for_square(mv.from);
        self.castling_rights.remove_for_square(mv.to);

        self.en_passant_target = None;
        if mv.piece.kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            self.en_passant_target = mv.from.offset(color.pawn_direction(), 0);
        }

        if mv.piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();

        UnmakeInfo { captured, ..info }
    }

    /// Take back `mv`, which must be the last move made with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.remove_piece(mv.to);
        self.set_piece(mv.from, mv.piece);

        if mv.kind == MoveKind::Castling {
            if let Some((rook_from, rook_to)) = castling_rook_squares(mv) {
                if let Some(rook) = self.remove_piece(rook_to) {
                    self.set_piece(rook_from, rook);
                }
            }
        }

        if let Some((sq, piece)) = info.captured {
            self.set_piece(sq, piece);
        }

        self.side_to_move = info.previous_side_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
    }
}

/// Rook origin and destination for a castling move.
fn castling_rook_squares(mv: Move) -> Option<(Square, Square)> {
    let side = CastleSide::from_king_destination(mv.to.file())?;
    let rank = mv.to.rank();
    Some((
        Square::new(rank, side.rook_from_file())?,
        Square::new(rank, side.rook_to_file())?,
    ))
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CastleSide, Color, Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_castling_moves_king_and_rook_together() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = board.parse_move("e1g1").unwrap();
        let next = board.apply_move(mv);
        assert_eq!(
            next.piece_at(sq("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            next.piece_at(sq("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(next.is_empty(sq("h1")));
        assert!(next.is_empty(sq("e1")));
        assert!(!next.castling_rights().has(Color::White, CastleSide::Queen));
        assert!(next.castling_rights().has(Color::Black, CastleSide::King));

        let mv = next.parse_move("e8c8").unwrap();
        let after = next.apply_move(mv);
        assert_eq!(
            after.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(after.is_empty(sq("a8")));
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let mv = board.parse_move("e5d6").unwrap();
        assert!(mv.is_en_passant());
        let next = board.apply_move(mv);
        assert!(next.is_empty(sq("d5")));
        assert!(next.is_empty(sq("e5")));
        assert_eq!(
            next.piece_at(sq("d6")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        let next = board.apply_move(mv);
        assert_eq!(board, Board::new());
        assert_eq!(next.en_passant_target(), Some(sq("e3")));
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.game_ply(), 1);
    }

    #[test]
    fn test_promotion_choice() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8").unwrap();
        let queen = board.apply_move(mv);
        assert_eq!(
            queen.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        let knight = board.apply_move_with_promotion(mv, Some(PieceKind::Knight));
        assert_eq!(
            knight.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn test_unmake_restores_everything() {
        let board = Board::from_fen("r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 5 9").unwrap();
        for mv in board.generate_moves() {
            let mut scratch = board.clone();
            let info = scratch.make_move(mv);
            assert_eq!(scratch, board.apply_move(mv));
            scratch.unmake_move(mv, info);
            assert_eq!(scratch, board, "unmake failed for {mv}");
        }
    }

    #[test]
    fn test_counters() {
        let mut board = Board::new();
        board.make_move_str("g1f3").unwrap();
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 1);
        board.make_move_str("e7e5").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 2);
        assert_eq!(board.game_ply(), 2);
    }
}
