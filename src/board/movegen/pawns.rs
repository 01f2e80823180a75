use super::super::{Board, Color, Move, Piece, PieceKind, Square};

/// The two forward diagonals of a pawn, whatever stands on them.
pub(super) fn pawn_attack_squares(from: Square, color: Color, targets: &mut Vec<Square>) {
    let dir = color.pawn_direction();
    for df in [-1, 1] {
        if let Some(sq) = from.offset(dir, df) {
            targets.push(sq);
        }
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let pawn = Piece::new(PieceKind::Pawn, color);
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let push = |to: Square, captured: Option<PieceKind>, moves: &mut Vec<Move>| {
            if to.rank() == promotion_rank {
                moves.push(Move::promotion(from, to, pawn, PieceKind::Queen, captured));
            } else {
                moves.push(Move::normal(from, to, pawn, captured));
            }
        };

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push(one, None, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::normal(from, two, pawn, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != color => push(to, Some(target.kind), moves),
                Some(_) => {}
                None if self.en_passant_available(from, to, color) => {
                    moves.push(Move::en_passant(from, to, pawn));
                }
                None => {}
            }
        }
    }

    /// En passant onto `to` is only on while `to` is the recorded target, it
    /// is `color`'s turn, and the pawn that just double-stepped is really
    /// standing beside the capturer.
    fn en_passant_available(&self, from: Square, to: Square, color: Color) -> bool {
        if self.en_passant_target != Some(to) || self.side_to_move != color {
            return false;
        }
        let Some(victim_sq) = Square::new(from.rank(), to.file()) else {
            return false;
        };
        self.piece_at(victim_sq) == Some(Piece::new(PieceKind::Pawn, color.opponent()))
    }
}
