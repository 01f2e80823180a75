use super::super::{Board, Move, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i32, i32)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::normal(from, to, piece, None)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(Move::normal(from, to, piece, Some(target.kind)));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }

    /// Ray squares up to and including the first blocker of either color.
    pub(crate) fn slider_targets(
        &self,
        from: Square,
        directions: &[(i32, i32)],
        targets: &mut Vec<Square>,
    ) {
        for &(dr, df) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, df) {
                targets.push(to);
                if !self.is_empty(to) {
                    break;
                }
                cursor = to;
            }
        }
    }
}
