use super::super::{Board, Move, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// On-board squares one fixed jump away.
pub(super) fn leaper_targets(from: Square, offsets: &[(i32, i32)], targets: &mut Vec<Square>) {
    targets.extend(offsets.iter().filter_map(|&(dr, df)| from.offset(dr, df)));
}

impl Board {
    /// Knight jumps and plain king steps: destination empty or enemy-held.
    pub(crate) fn generate_leaper_moves(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[(i32, i32)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if let Some(captured) = self.capture_on(to, piece.color) {
                moves.push(Move::normal(from, to, piece, captured));
            }
        }
    }
}
