//! Move generation.
//!
//! Two entry points:
//! - `raw_moves` produces pseudolegal moves (movement rules only). It never
//!   consults check detection, so the attack oracle can build on the same
//!   per-piece walkers without recursing.
//! - `legal_moves` filters raw moves by replaying each on a scratch board and
//!   rejecting those that leave the mover's king attacked, then adds castling.
//!
//! Both return moves in board-scan order (a1, b1, ..., h8 by origin square).

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, Piece, PieceKind, Square};

pub(crate) use knights::{KING_OFFSETS, KNIGHT_OFFSETS};
pub(crate) use sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

impl Board {
    /// Legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        self.legal_moves(self.side_to_move)
    }

    /// Every legal move for `color`, in board-scan order.
    ///
    /// Promotions appear once, promoting to a Queen; pass a different piece
    /// to `apply_move_with_promotion` to under-promote.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut legal = Vec::with_capacity(48);
        let mut scratch = self.clone();
        let mut pseudo = Vec::with_capacity(28);

        for (from, piece) in self.pieces_of(color) {
            pseudo.clear();
            self.generate_piece_moves(from, piece, &mut pseudo);
            for &mv in &pseudo {
                let info = scratch.make_move(mv);
                let safe = !scratch.is_in_check(color);
                scratch.unmake_move(mv, info);
                if safe {
                    legal.push(mv);
                }
            }
            if piece.kind == PieceKind::King {
                self.generate_castling_moves(from, color, &mut legal);
            }
        }
        legal
    }

    /// Pseudolegal moves for `color`: movement rules only, no self-check
    /// filter, no castling.
    #[must_use]
    pub fn raw_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in self.pieces_of(color) {
            self.generate_piece_moves(from, piece, &mut moves);
        }
        moves
    }

    /// True if `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.clone();
        let mut pseudo = Vec::with_capacity(28);
        for (from, piece) in self.pieces_of(color) {
            pseudo.clear();
            self.generate_piece_moves(from, piece, &mut pseudo);
            for &mv in &pseudo {
                let info = scratch.make_move(mv);
                let safe = !scratch.is_in_check(color);
                scratch.unmake_move(mv, info);
                if safe {
                    return true;
                }
            }
        }
        // Castling needs the king's own square safe and the king can always
        // step to the transit square first, so castling never adds a legal
        // move where none existed.
        false
    }

    /// Pseudolegal moves of the piece on `from`.
    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color, moves),
            PieceKind::Knight => self.generate_leaper_moves(from, piece, &KNIGHT_OFFSETS, moves),
            PieceKind::King => self.generate_leaper_moves(from, piece, &KING_OFFSETS, moves),
            PieceKind::Bishop => self.generate_slider_moves(from, piece, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_slider_moves(from, piece, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => {
                self.generate_slider_moves(from, piece, &ROOK_DIRECTIONS, moves);
                self.generate_slider_moves(from, piece, &BISHOP_DIRECTIONS, moves);
            }
        }
    }

    /// Squares the piece on `from` attacks, whoever occupies them.
    ///
    /// This is the raw generator's destination set with two differences:
    /// squares held by the piece's own side are included (the piece defends
    /// them) and pawns contribute only their two forward diagonals.
    pub(crate) fn attack_targets(&self, from: Square, piece: Piece, targets: &mut Vec<Square>) {
        match piece.kind {
            PieceKind::Pawn => pawns::pawn_attack_squares(from, piece.color, targets),
            PieceKind::Knight => knights::leaper_targets(from, &KNIGHT_OFFSETS, targets),
            PieceKind::King => knights::leaper_targets(from, &KING_OFFSETS, targets),
            PieceKind::Bishop => self.slider_targets(from, &BISHOP_DIRECTIONS, targets),
            PieceKind::Rook => self.slider_targets(from, &ROOK_DIRECTIONS, targets),
            PieceKind::Queen => {
                self.slider_targets(from, &ROOK_DIRECTIONS, targets);
                self.slider_targets(from, &BISHOP_DIRECTIONS, targets);
            }
        }
    }

    /// Number of pseudolegal moves of the piece on `from`.
    pub(crate) fn piece_mobility(&self, from: Square, piece: Piece) -> usize {
        let mut moves = Vec::with_capacity(28);
        self.generate_piece_moves(from, piece, &mut moves);
        moves.len()
    }

    /// What a move onto `to` would capture, if anything.
    #[inline]
    fn capture_on(&self, to: Square, color: Color) -> Option<Option<PieceKind>> {
        match self.piece_at(to) {
            None => Some(None),
            Some(target) if target.color != color => Some(Some(target.kind)),
            Some(_) => None,
        }
    }
}
