//! Zobrist hashing for chess positions.
//!
//! A position's hash is the XOR, over every occupied square, of a random key
//! for that (square, piece identity) pair. Only placement is hashed: side to
//! move, castling rights and the en passant target are left out, so boards
//! that differ only in those collide. Search results cached under such a hash
//! are an accepted approximation.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Piece, Square};

/// Fixed seed so hashes are identical across runs.
const ZOBRIST_SEED: u64 = 1234567890;

pub(crate) struct ZobristKeys {
    /// `piece_keys[square][piece identity]`
    piece_keys: [[u64; 12]; 64],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[0; 12]; 64];
        for square in &mut piece_keys {
            for key in square.iter_mut() {
                *key = rng.gen();
            }
        }
        ZobristKeys { piece_keys }
    }

    #[inline]
    pub(crate) fn piece_key(&self, sq: Square, piece: Piece) -> u64 {
        self.piece_keys[sq.index()][piece.index()]
    }
}

// Generated on first use and shared by every board
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of a board's piece placement.
#[must_use]
pub fn hash(board: &Board) -> u64 {
    board
        .pieces()
        .fold(0, |acc, (sq, piece)| acc ^ ZOBRIST.piece_key(sq, piece))
}

impl Board {
    /// Zobrist hash of this board's piece placement.
    #[inline]
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        hash(self)
    }
}
