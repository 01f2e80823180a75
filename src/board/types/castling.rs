//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which rook the king castles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// File the rook starts on.
    #[inline]
    #[must_use]
    pub const fn rook_from_file(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// File the rook lands on (the square the king passes over).
    #[inline]
    #[must_use]
    pub const fn rook_to_file(self) -> usize {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// File the king lands on.
    #[inline]
    #[must_use]
    pub const fn king_to_file(self) -> usize {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Side implied by a king destination file, if it is a castling file.
    #[inline]
    #[must_use]
    pub const fn from_king_destination(file: usize) -> Option<CastleSide> {
        match file {
            6 => Some(CastleSide::King),
            2 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    /// Home square of this side's rook for the given color.
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::new_unchecked(color.back_rank(), self.rook_from_file())
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color (its king moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    /// Drop whichever right belongs to a rook home square. Called for both
    /// the origin and destination of every move, so a rook that moves or is
    /// captured at home loses its right for good.
    #[inline]
    pub fn remove_for_square(&mut self, sq: Square) {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if side.rook_home(color) == sq {
                    self.remove(color, side);
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_remove() {
        let mut rights = CastlingRights::all();
        assert!(rights.has(Color::White, CastleSide::King));
        rights.remove(Color::White, CastleSide::King);
        assert!(!rights.has(Color::White, CastleSide::King));
        assert!(rights.has(Color::White, CastleSide::Queen));
        rights.remove_color(Color::Black);
        assert!(!rights.has(Color::Black, CastleSide::Queen));
        assert!(!rights.is_empty());
    }

    #[test]
    fn test_remove_for_rook_home() {
        let mut rights = CastlingRights::all();
        rights.remove_for_square("h8".parse().unwrap());
        assert!(!rights.has(Color::Black, CastleSide::King));
        assert!(rights.has(Color::Black, CastleSide::Queen));
        rights.remove_for_square("e4".parse().unwrap());
        assert!(rights.has(Color::White, CastleSide::King));
    }
}
