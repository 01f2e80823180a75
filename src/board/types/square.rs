//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as (rank, file).
///
/// Rank 0 is White's back rank, file 0 is the a-file. Both coordinates are
/// always in `0..8`; there is no way to build an off-board square through the
/// public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8, u8);

impl Square {
    /// All 64 squares in board-scan order (rank-major, file-minor).
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0, 0); 64];
        let mut idx = 0;
        while idx < 64 {
            all[idx] = Square((idx / 8) as u8, (idx % 8) as u8);
            idx += 1;
        }
        all
    };

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Only for literal coordinates known to be on the board.
    #[inline]
    pub(crate) const fn new_unchecked(rank: usize, file: usize) -> Self {
        Square(rank as u8, file as u8)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1 as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Create a square from an index, or `None` past h8.
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square((idx / 8) as u8, (idx % 8) as u8))
        } else {
            None
        }
    }

    /// The square `(dr, df)` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i32, df: i32) -> Option<Self> {
        let rank = self.rank() as i32 + dr;
        let file = self.file() as i32 + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// King-move distance between two squares.
    #[inline]
    #[must_use]
    pub fn chebyshev_distance(self, other: Square) -> usize {
        self.rank()
            .abs_diff(other.rank())
            .max(self.file().abs_diff(other.file()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank as u8, file as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
