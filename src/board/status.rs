use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Whether the side to play can continue, and if not, why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// No legal move and in check: the side to play has lost.
    Checkmate,
    /// No legal move and not in check: drawn.
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Status of the game from `color`'s point of view, assuming it is
    /// `color`'s turn.
    #[must_use]
    pub fn game_status(&self, color: Color) -> GameStatus {
        if self.has_legal_move(color) {
            GameStatus::Ongoing
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// `game_status` for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game_status(self.side_to_move)
    }
}
