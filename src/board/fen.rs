use std::fmt;
use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::{Board, CastleSide, CastlingRights, Color, Move, Piece, PieceKind, Square};

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASTLING_CHARS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::King),
    ('Q', Color::White, CastleSide::Queen),
    ('k', Color::Black, CastleSide::King),
    ('q', Color::Black, CastleSide::Queen),
];

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// `0` and `1`. A board without kings parses fine; check detection simply
    /// reports "not in check" for a missing king.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = Square::new(rank, file).ok_or(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                board.set_piece(sq, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (_, color, side) = CASTLING_CHARS
                    .iter()
                    .find(|(letter, _, _)| *letter == c)
                    .ok_or(FenError::InvalidCastling { char: c })?;
                rights.set(*color, *side);
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(sq)
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidCounter {
                found: (*clock).to_string(),
            })?;
        }
        if let Some(number) = parts.get(5) {
            let fullmove: u32 = number.parse().map_err(|_| FenError::InvalidCounter {
                found: (*number).to_string(),
            })?;
            board.fullmove_number = fullmove.max(1);
        }

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING_CHARS
            .iter()
            .filter(|(_, color, side)| self.castling_rights.has(*color, *side))
            .map(|(letter, _, _)| *letter)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Look up the legal move matching a `(from, to)` intent.
    ///
    /// For promotions `promotion` picks the piece (Queen when `None`); it is
    /// ignored for every other move. This is the validating entry point a
    /// caller should use before `apply_move`.
    pub fn find_legal_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let illegal = || MoveError::IllegalMove {
            notation: format!("{from}{to}"),
        };
        let mv = self
            .generate_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or_else(illegal)?;
        match (mv.is_promotion(), promotion) {
            (true, Some(kind)) if is_promotion_choice(kind) => Ok(mv.with_promotion(kind)),
            (true, Some(kind)) => Err(MoveError::InvalidPromotion {
                char: kind.to_char(),
            }),
            _ => Ok(mv),
        }
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8n").
    ///
    /// Returns the matching legal move for the side to move, or an error
    /// describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use castle_engine::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            Some(c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|&kind| is_promotion_choice(kind))
                    .ok_or(MoveError::InvalidPromotion { char: c })?;
                Some(kind)
            }
            None => None,
        };

        let mv = self.find_legal_move(from, to, promotion).map_err(|err| match err {
            MoveError::IllegalMove { .. } => MoveError::IllegalMove {
                notation: text.to_string(),
            },
            other => other,
        })?;
        // A promotion suffix on a non-promoting move is not that move.
        if promotion.is_some() && !mv.is_promotion() {
            return Err(MoveError::IllegalMove {
                notation: text.to_string(),
            });
        }
        Ok(mv)
    }

    /// Parse a coordinate move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use castle_engine::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_str("e2e4").unwrap();
    /// board.make_move_str("e7e5").unwrap();
    /// ```
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

fn is_promotion_choice(kind: PieceKind) -> bool {
    !matches!(kind, PieceKind::Pawn | PieceKind::King)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file].map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
