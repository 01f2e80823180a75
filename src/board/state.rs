use super::{CastlingRights, Color, Piece, PieceKind, Square};

/// Everything `make_move` overwrites that cannot be recomputed from the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(Square, Piece)>,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// A chess position: piece placement plus the state the rules need.
///
/// Boards are plain values. `apply_move` hands back a fresh copy, so a board
/// held by the game is never aliased by the search's scratch boards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed `[rank][file]`.
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.squares[color.back_rank()][file] = Some(Piece::new(*kind, color));
                board.squares[color.pawn_start_rank()][file] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move, no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some(piece);
    }

    /// Clear a square, returning what stood there.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// All occupied squares in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .filter_map(move |&sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Pieces of one color in board-scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Square of `color`'s king. `None` on degenerate boards without one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces of the given identity.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Half-moves played since the game's initial position.
    #[must_use]
    pub fn game_ply(&self) -> u32 {
        let black_extra = u32::from(self.side_to_move == Color::Black);
        self.fullmove_number.saturating_sub(1) * 2 + black_extra
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
