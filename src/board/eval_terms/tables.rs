//! Evaluation constants and tables.
//!
//! All values are centipawns; piece values live on `PieceKind::value`.

// ============================================================================
// PAWN PLACEMENT
// ============================================================================

/// Pawn bonus indexed `[relative_rank][file]`, relative rank 0 being the
/// owner's back rank. Mirrored for Black by looking up its relative rank.
pub const PAWN_PST: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 10, 20, 20, 10, 5, 5],
    [0, 0, 10, 25, 25, 10, 0, 0],
    [5, 5, 15, 30, 30, 15, 5, 5],
    [10, 10, 20, 35, 35, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// ============================================================================
// ACTIVITY
// ============================================================================

/// Per pseudolegal move of a knight, bishop, rook or queen
pub const MOBILITY_PER_MOVE: i32 = 5;

/// The four central squares as (rank, file)
pub const CENTER_SQUARES: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
pub const CENTER_PAWN_OCCUPANT: i32 = 20;
pub const CENTER_PIECE_OCCUPANT: i32 = 10;
/// Per attack on a central square
pub const CENTER_ATTACK: i32 = 5;

// ============================================================================
// PAWN STRUCTURE
// ============================================================================

/// Per extra pawn on a file
pub const DOUBLED_PAWN: i32 = 20;
/// Per pawn with no friendly pawn on either neighbouring file
pub const ISOLATED_PAWN: i32 = 10;

/// Passed pawn base bonus
pub const PASSED_BASE: i32 = 20;
/// Extra per rank advanced beyond the starting rank
pub const PASSED_PER_RANK: i32 = 10;
/// Extra per step the owner's king is closer than the far corner
pub const PASSED_KING_ESCORT: i32 = 5;

// ============================================================================
// KING SAFETY
// ============================================================================

/// Per own pawn on the three squares in front of the king
pub const PAWN_SHIELD: i32 = 30;
/// Enemy pieces inside this Chebyshev radius weigh on the king
pub const KING_ZONE_RADIUS: i32 = 2;
/// Enemy piece value is divided by this times its Manhattan distance
pub const KING_PROXIMITY_DIVISOR: i32 = 20;
/// King standing on a file with no pawns at all
pub const KING_OPEN_FILE: i32 = 20;

// ============================================================================
// FILES AND PAIRS
// ============================================================================

/// Rook or queen on a file with no pawns
pub const OPEN_FILE: i32 = 30;
/// Rook or queen on a file with enemy pawns only
pub const SEMI_OPEN_FILE: i32 = 15;
pub const BISHOP_PAIR: i32 = 30;

// ============================================================================
// THREATS AND CHECK
// ============================================================================

/// Attacked piece costs this percentage of its value
pub const THREAT_PERCENT: i32 = 50;
/// Undefended victims cost 3/2 as much
pub const UNDEFENDED_NUM: i32 = 3;
pub const UNDEFENDED_DEN: i32 = 2;
/// Victims attacked by something cheaper cost 6/5 as much
pub const CHEAP_ATTACKER_NUM: i32 = 6;
pub const CHEAP_ATTACKER_DEN: i32 = 5;

/// Side giving check gets this much
pub const CHECK_BONUS: i32 = 10;
