//! Search constants.
//!
//! Score bounds and the move ordering priorities used by the alpha-beta search.

use crate::board::MAX_PLY;

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Larger than any reachable score. The root searches every move with
/// `(-INF, INF)`.
pub const INF: i32 = 1_000_000;

/// Magnitude of a checkmate score. Being mated `ply` half-moves below the
/// root scores `-(MATE_SCORE - ply)`, so faster mates score higher.
pub const MATE_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Priorities are summed. Captures always lead; among quiet moves a killer
// beats any history score.

/// Added to every capture before MVV-LVA
pub const CAPTURE_BASE: i32 = 1_000_000;

/// Victim value multiplier in `victim * 10 - attacker`
pub const MVV_LVA_VICTIM_WEIGHT: i32 = 10;

/// Quiet move matching a killer at the current ply
pub const KILLER_SCORE: i32 = 10_000;

/// History entries saturate here, below `KILLER_SCORE`
pub const HISTORY_MAX: i32 = 9_000;

/// Promotion to a queen
pub const QUEEN_PROMOTION_BONUS: i32 = 800_000;

/// Returns true if `score` encodes a forced mate for either side.
#[inline]
#[must_use]
pub const fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Half-moves to the mate encoded in `score`, if any.
#[must_use]
pub const fn mate_distance(score: i32) -> Option<i32> {
    if is_mate_score(score) {
        Some(MATE_SCORE - score.abs())
    } else {
        None
    }
}
