//! Killer and history tables.
//!
//! Both only influence move ordering: clearing them changes how fast the
//! search runs, never what it returns.

use super::constants::HISTORY_MAX;
use crate::board::{Move, MAX_PLY};

/// Quiet moves that caused a beta cutoff, two per ply, newest first.
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[1])
    }

    /// Returns true if `mv` matches either killer stored at `ply`.
    #[must_use]
    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        self.slots.get(ply).is_some_and(|row| {
            row.iter()
                .flatten()
                .any(|killer| killer.same_squares(mv))
        })
    }

    /// Front-insert `mv` at `ply`, dropping the oldest killer.
    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0].is_some_and(|killer| killer.same_squares(mv)) {
            return;
        }
        row[1] = row[0];
        row[0] = Some(mv);
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

/// Cutoff counts keyed by (moving piece kind, destination square).
pub struct HistoryTable {
    entries: [[i32; 64]; 6],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[0; 64]; 6],
        }
    }

    #[must_use]
    pub fn score(&self, mv: Move) -> i32 {
        self.entries[mv.piece.kind.index()][mv.to.index()]
    }

    /// Update history score for a move that caused a beta cutoff
    pub fn update(&mut self, mv: Move, depth: u32) {
        let bonus = i32::try_from(depth.saturating_mul(depth)).unwrap_or(i32::MAX);
        let entry = &mut self.entries[mv.piece.kind.index()][mv.to.index()];
        *entry = entry.saturating_add(bonus).min(HISTORY_MAX);
    }

    pub fn reset(&mut self) {
        self.entries = [[0; 64]; 6];
    }
}
