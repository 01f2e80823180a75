//! Transposition table for caching search results.
//!
//! A fixed-size array of slots indexed by the low bits of the position hash.
//! Storing always overwrites the slot (last write wins); probing checks the
//! full hash so only an exact hash match is returned.

use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// The same bound seen from the other side of the board.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            BoundType::Exact => BoundType::Exact,
            BoundType::LowerBound => BoundType::UpperBound,
            BoundType::UpperBound => BoundType::LowerBound,
        }
    }
}

/// One cached search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
}

/// Smallest table handed out, whatever size is asked for.
const MIN_ENTRIES: usize = 1024;

/// Transposition table owned by a single search engine.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entries = Self::entries_for(size_mb);
        TranspositionTable {
            entries: vec![None; entries],
            mask: entries - 1,
        }
    }

    /// Power-of-two entry count fitting in `size_mb`.
    fn entries_for(size_mb: usize) -> usize {
        let slot_size = mem::size_of::<Option<TTEntry>>();
        let fit = size_mb.saturating_mul(1024 * 1024) / slot_size;
        if fit < MIN_ENTRIES {
            return MIN_ENTRIES;
        }
        // Largest power of two not above `fit`
        1 << (usize::BITS - 1 - fit.leading_zeros())
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Probe the table for an entry matching the given hash.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.entries[self.index(hash)].filter(|entry| entry.hash == hash)
    }

    /// Store an entry, replacing whatever occupied its slot.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound_type: BoundType) {
        let idx = self.index(hash);
        self.entries[idx] = Some(TTEntry {
            hash,
            depth,
            score,
            bound_type,
        });
    }

    /// Reallocate at a new size. All entries are dropped.
    pub fn resize(&mut self, size_mb: usize) {
        *self = Self::new(size_mb);
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 slots
        let sample_size = self.entries.len().min(1000);
        let occupied = self
            .entries
            .iter()
            .take(sample_size)
            .filter(|slot| slot.is_some())
            .count();
        ((occupied * 1000) / sample_size) as u32
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_TT_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x1234_5678_9ABC_DEF0;

        tt.store(hash, 10, 500, BoundType::Exact);

        let entry = tt.probe(hash).expect("should find entry");
        assert_eq!(entry.depth, 10);
        assert_eq!(entry.score, 500);
        assert_eq!(entry.bound_type, BoundType::Exact);
    }

    #[test]
    fn test_no_false_positives() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x1234_5678_9ABC_DEF0, 10, 500, BoundType::Exact);
        assert!(tt.probe(0xFEDC_BA98_7654_3210).is_none());
    }

    #[test]
    fn test_store_overwrites_slot() {
        let mut tt = TranspositionTable::new(0);
        assert_eq!(tt.capacity(), MIN_ENTRIES);
        let first = 7;
        let second = first + MIN_ENTRIES as u64; // same slot
        tt.store(first, 5, 100, BoundType::LowerBound);
        tt.store(second, 1, -20, BoundType::UpperBound);
        assert!(tt.probe(first).is_none());
        assert_eq!(tt.probe(second).map(|e| e.score), Some(-20));

        // Shallower data replaces deeper data too
        tt.store(second, 0, 3, BoundType::Exact);
        assert_eq!(tt.probe(second).map(|e| e.depth), Some(0));
    }

    #[test]
    fn test_clear_resize_hashfull() {
        let mut tt = TranspositionTable::new(1);
        assert!(tt.capacity().is_power_of_two());
        assert_eq!(tt.hashfull_per_mille(), 0);
        for hash in 0..500u64 {
            tt.store(hash, 1, 0, BoundType::Exact);
        }
        assert_eq!(tt.hashfull_per_mille(), 500);
        tt.clear();
        assert_eq!(tt.hashfull_per_mille(), 0);

        tt.resize(2);
        assert!(tt.capacity() >= 2 * 1024 * 1024 / mem::size_of::<Option<TTEntry>>() / 2);
    }

    #[test]
    fn test_bound_flip() {
        assert_eq!(BoundType::LowerBound.flipped(), BoundType::UpperBound);
        assert_eq!(BoundType::Exact.flipped(), BoundType::Exact);
    }
}
