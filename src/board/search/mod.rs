//! Search module implementing fixed-depth alpha-beta.
//!
//! Features:
//! - Negamax with alpha-beta pruning over legal moves
//! - Transposition table cutoffs (scores stored White-relative)
//! - Move ordering (MVV-LVA, killers, history, queen promotions)
//! - Checkmate scores biased toward the shortest mate
//! - Cooperative cancellation through a shared stop flag
//!
//! The root searches every legal move with a full window, so each root move
//! gets an exact score. The engine's opening policy samples from them.

mod constants;
mod move_order;
mod params;
mod tables;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::tt::{BoundType, TranspositionTable};

use super::{Board, Color, Move};
pub use constants::{is_mate_score, mate_distance, INF, MATE_SCORE};
pub use move_order::mvv_lva;
pub use params::SearchParams;
pub use tables::{HistoryTable, KillerTable};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// Statistics tracked during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Highest-scoring root move; the first generated wins ties.
    pub best_move: Move,
    /// Score of `best_move` for the side to move.
    pub score: i32,
    /// Every fully searched root move with its score, in generation order.
    pub root_scores: Vec<(Move, i32)>,
    pub stats: SearchStats,
    /// True if the stop flag cut the search short.
    pub stopped: bool,
}

impl SearchResult {
    /// Root moves sorted best-first. Equal scores keep generation order.
    #[must_use]
    pub fn ranked_moves(&self) -> Vec<(Move, i32)> {
        let mut ranked = self.root_scores.clone();
        ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
        ranked
    }
}

/// Tables owned by one engine and reused across its searches.
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl SearchTables {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchTables {
            tt: TranspositionTable::new(tt_mb),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    /// Forget everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.killers.reset();
        self.history.reset();
    }

    /// Reallocate the transposition table. Killers and history are kept.
    pub fn resize_tt(&mut self, tt_mb: usize) {
        self.tt.resize(tt_mb);
    }
}

impl Default for SearchTables {
    fn default() -> Self {
        SearchTables::new(DEFAULT_TT_MB)
    }
}

/// Convert between side-to-move and White-relative TT entries. The mapping
/// is its own inverse.
#[inline]
fn orient(side: Color, score: i32, bound: BoundType) -> (i32, BoundType) {
    match side {
        Color::White => (score, bound),
        Color::Black => (-score, bound.flipped()),
    }
}

struct Searcher<'a> {
    tables: &'a mut SearchTables,
    stats: SearchStats,
    stop: Option<&'a AtomicBool>,
}

impl Searcher<'_> {
    #[inline]
    fn stopped(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Score of `board` for its side to move, searched `depth` plies deep.
    fn negamax(&mut self, board: &mut Board, depth: u32, ply: usize, mut alpha: i32, beta: i32) -> i32 {
        if self.stopped() {
            return 0;
        }
        self.stats.nodes += 1;

        let side = board.side_to_move();
        let hash = board.zobrist_hash();
        if let Some(entry) = self.tables.tt.probe(hash) {
            if entry.depth >= depth {
                self.stats.tt_hits += 1;
                let (score, bound) = orient(side, entry.score, entry.bound_type);
                match bound {
                    BoundType::Exact => return score,
                    BoundType::LowerBound if score >= beta => return score,
                    BoundType::UpperBound if score <= alpha => return score,
                    _ => {}
                }
            }
        }

        if depth == 0 {
            return board.evaluate_for(side);
        }

        let mut moves = board.legal_moves(side);
        if moves.is_empty() {
            return if board.is_in_check(side) {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }
        self.tables.order_moves(&mut moves, ply);

        let alpha_orig = alpha;
        let mut best = -INF;
        for mv in moves {
            let info = board.make_move(mv);
            let score = -self.negamax(board, depth - 1, ply + 1, -beta, -alpha);
            board.unmake_move(mv, info);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                if !mv.is_capture() {
                    self.tables.killers.update(ply, mv);
                    self.tables.history.update(mv, depth);
                }
                break;
            }
        }

        // Partial results must not reach the table
        if self.stopped() {
            return 0;
        }

        let bound = if best <= alpha_orig {
            BoundType::UpperBound
        } else if best >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        let (stored, stored_bound) = orient(side, best, bound);
        self.tables.tt.store(hash, depth, stored, stored_bound);
        best
    }
}

/// Search every legal move of the side to move `depth` plies deep.
///
/// Returns `None` when the side to move has no legal move (checkmate or
/// stalemate). A depth of 0 is treated as 1. If `stop` is raised mid-search
/// the result holds the best move among the root moves that finished, or the
/// first legal move if none did.
pub fn search(
    board: &Board,
    depth: u32,
    tables: &mut SearchTables,
    stop: Option<&AtomicBool>,
) -> Option<SearchResult> {
    let mut scratch = board.clone();
    let side = scratch.side_to_move();
    let moves = scratch.legal_moves(side);
    let first = *moves.first()?;
    let depth = depth.max(1);

    let mut searcher = Searcher {
        tables,
        stats: SearchStats::default(),
        stop,
    };
    let mut root_scores = Vec::with_capacity(moves.len());
    for mv in moves {
        if searcher.stopped() {
            break;
        }
        let info = scratch.make_move(mv);
        let score = -searcher.negamax(&mut scratch, depth - 1, 1, -INF, INF);
        scratch.unmake_move(mv, info);
        if searcher.stopped() {
            break;
        }
        log_trace!("root move {} score {}", mv, score);
        root_scores.push((mv, score));
    }

    let mut best: Option<(Move, i32)> = None;
    for &(mv, score) in &root_scores {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    let (best_move, score) = best.unwrap_or((first, 0));
    let stopped = searcher.stopped();

    log_debug!(
        "depth {} nodes {} tt_hits {} cutoffs {} best {} score {}{}",
        depth,
        searcher.stats.nodes,
        searcher.stats.tt_hits,
        searcher.stats.cutoffs,
        best_move,
        score,
        if stopped { " (stopped)" } else { "" }
    );

    Some(SearchResult {
        best_move,
        score,
        root_scores,
        stats: searcher.stats,
        stopped,
    })
}
