//! AI player.
//!
//! `Engine` owns the search tables and the opening RNG and turns a position
//! into a move decision. `EngineController` runs an engine on a background
//! thread so an interactive host never blocks on a search.

mod controller;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{
    search, Board, Color, GameStatus, Move, SearchParams, SearchResult, SearchStats, SearchTables,
};

pub use controller::{EngineController, SearchJob};

/// What the engine decided for the side it was asked to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    /// Play `mv`; `score` is the search score for the mover.
    Play { mv: Move, score: i32 },
    /// The side has no legal move. Never `GameStatus::Ongoing`.
    GameOver(GameStatus),
}

impl MoveChoice {
    #[must_use]
    pub const fn best_move(self) -> Option<Move> {
        match self {
            MoveChoice::Play { mv, .. } => Some(mv),
            MoveChoice::GameOver(_) => None,
        }
    }
}

/// Alpha-beta player with a randomized opening.
pub struct Engine {
    params: SearchParams,
    tables: SearchTables,
    rng: StdRng,
    stop: Option<Arc<AtomicBool>>,
    last_stats: SearchStats,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(SearchParams::default())
    }
}

impl Engine {
    /// Engine whose opening choices are seeded from the OS.
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Engine with reproducible opening choices.
    #[must_use]
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: SearchParams, rng: StdRng) -> Self {
        Engine {
            tables: SearchTables::new(params.tt_mb),
            params,
            rng,
            stop: None,
            last_stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the parameters, reallocating the table if its size changed.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.tt_mb != self.params.tt_mb {
            self.tables.resize_tt(params.tt_mb);
        }
        self.params = params;
    }

    /// Reset the transposition, killer and history tables.
    pub fn new_game(&mut self) {
        self.tables.new_game();
        self.last_stats.reset();
    }

    /// Flag polled during search; raising it ends the search early.
    pub fn set_stop_flag(&mut self, stop: Option<Arc<AtomicBool>>) {
        self.stop = stop;
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Hash table fullness in per mille.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tables.tt.hashfull_per_mille()
    }

    /// Run the search for `board`'s side to move at the configured depth.
    pub fn search(&mut self, board: &Board) -> Option<SearchResult> {
        let result = search::search(
            board,
            self.params.depth,
            &mut self.tables,
            self.stop.as_deref(),
        )?;
        self.last_stats = result.stats;
        Some(result)
    }

    /// Pick a move for `color` to play on `board`.
    ///
    /// If `color` is not the side to move the position is searched as though
    /// it were. A side with exactly one legal move plays it without
    /// searching.
    pub fn choose_move(&mut self, board: &Board, color: Color) -> MoveChoice {
        let flipped;
        let board = if board.side_to_move() == color {
            board
        } else {
            flipped = {
                let mut b = board.clone();
                b.set_side_to_move(color);
                b
            };
            &flipped
        };

        let moves = board.legal_moves(color);
        match moves.as_slice() {
            [] => return MoveChoice::GameOver(board.game_status(color)),
            [only] => {
                let score = board.apply_move(*only).evaluate_for(color);
                log_debug!("only move {} for {}", only, color);
                return MoveChoice::Play { mv: *only, score };
            }
            _ => {}
        }

        let Some(result) = self.search(board) else {
            return MoveChoice::GameOver(board.game_status(color));
        };

        let in_opening = board.game_ply() < self.params.opening_plies;
        // A stopped search may not have scored any root move
        if in_opening && self.params.opening_candidates > 1 && !result.root_scores.is_empty() {
            let ranked = result.ranked_moves();
            let pool = self.params.opening_candidates.min(ranked.len());
            let (mv, score) = ranked[self.rng.gen_range(0..pool)];
            log_debug!("opening pick {} ({}) from top {}", mv, score, pool);
            return MoveChoice::Play { mv, score };
        }

        MoveChoice::Play {
            mv: result.best_move,
            score: result.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_reported() {
        let mut engine = Engine::with_seed(SearchParams::depth(2), 1);
        let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
        assert_eq!(
            engine.choose_move(&mated, Color::Black),
            MoveChoice::GameOver(GameStatus::Checkmate)
        );
        let stalemated = Board::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            engine.choose_move(&stalemated, Color::Black),
            MoveChoice::GameOver(GameStatus::Stalemate)
        );
    }

    #[test]
    fn test_single_move_skips_search() {
        let mut engine = Engine::with_seed(SearchParams::depth(6), 1);
        // Black king in check from the rook with a single flight square
        let board = Board::from_fen("k7/8/1K6/8/8/8/8/R7 b - - 0 1").unwrap();
        assert_eq!(board.legal_moves(Color::Black).len(), 1);
        let choice = engine.choose_move(&board, Color::Black);
        assert_eq!(choice.best_move().map(|mv| mv.to_string()), Some("a8b8".into()));
        assert_eq!(engine.stats().nodes, 0);
    }

    #[test]
    fn test_set_params_resizes_table() {
        let mut engine = Engine::new(SearchParams::default().with_tt_mb(1));
        let small = engine.tables.tt.capacity();
        engine.set_params(SearchParams::default().with_tt_mb(4));
        assert!(engine.tables.tt.capacity() > small);
        assert_eq!(engine.params().tt_mb, 4);
    }
}
