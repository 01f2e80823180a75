use serde::Deserialize;

use castle_engine::board::{Board, GameStatus, SearchParams};
use castle_engine::engine::{Engine, MoveChoice};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    solution: String,
}

const PROBLEMS: &str = r#"{
  "problems": [
    { "name": "back rank queen", "fen": "6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", "solution": "e1e8" },
    { "name": "scholar's mate", "fen": "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4", "solution": "h5f7" },
    { "name": "back rank rook for black", "fen": "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", "solution": "a8a1" },
    { "name": "fool's mate", "fen": "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2", "solution": "d8h4" },
    { "name": "smothered mate", "fen": "6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1", "solution": "g5f7" },
    { "name": "queen and rook", "fen": "k7/8/1Q6/8/8/8/8/1R4K1 w - - 0 1", "solution": "b6b7" }
  ]
}"#;

fn problems() -> Vec<Problem> {
    let set: ProblemSet = serde_json::from_str(PROBLEMS).expect("invalid problem set");
    set.problems
}

#[test]
fn mate_in_one_solutions_mate() {
    for problem in problems() {
        let board = Board::from_fen(&problem.fen).expect("valid fen");
        let mv = board
            .parse_move(&problem.solution)
            .unwrap_or_else(|err| panic!("{}: {err}", problem.name));
        let after = board.apply_move(mv);
        assert_eq!(
            after.status(),
            GameStatus::Checkmate,
            "{} is not mate in {}",
            problem.solution,
            problem.name
        );
    }
}

#[test]
fn engine_finds_a_mate_in_one() {
    for problem in problems() {
        let board = Board::from_fen(&problem.fen).expect("valid fen");
        let mut engine = Engine::with_seed(SearchParams::depth(3).deterministic(), 11);
        let MoveChoice::Play { mv, .. } = engine.choose_move(&board, board.side_to_move()) else {
            panic!("{}: engine reported game over", problem.name);
        };
        assert_eq!(
            board.apply_move(mv).status(),
            GameStatus::Checkmate,
            "{}: engine played {mv}",
            problem.name
        );
    }
}
