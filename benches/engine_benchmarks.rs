//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use castle_engine::board::{search, Board, SearchTables};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Board::new()),
        ("middlegame", Board::from_fen(MIDDLEGAME).unwrap()),
        ("kiwipete", Board::from_fen(KIWIPETE).unwrap()),
    ];

    for (name, board) in &positions {
        group.bench_with_input(BenchmarkId::new("legal", name), board, |b, board| {
            b.iter(|| black_box(board.generate_moves()))
        });
        group.bench_with_input(BenchmarkId::new("raw", name), board, |b, board| {
            b.iter(|| black_box(board.raw_moves(board.side_to_move())))
        });
    }

    group.finish();
}

fn bench_make_unmake(c: &mut Criterion) {
    let board = Board::from_fen(KIWIPETE).unwrap();
    let moves = board.generate_moves();
    c.bench_function("make_unmake/kiwipete", |b| {
        let mut scratch = board.clone();
        b.iter(|| {
            for &mv in &moves {
                let info = scratch.make_move(mv);
                scratch.unmake_move(mv, info);
            }
        })
    });
    c.bench_function("apply_move/kiwipete", |b| {
        b.iter(|| {
            for &mv in &moves {
                black_box(board.apply_move(mv));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let board = Board::new();
                let mut tables = SearchTables::new(16);
                search(&board, depth, &mut tables, None)
            })
        });
    }

    // Many captures and both castling options
    group.bench_function("kiwipete/2", |b| {
        let board = Board::from_fen(KIWIPETE).unwrap();
        b.iter(|| {
            let mut tables = SearchTables::new(16);
            search(&board, 2, &mut tables, None)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen).unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
    }

    group.bench_function("zobrist/middlegame", |b| {
        let board = Board::from_fen(MIDDLEGAME).unwrap();
        b.iter(|| black_box(board.zobrist_hash()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_make_unmake,
    bench_search,
    bench_eval
);
criterion_main!(benches);
