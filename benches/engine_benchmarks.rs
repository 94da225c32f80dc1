//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use minimax_chess::{find_best_move_with_rng, Board};

/// Count legal move sequences of the given length (perft-style walk)
fn count_move_sequences(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let side = board.side_to_move();
    let mut nodes = 0;
    for mv in board.legal_moves(side).to_vec() {
        board.make_move(mv).expect("generated move has an origin");
        nodes += count_move_sequences(board, depth - 1);
        board.unmake_move(mv).expect("LIFO unwind");
    }
    nodes
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            let side = startpos.side_to_move();
            black_box(startpos.legal_moves(side))
        })
    });

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| {
            let side = middlegame.side_to_move();
            black_box(middlegame.legal_moves(side))
        })
    });

    group.finish();
}

fn bench_move_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_walk");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| count_move_sequences(&mut board, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let mut startpos = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let side = startpos.side_to_move();
                let mut rng = StdRng::seed_from_u64(42);
                black_box(find_best_move_with_rng(
                    &mut startpos,
                    side,
                    black_box(depth),
                    &mut rng,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_move_walk, bench_search);
criterion_main!(benches);
