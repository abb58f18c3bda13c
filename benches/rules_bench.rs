//! Rules Engine Benchmarks
//!
//! Performance benchmarks for the legality search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use democracy_chess::game::rules::{evaluate_status, legal_destinations, BoardState};
use democracy_chess::{ChessGame, PieceColor, Square};

fn bench_legal_destinations_starting(c: &mut Criterion) {
    let mut board = BoardState::standard();
    let knight = Square::at(7, 6);

    c.bench_function("legal_destinations_knight_start", |b| {
        b.iter(|| black_box(legal_destinations(&mut board, knight)))
    });
}

fn bench_evaluate_status_starting(c: &mut Criterion) {
    let mut board = BoardState::standard();

    c.bench_function("evaluate_status_starting", |b| {
        b.iter(|| black_box(evaluate_status(&mut board, PieceColor::White)))
    });
}

fn bench_all_legal_moves(c: &mut Criterion) {
    let mut board = BoardState::standard();
    let own: Vec<Square> = board
        .pieces_of(PieceColor::White)
        .map(|(square, _)| square)
        .collect();

    c.bench_function("all_legal_moves_white_start", |b| {
        b.iter(|| {
            let total: usize = own
                .iter()
                .map(|&from| legal_destinations(&mut board, from).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_full_move_cycle(c: &mut Criterion) {
    c.bench_function("submit_move_cycle", |b| {
        b.iter(|| {
            let mut game = ChessGame::new();
            let result = game.submit_move(Square::at(6, 4), Square::at(4, 4));
            black_box((result.is_ok(), game.outcome()))
        })
    });
}

criterion_group!(
    benches,
    bench_legal_destinations_starting,
    bench_evaluate_status_starting,
    bench_all_legal_moves,
    bench_full_move_cycle,
);
criterion_main!(benches);
