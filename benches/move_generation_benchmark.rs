use quantum_chess::board::{Position, Team};
use quantum_chess::move_generator::generate_moves;
use quantum_chess::quantum_move::attempt_move;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let position = Position::starting_position();

    c.bench_function("generate moves from the starting position", |b| {
        b.iter(|| generate_moves(black_box(&position), Team::White))
    });

    c.bench_function("attempt every opening move", |b| {
        b.iter(|| attempt_all_moves(black_box(&position)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn attempt_all_moves(position: &Position) -> usize {
    generate_moves(position, Team::White)
        .iter()
        .filter_map(|candidate| attempt_move(position, candidate.piece_id, candidate.to).ok())
        .count()
}
