use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cube_engine::core::{CubeState, ScrambleConfig};
use cube_engine::moves::{apply_move, apply_token, MoveToken};
use cube_engine::scramble::scrambled_cube_with;

fn bench_single_moves(c: &mut Criterion) {
    let cube = scrambled_cube_with(&ScrambleConfig::default().with_seed(1)).state;

    let mut group = c.benchmark_group("apply_token");
    for token in MoveToken::all() {
        group.bench_with_input(BenchmarkId::from_parameter(token), &token, |b, &token| {
            b.iter(|| apply_token(black_box(&cube), token));
        });
    }
    group.finish();

    c.bench_function("apply_move_str", |b| {
        b.iter(|| apply_move(black_box(&cube), black_box("R'")));
    });
}

fn bench_scramble(c: &mut Criterion) {
    for length in [20, 100, 1000] {
        let config = ScrambleConfig::default().with_length(length).with_seed(42);
        c.bench_with_input(BenchmarkId::new("scrambled_cube", length), &config, |b, config| {
            b.iter(|| scrambled_cube_with(black_box(config)));
        });
    }

    c.bench_function("solved_clone", |b| {
        let cube = CubeState::solved();
        b.iter(|| black_box(cube));
    });
}

criterion_group!(benches, bench_single_moves, bench_scramble);
criterion_main!(benches);
