use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_engine::game::Game;
use std::hint::black_box;

/// Play ~20 random moves on a fresh game to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> Game {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        if game.is_over() {
            break;
        }
        if game.advance_if_no_move() {
            continue;
        }
        let moves = game.legal_moves();
        let mv = moves.choose(&mut rng).copied().unwrap();
        game.attempt_move(mv).unwrap();
    }
    game
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_legal_moves(c: &mut Criterion) {
    let game = setup_midgame();
    c.bench_function("legal_moves", |b| b.iter(|| black_box(game.legal_moves())));
}

fn bench_attempt_move(c: &mut Criterion) {
    let game = setup_midgame();
    let mv = game.legal_moves()[0];
    c.bench_function("attempt_move", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                black_box(g.attempt_move(mv)).unwrap();
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_is_over(c: &mut Criterion) {
    let game = setup_midgame();
    c.bench_function("is_over", |b| b.iter(|| black_box(game.is_over())));
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let mut rng = StdRng::seed_from_u64(123);
            while !game.is_over() {
                if game.advance_if_no_move() {
                    continue;
                }
                let moves = game.legal_moves();
                let mv = moves.choose(&mut rng).copied().unwrap();
                game.attempt_move(mv).unwrap();
            }
            black_box(game.outcome())
        })
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_attempt_move,
    bench_is_over,
    bench_random_playout,
);
criterion_main!(benches);
