//! Benchmarks for the transition hot path.
//!
//! The session layer validates every submitted action, so `apply` (working
//! copy clone included) and movement search dominate server cost.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use grid_duel::abilities::AbilityId;
use grid_duel::board::path_distance;
use grid_duel::core::{Action, Neighborhood, PlayerId, Tile};
use grid_duel::rules::{DuelEngine, Rules};

fn bench_state_clone(c: &mut Criterion) {
    let engine = DuelEngine::standard(42);
    let state = engine.initial_state();

    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_apply_move(c: &mut Criterion) {
    let mut engine = DuelEngine::standard(42);
    let state = engine.initial_state();
    let action = Action::Move {
        player: PlayerId::P1,
        to: Tile::new(3, 3),
    };

    c.bench_function("apply_move", |b| {
        b.iter(|| black_box(engine.apply(black_box(&state), black_box(&action))))
    });
}

fn bench_apply_rejected(c: &mut Criterion) {
    let mut engine = DuelEngine::standard(42);
    let state = engine.initial_state();
    let action = Action::Cast {
        player: PlayerId::P1,
        ability: AbilityId::Strike,
        target: Tile::new(2, 4),
    };

    c.bench_function("apply_rejected", |b| {
        b.iter(|| black_box(engine.apply(black_box(&state), black_box(&action))))
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let engine = DuelEngine::standard(42);
    let state = engine.initial_state();

    c.bench_function("legal_actions", |b| b.iter(|| black_box(engine.legal_actions(black_box(&state)))));
}

fn bench_path_distance(c: &mut Criterion) {
    let engine = DuelEngine::standard(42);
    let state = engine.initial_state();
    let board = &engine.config().board;

    c.bench_function("path_distance_corner_to_corner", |b| {
        b.iter(|| {
            black_box(path_distance(
                board,
                &state,
                Neighborhood::Eight,
                black_box(Tile::new(0, 9)),
                black_box(Tile::new(9, 0)),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_state_clone,
    bench_apply_move,
    bench_apply_rejected,
    bench_legal_actions,
    bench_path_distance,
);
criterion_main!(benches);
