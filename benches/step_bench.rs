use criterion::{criterion_group, criterion_main, Criterion};
use snake_engine::{Direction, GameRng, GameState};

fn bench_circling_snake_1000_ticks() {
    let mut state = GameState::new(50, 50, GameRng::new(42));
    let turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    for tick in 0..1000 {
        if state.is_game_over() {
            break;
        }
        state.change_direction(turns[tick % turns.len()]);
        state.step();
    }
}

fn bench_new_session() {
    let state = GameState::new(50, 50, GameRng::new(42));
    assert!(!state.is_game_over());
}

fn step_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    group.bench_function("circling_1000_ticks", |b| b.iter(bench_circling_snake_1000_ticks));

    group.bench_function("new_session", |b| b.iter(bench_new_session));

    group.finish();
}

criterion_group!(benches, step_bench);
criterion_main!(benches);
