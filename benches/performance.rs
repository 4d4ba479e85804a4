use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pickem::fixtures::round_robin;
use pickem::matrix::compute_matrix;
use pickem::ranking::{rank, BracketThresholds};
use pickem::standings::aggregate;
use pickem::store::Mutation;
use pickem::tui::action::Action;
use pickem::tui::reducer::reduce;
use pickem::tui::state::AppState;
use pickem::tui::types::Side;

const SIZES: [u32; 3] = [8, 16, 32];

/// Benchmark the derivation pipeline on full round robins of growing size
fn bench_derivation(c: &mut Criterion) {
    let thresholds = BracketThresholds::default();
    let mut group = c.benchmark_group("derivation");

    for n in SIZES {
        let store = round_robin(n, n as usize);

        group.bench_with_input(BenchmarkId::new("aggregate", n), &store, |b, store| {
            b.iter(|| black_box(aggregate(store.teams(), store.matches())))
        });

        let tally = aggregate(store.teams(), store.matches());
        group.bench_with_input(BenchmarkId::new("rank", n), &tally, |b, tally| {
            b.iter(|| black_box(rank(tally, &thresholds)))
        });

        group.bench_with_input(BenchmarkId::new("compute_matrix", n), &store, |b, store| {
            b.iter(|| black_box(compute_matrix(store.teams(), store.matches())))
        });
    }

    group.finish();
}

/// Benchmark one prediction round trip: mutate, then recompute everything
fn bench_apply(c: &mut Criterion) {
    let thresholds = BracketThresholds::default();
    let mut group = c.benchmark_group("apply");

    for n in SIZES {
        let store = round_robin(n, n as usize);
        let open = store.upcoming()[0].0;
        let team_id = store.matches()[open].team1_id;

        group.bench_with_input(BenchmarkId::new("toggle_prediction", n), &store, |b, store| {
            let mut store = store.clone();
            b.iter(|| {
                black_box(
                    store.apply(
                        Mutation::TogglePrediction {
                            match_index: open,
                            team_id,
                        },
                        &thresholds,
                    ),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark reducer dispatch of a pick with the sample-sized tournament
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = reduce(
        AppState::default(),
        Action::TournamentLoaded(Ok(round_robin(16, 16))),
    )
    .0;

    let mut group = c.benchmark_group("reducer");

    group.bench_function("pick_team", |b| {
        b.iter_batched(
            || state.clone(),
            |state| black_box(reduce(state, Action::PickTeam(Side::Team1))),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("clone_full_state", |b| b.iter(|| black_box(state.clone())));

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_apply, bench_reducer_dispatch);
criterion_main!(benches);
