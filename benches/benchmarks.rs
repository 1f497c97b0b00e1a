criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_supremum,
        reinforcing_strategy,
        running_single_repetition,
        running_parallel_ensemble,
        averaging_ensemble_trajectory,
}

fn computing_supremum(c: &mut criterion::Criterion) {
    let matrix = PayoffMatrix::from((Game::Chicken, Modifier::Fear));
    c.bench_function("compute supremum at a fractional aspiration", |b| {
        b.iter(|| matrix.supremum(std::hint::black_box(1.7)))
    });
}

fn reinforcing_strategy(c: &mut criterion::Criterion) {
    let strategy = Strategy::uniform();
    c.bench_function("reinforce a Strategy by a negative stimulus", |b| {
        b.iter(|| strategy.reinforce(Action::Cooperate, std::hint::black_box(-0.25), 0.5))
    });
}

fn running_single_repetition(c: &mut criterion::Criterion) {
    let matrix = PayoffMatrix::from(Game::PrisonersDilemma);
    let params = Hyperparameters::default();
    c.bench_function("run one repetition of 250 episodes", |b| {
        b.iter(|| repetition(&matrix, &params, 250, DEFAULT_SEED, 0))
    });
}

fn running_parallel_ensemble(c: &mut criterion::Criterion) {
    let experiment = "PD classic 0 2 0.5 1000 250"
        .parse::<Experiment>()
        .expect("valid row");
    c.bench_function("run 1000 repetitions of 250 episodes", |b| {
        b.iter(|| experiment.run())
    });
}

fn averaging_ensemble_trajectory(c: &mut criterion::Criterion) {
    let ensemble = "SG classic 0.1 2 0.5 1000 250"
        .parse::<Experiment>()
        .and_then(|e| e.run())
        .expect("valid run");
    c.bench_function("average cooperation over 1000 repetitions", |b| {
        b.iter(|| ensemble.cooperation())
    });
}

use bush_mosteller::*;
