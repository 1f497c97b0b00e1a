use crate::*;
use rand::rngs::SmallRng;

/// Run `repetitions` independent Bush–Mosteller runs of `episodes` rounds.
///
/// Each repetition gets two fresh agents with identical hyperparameters
/// and random streams derived from `(seed, repetition, agent)`, so every
/// repetition is reproducible on its own and the parallel schedule has no
/// influence on the result.
pub fn run_repetitions(
    matrix: &PayoffMatrix,
    params: &Hyperparameters,
    repetitions: usize,
    episodes: usize,
    seed: u64,
) -> Result<Ensemble> {
    use rayon::iter::IntoParallelIterator;
    use rayon::iter::ParallelIterator;
    if repetitions == 0 {
        return Err(Error::config("nb_repetitions", repetitions, "must be positive"));
    }
    if episodes == 0 {
        return Err(Error::config("nb_episodes", episodes, "must be positive"));
    }
    params.validate()?;
    (0..repetitions)
        .into_par_iter()
        .map(|r| repetition(matrix, params, episodes, seed, r))
        .collect::<Result<Vec<Trajectory>>>()
        .map(Ensemble::from)
}

/// A single repetition, fully determined by its index and the base seed.
pub fn repetition(
    matrix: &PayoffMatrix,
    params: &Hyperparameters,
    episodes: usize,
    seed: u64,
    index: usize,
) -> Result<Trajectory> {
    let a = Agent::new(params, stream(seed, index, 0))?;
    let b = Agent::new(params, stream(seed, index, 1))?;
    let trajectory = BushMosteller::new([a, b], *matrix).run(episodes)?;
    log::debug!(
        "repetition {:>6} finished  {}  |  {}",
        index,
        trajectory.last().map(|e| e.strategies[0]).unwrap_or_default(),
        trajectory.last().map(|e| e.strategies[1]).unwrap_or_default(),
    );
    Ok(trajectory)
}

/// Random stream for one agent of one repetition.
pub fn stream(seed: u64, repetition: usize, agent: usize) -> SmallRng {
    use rand::SeedableRng;
    SmallRng::seed_from_u64(key(seed, repetition, agent))
}

/// Seed of one agent's stream. Built from SplitMix64 only, so the same
/// `(seed, repetition, agent)` maps to the same key on every toolchain.
fn key(seed: u64, repetition: usize, agent: usize) -> u64 {
    splitmix(splitmix(splitmix(seed) ^ repetition as u64) ^ agent as u64)
}

fn splitmix(x: u64) -> u64 {
    let z = x.wrapping_add(0x9E3779B97F4A7C15);
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
