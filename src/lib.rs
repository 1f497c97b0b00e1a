//! Bush–Mosteller reinforcement learning in repeated 2x2 matrix games.
//!
//! Two agents repeatedly play a Prisoner's Dilemma, Stag Hunt, or Chicken.
//! Each agent holds a mixed strategy over {cooperate, defect} and an
//! aspiration level. After every round the realized payoff is compared to
//! the aspiration, normalized into a stimulus in [-1, 1], and the stimulus
//! reinforces (or inhibits) the action that was just taken.
//!
//! # Module Structure
//!
//! - `game` — Actions, payoff vectors, and the payoff matrix
//! - `agent` — Strategy, hyperparameters, and the learning rule
//! - `engine` — Episode loop and trajectory recording
//! - `experiment` — Repetitions, ensembles, and convergence statistics
//! - `save` — Per-agent, per-metric artifacts on disk
pub mod agent;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod game;
pub mod save;

pub use agent::*;
pub use engine::*;
pub use error::*;
pub use experiment::*;
pub use game::*;
pub use save::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, aspirations, and stimuli.
pub type Utility = f64;
/// Action probabilities and convergence rates.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players. The model is fixed at two.
pub const N: usize = 2;
/// Canonical Temptation payoff.
pub const TEMPTATION: Utility = 4.;
/// Canonical Reward payoff.
pub const REWARD: Utility = 3.;
/// Canonical Punishment payoff.
pub const PUNISHMENT: Utility = 1.;
/// Canonical Sucker payoff.
pub const SUCKER: Utility = 0.;
/// How far Fear lowers the Sucker payoff and Greed raises the Reward payoff.
pub const MODIFIER_DELTA: Utility = 1.;

// ============================================================================
// LEARNING DEFAULTS
// Classic Bush–Mosteller: fixed aspiration, uniform initial strategy.
// ============================================================================
/// Step size of the probability update, in (0, 1].
pub const DEFAULT_LEARNING_RATE: Probability = 0.5;
/// Initial reference payoff level.
pub const DEFAULT_ASPIRATION: Utility = 2.;
/// Aspiration smoothing. Zero freezes aspiration for the whole run.
pub const DEFAULT_HABITUATION: Probability = 0.;
/// Initial probability of cooperating.
pub const DEFAULT_PROBABILITY: Probability = 0.5;

// ============================================================================
// CONVERGENCE STATISTICS
// ============================================================================
/// Both agents must cooperate with at least this probability to count as SRE.
pub const SRE_THRESHOLD: Probability = 0.99;
/// Lower end of the default aspiration sweep.
pub const SWEEP_ASPIRATION_MIN: Utility = 0.;
/// Upper end of the default aspiration sweep.
pub const SWEEP_ASPIRATION_MAX: Utility = 4.;
/// Number of points in the default aspiration sweep.
pub const SWEEP_POINTS: usize = 40;

// ============================================================================
// RUNTIME DEFAULTS
// ============================================================================
/// Base seed from which every repetition's random streams are derived.
pub const DEFAULT_SEED: u64 = 0x5EED;
/// Directory where trajectory artifacts are written.
pub const DEFAULT_OUTPUT: &str = "data";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
