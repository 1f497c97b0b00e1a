use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One parameter row: which game to play, how agents learn,
/// and how many repetitions of how many episodes to run.
///
/// Rows are parsed from seven whitespace-separated fields:
///
/// ```text
/// game mode habituation aspiration learning_rate nb_repetitions nb_episodes
/// PD   fear 0           2          0.5           1000           250
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub game: Game,
    pub modifier: Modifier,
    pub habituation: Probability,
    pub aspiration: Utility,
    pub learning_rate: Probability,
    pub repetitions: usize,
    pub episodes: usize,
    pub probability: Probability,
    pub seed: u64,
}

impl Experiment {
    pub fn new(
        game: Game,
        modifier: Modifier,
        habituation: Probability,
        aspiration: Utility,
        learning_rate: Probability,
        repetitions: usize,
        episodes: usize,
    ) -> Result<Self> {
        Self {
            game,
            modifier,
            habituation,
            aspiration,
            learning_rate,
            repetitions,
            episodes,
            probability: DEFAULT_PROBABILITY,
            seed: DEFAULT_SEED,
        }
        .validate()
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    pub fn with_probability(self, probability: Probability) -> Result<Self> {
        Self {
            probability,
            ..self
        }
        .validate()
    }
    pub fn with_aspiration(self, aspiration: Utility) -> Result<Self> {
        Self { aspiration, ..self }.validate()
    }

    /// Reject every out-of-range field before anything runs.
    pub fn validate(self) -> Result<Self> {
        if self.repetitions == 0 {
            return Err(Error::config("nb_repetitions", self.repetitions, "must be positive"));
        }
        if self.episodes == 0 {
            return Err(Error::config("nb_episodes", self.episodes, "must be positive"));
        }
        self.hyperparameters().validate()?;
        Ok(self)
    }

    pub fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            learning_rate: self.learning_rate,
            habituation: self.habituation,
            aspiration: self.aspiration,
            probability: self.probability,
        }
    }
    pub fn matrix(&self) -> PayoffMatrix {
        PayoffMatrix::from((self.game, self.modifier))
    }

    /// File-name friendly identifier of this parameter set.
    /// Carries the initial probability and seed on top of the parameter row,
    /// so runs that differ only in those never share artifacts.
    pub fn label(&self) -> String {
        format!(
            "{}_p{}_s{}",
            self.to_string().split_whitespace().collect::<Vec<_>>().join("_"),
            self.probability,
            self.seed
        )
    }

    /// Run every repetition. Repetitions are independent and run in parallel;
    /// the ensemble is identical to a sequential run with the same seed.
    pub fn run(&self) -> Result<Ensemble> {
        self.validate()?;
        log::info!("running {} ({} x {})", self.label(), self.repetitions, self.episodes);
        let ensemble = run_repetitions(
            &self.matrix(),
            &self.hyperparameters(),
            self.repetitions,
            self.episodes,
            self.seed,
        )?;
        log::info!("finished {}", self.label());
        Ok(ensemble)
    }
}

impl Experiment {
    /// Parse a parameter file: one row per line, blank lines and `#` comments skipped.
    pub fn batch(text: &str) -> Result<Vec<Self>> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('#'))
            .map(str::parse)
            .collect()
    }
}

impl std::str::FromStr for Experiment {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let fields = s.split_whitespace().collect::<Vec<_>>();
        match fields.as_slice() {
            [game, mode, h, a, l, reps, eps] => Self::new(
                game.parse()?,
                mode.parse()?,
                float("habituation", h)?,
                float("aspiration", a)?,
                float("learning_rate", l)?,
                count("nb_repetitions", reps)?,
                count("nb_episodes", eps)?,
            ),
            _ => Err(Error::config("parameters", s.trim(), "expected 7 fields")),
        }
    }
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.game,
            self.modifier,
            self.habituation,
            self.aspiration,
            self.learning_rate,
            self.repetitions,
            self.episodes
        )
    }
}

fn float(field: &'static str, s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| Error::config(field, s, "not a number"))
}

fn count(field: &'static str, s: &str) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| Error::config(field, s, "not a non-negative integer"))
}
