use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Per-episode, per-agent quantity that can be sliced out of a trajectory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Probability of playing the given action after learning.
    Probability(Action),
    /// Aspiration level after the update.
    Aspiration,
    /// Normalized stimulus received.
    Stimulus,
    /// Action taken, as its index.
    Choice,
}

impl Metric {
    /// The metrics persisted for every experiment.
    pub const fn all() -> [Self; 4] {
        [
            Self::Probability(Action::Cooperate),
            Self::Aspiration,
            Self::Stimulus,
            Self::Choice,
        ]
    }
    /// Short tag used in artifact file names.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Probability(Action::Cooperate) => "prob_c",
            Self::Probability(Action::Defect) => "prob_d",
            Self::Aspiration => "asp",
            Self::Stimulus => "stim",
            Self::Choice => "act",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
