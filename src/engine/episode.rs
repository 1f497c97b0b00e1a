use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything that happened in one round, for both players.
///
/// Strategies and aspirations are recorded after they were updated,
/// stimuli as they were computed against the previous aspiration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub actions: [Action; N],
    pub strategies: [Strategy; N],
    pub stimuli: [Utility; N],
    pub aspirations: [Utility; N],
}

impl Episode {
    /// Scalar reading of `metric` for player `agent`.
    pub fn measure(&self, agent: usize, metric: Metric) -> f64 {
        match metric {
            Metric::Probability(action) => self.strategies[agent][action],
            Metric::Aspiration => self.aspirations[agent],
            Metric::Stimulus => self.stimuli[agent],
            Metric::Choice => self.actions[agent].index() as f64,
        }
    }
    /// Whether both players play `action` with probability above `threshold`.
    pub fn mutual(&self, action: Action, threshold: Probability) -> bool {
        self.strategies.iter().all(|s| s[action] > threshold)
    }
}
