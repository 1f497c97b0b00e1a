//! Error types for simulation, aggregation, and persistence.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between parsing a parameter row
/// and writing its trajectories to disk.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is out of range or could not be parsed.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    Config {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Every payoff equals the aspiration, so stimuli cannot be normalized.
    #[error("degenerate supremum at aspiration {aspiration}: all payoffs equal the aspiration")]
    Supremum { aspiration: f64 },

    /// Trajectories of unequal length cannot be averaged element-wise.
    #[error("ragged ensemble: repetition {repetition} has {found} episodes, expected {expected}")]
    Ragged {
        repetition: usize,
        expected: usize,
        found: usize,
    },

    /// The measurement episode does not exist in some repetition.
    #[error("cannot measure episode `{measure}`: repetition {repetition} has {length} episodes")]
    Measure {
        measure: crate::Measure,
        repetition: usize,
        length: usize,
    },

    /// Aggregation over an ensemble without repetitions.
    #[error("empty ensemble")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::Config {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
