use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Fixed learning parameters shared by both agents of a repetition.
///
/// Validated once, before any episode runs; an agent built from a
/// `Hyperparameters` value never needs to check its inputs again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Step size of the probability update, in (0, 1].
    pub learning_rate: Probability,
    /// Weight of the latest payoff in the aspiration average, in [0, 1].
    pub habituation: Probability,
    /// Initial aspiration level.
    pub aspiration: Utility,
    /// Initial probability of cooperating, in [0, 1].
    pub probability: Probability,
}

impl Hyperparameters {
    pub fn validate(self) -> Result<Self> {
        if !(self.learning_rate > 0. && self.learning_rate <= 1.) {
            return Err(Error::config("learning_rate", self.learning_rate, "must lie in (0, 1]"));
        }
        if !(0. ..=1.).contains(&self.habituation) {
            return Err(Error::config("habituation", self.habituation, "must lie in [0, 1]"));
        }
        if !self.aspiration.is_finite() {
            return Err(Error::config("aspiration", self.aspiration, "must be finite"));
        }
        Strategy::new(self.probability)?;
        Ok(self)
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            habituation: DEFAULT_HABITUATION,
            aspiration: DEFAULT_ASPIRATION,
            probability: DEFAULT_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Hyperparameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_learning_rate() {
        for learning_rate in [0., -0.5, 1.01, Probability::NAN] {
            let params = Hyperparameters {
                learning_rate,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(Error::Config { field: "learning_rate", .. })
            ));
        }
    }

    #[test]
    fn rejects_habituation() {
        for habituation in [-0.1, 1.5, Probability::NAN] {
            let params = Hyperparameters {
                habituation,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(Error::Config { field: "habituation", .. })
            ));
        }
    }

    #[test]
    fn rejects_aspiration() {
        let params = Hyperparameters {
            aspiration: Utility::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_probability() {
        let params = Hyperparameters {
            probability: 2.,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::Config { field: "probability", .. })
        ));
    }

    #[test]
    fn accepts_boundaries() {
        let params = Hyperparameters {
            learning_rate: 1.,
            habituation: 1.,
            aspiration: -3.,
            probability: 0.,
        };
        assert!(params.validate().is_ok());
    }
}
