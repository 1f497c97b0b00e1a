use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Convergence statistics of one experiment, as printed after each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub experiment: Experiment,
    pub measure: Measure,
    pub threshold: Probability,
    /// Mean cooperation probability at the measured episode.
    pub cooperation: Probability,
    /// Fraction of repetitions in mutual cooperation above the threshold.
    pub sre: Probability,
}

impl Summary {
    pub fn new(
        experiment: &Experiment,
        ensemble: &Ensemble,
        measure: Measure,
        threshold: Probability,
    ) -> Result<Self> {
        let sre = ensemble.mutual_cooperation_rate(Action::Cooperate, threshold, measure)?;
        let curve = ensemble.cooperation()?;
        let cooperation = measure
            .resolve(curve.len())
            .and_then(|i| curve.get(i).copied())
            .ok_or(Error::Measure {
                measure,
                repetition: 0,
                length: curve.len(),
            })?;
        Ok(Self {
            experiment: *experiment,
            measure,
            threshold,
            cooperation,
            sre,
        })
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = &self.experiment;
        writeln!(f, "┌────────────────────┬──────────┬──────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Game               │     Mode │   Aspire │  Episode │   P(C)   │ SRE>{:<5}│", self.threshold)?;
        writeln!(f, "├────────────────────┼──────────┼──────────┼──────────┼──────────┼──────────┤")?;
        writeln!(
            f,
            "│ {:<18} │ {:>8} │ {:>8.3} │ {:>8} │ {:>8.4} │ {:>8.4} │",
            e.game.name(),
            e.modifier.to_string(),
            e.aspiration,
            self.measure.to_string(),
            self.cooperation,
            self.sre,
        )?;
        writeln!(f, "└────────────────────┴──────────┴──────────┴──────────┴──────────┴──────────┘")?;
        Ok(())
    }
}
