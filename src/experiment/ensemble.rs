use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// All trajectories of one experiment, indexed by repetition.
///
/// This is the only place where statistics cross repetition boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ensemble(Vec<Trajectory>);

impl Ensemble {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.0
    }

    /// `metric` for player `agent`, one row per repetition.
    pub fn series(&self, agent: usize, metric: Metric) -> Vec<Vec<f64>> {
        self.0.iter().map(|t| t.series(agent, metric)).collect()
    }

    /// Common trajectory length. Ragged ensembles are an error.
    pub fn episodes(&self) -> Result<usize> {
        let expected = self.0.first().map(Trajectory::len).ok_or(Error::Empty)?;
        match self
            .0
            .iter()
            .enumerate()
            .find(|(_, t)| t.len() != expected)
        {
            Some((repetition, t)) => Err(Error::Ragged {
                repetition,
                expected,
                found: t.len(),
            }),
            None => Ok(expected),
        }
    }

    /// Fraction of repetitions in which both agents play `action` with
    /// probability above `threshold` at the `measure` episode.
    ///
    /// With `Action::Cooperate` and [`SRE_THRESHOLD`] this is the rate of
    /// stochastically reached equilibrium.
    pub fn mutual_cooperation_rate(
        &self,
        action: Action,
        threshold: Probability,
        measure: Measure,
    ) -> Result<Probability> {
        if self.0.is_empty() {
            return Err(Error::Empty);
        }
        let mut hits = 0usize;
        for (repetition, trajectory) in self.0.iter().enumerate() {
            let episode = measure
                .resolve(trajectory.len())
                .and_then(|i| trajectory.get(i))
                .ok_or(Error::Measure {
                    measure,
                    repetition,
                    length: trajectory.len(),
                })?;
            if episode.mutual(action, threshold) {
                hits += 1;
            }
        }
        Ok(hits as Probability / self.0.len() as Probability)
    }

    /// SRE rate with the conventional cooperative action and threshold.
    pub fn sre_rate(&self, measure: Measure) -> Result<Probability> {
        self.mutual_cooperation_rate(Action::Cooperate, SRE_THRESHOLD, measure)
    }

    /// Element-wise mean of `metric` over every repetition and both agents.
    pub fn average_trajectory(&self, metric: Metric) -> Result<Vec<f64>> {
        let episodes = self.episodes()?;
        let n = (self.0.len() * N) as f64;
        let mut sum = vec![0.; episodes];
        for trajectory in &self.0 {
            for (total, episode) in sum.iter_mut().zip(trajectory) {
                *total += (0..N).map(|agent| episode.measure(agent, metric)).sum::<f64>();
            }
        }
        Ok(sum.into_iter().map(|total| total / n).collect())
    }

    /// Mean probability of cooperating at every episode.
    pub fn cooperation(&self) -> Result<Vec<Probability>> {
        self.average_trajectory(Metric::Probability(Action::Cooperate))
    }
}

impl From<Vec<Trajectory>> for Ensemble {
    fn from(trajectories: Vec<Trajectory>) -> Self {
        Self(trajectories)
    }
}

impl FromIterator<Trajectory> for Ensemble {
    fn from_iter<I: IntoIterator<Item = Trajectory>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Ensemble {
    type Item = Trajectory;
    type IntoIter = std::vec::IntoIter<Trajectory>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ensemble {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(coop: [Probability; 2]) -> Episode {
        Episode {
            actions: [Action::Cooperate; N],
            strategies: [Strategy::new(coop[0]).unwrap(), Strategy::new(coop[1]).unwrap()],
            stimuli: [0.; N],
            aspirations: [DEFAULT_ASPIRATION; N],
        }
    }

    fn trajectory(coops: &[[Probability; 2]]) -> Trajectory {
        coops.iter().copied().map(episode).collect::<Vec<_>>().into()
    }

    #[test]
    fn counts_mutual_cooperation() {
        let ensemble = Ensemble::from(vec![
            trajectory(&[[0.5, 0.5], [0.995, 0.999]]),
            trajectory(&[[0.5, 0.5], [0.995, 0.2]]),
            trajectory(&[[0.999, 0.999], [0.1, 0.1]]),
            trajectory(&[[0.5, 0.5], [1., 1.]]),
        ]);
        assert_eq!(ensemble.sre_rate(Measure::Last).unwrap(), 0.5);
        assert_eq!(ensemble.sre_rate(Measure::At(0)).unwrap(), 0.25);
        assert_eq!(
            ensemble
                .mutual_cooperation_rate(Action::Defect, 0.85, Measure::Last)
                .unwrap(),
            0.25
        );
    }

    #[test]
    fn threshold_is_strict() {
        let ensemble = Ensemble::from(vec![trajectory(&[[0.99, 0.99]])]);
        assert_eq!(ensemble.sre_rate(Measure::Last).unwrap(), 0.);
    }

    #[test]
    fn measures_each_repetition_at_its_own_end() {
        let ensemble = Ensemble::from(vec![
            trajectory(&[[1., 1.]]),
            trajectory(&[[0.5, 0.5], [0.5, 0.5], [1., 1.]]),
        ]);
        assert_eq!(ensemble.sre_rate(Measure::Last).unwrap(), 1.);
        assert!(matches!(
            ensemble.sre_rate(Measure::At(2)),
            Err(Error::Measure {
                measure: Measure::At(2),
                repetition: 0,
                length: 1
            })
        ));
    }

    #[test]
    fn last_of_empty_trajectory() {
        let ensemble = Ensemble::from(vec![trajectory(&[[1., 1.]]), trajectory(&[])]);
        let err = ensemble.sre_rate(Measure::Last).unwrap_err();
        assert!(matches!(
            err,
            Error::Measure {
                measure: Measure::Last,
                repetition: 1,
                length: 0
            }
        ));
        assert_eq!(err.to_string(), "cannot measure episode `last`: repetition 1 has 0 episodes");
    }

    #[test]
    fn empty_ensemble() {
        let ensemble = Ensemble::default();
        assert!(matches!(ensemble.sre_rate(Measure::Last), Err(Error::Empty)));
        assert!(matches!(ensemble.cooperation(), Err(Error::Empty)));
    }

    #[test]
    fn averages_over_repetitions_and_agents() {
        let ensemble = Ensemble::from(vec![
            trajectory(&[[0.5, 0.5], [1., 0.]]),
            trajectory(&[[0.25, 0.75], [1., 1.]]),
        ]);
        assert_eq!(ensemble.cooperation().unwrap(), vec![0.5, 0.75]);
        assert_eq!(
            ensemble
                .average_trajectory(Metric::Probability(Action::Defect))
                .unwrap(),
            vec![0.5, 0.25]
        );
        assert_eq!(
            ensemble.average_trajectory(Metric::Aspiration).unwrap(),
            vec![DEFAULT_ASPIRATION; 2]
        );
    }

    #[test]
    fn ragged_ensemble_is_rejected() {
        let ensemble = Ensemble::from(vec![
            trajectory(&[[0.5, 0.5], [0.5, 0.5]]),
            trajectory(&[[0.5, 0.5], [0.5, 0.5]]),
            trajectory(&[[0.5, 0.5]]),
        ]);
        assert!(matches!(
            ensemble.cooperation(),
            Err(Error::Ragged {
                repetition: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn ragged_simulated_ensemble_is_rejected() {
        let matrix = PayoffMatrix::from(Game::PrisonersDilemma);
        let params = Hyperparameters::default();
        let short = run_repetitions(&matrix, &params, 3, 10, 0).unwrap();
        let long = run_repetitions(&matrix, &params, 3, 20, 0).unwrap();
        let mixed = short.into_iter().chain(long).collect::<Ensemble>();
        assert!(matches!(
            mixed.average_trajectory(Metric::Stimulus),
            Err(Error::Ragged { .. })
        ));
    }

    #[test]
    fn series_slices_by_agent() {
        let ensemble = Ensemble::from(vec![
            trajectory(&[[0.5, 0.25], [0.75, 0.125]]),
            trajectory(&[[0.1, 0.2], [0.3, 0.4]]),
        ]);
        let c = Metric::Probability(Action::Cooperate);
        assert_eq!(ensemble.series(0, c), vec![vec![0.5, 0.75], vec![0.1, 0.3]]);
        assert_eq!(ensemble.series(1, c), vec![vec![0.25, 0.125], vec![0.2, 0.4]]);
    }

    #[test]
    fn lower_aspiration_favors_cooperation() {
        let rate = |aspiration: Utility| {
            format!("PD classic 0 {} 0.5 1000 250", aspiration)
                .parse::<Experiment>()
                .unwrap()
                .run()
                .unwrap()
                .sre_rate(Measure::Last)
                .unwrap()
        };
        let lo = rate(2.);
        let hi = rate(3.5);
        assert!((0. ..=1.).contains(&lo));
        assert!((0. ..=1.).contains(&hi));
        assert!(lo > hi, "SRE at A=2 ({:.3}) not above SRE at A=3.5 ({:.3})", lo, hi);
    }
}
