use crate::*;
use rand::rngs::SmallRng;

/// One player: a mixed strategy, an aspiration level, and a private random stream.
///
/// Each episode the engine asks the agent to [`act`](Agent::act), tells it
/// the realized payoff through [`stimulus`](Agent::stimulus) and
/// [`learn`](Agent::learn), and finally moves its aspiration with
/// [`update_aspiration`](Agent::update_aspiration). The stimulus must be
/// computed before the aspiration moves.
#[derive(Debug, Clone)]
pub struct Agent {
    strategy: Strategy,
    aspiration: Utility,
    learning_rate: Probability,
    habituation: Probability,
    rng: SmallRng,
}

impl Agent {
    /// Fresh agent. The random stream is handed in by the caller so that
    /// repetitions never share a generator.
    pub fn new(params: &Hyperparameters, rng: SmallRng) -> Result<Self> {
        let params = params.validate()?;
        Ok(Self {
            strategy: Strategy::new(params.probability)?,
            aspiration: params.aspiration,
            learning_rate: params.learning_rate,
            habituation: params.habituation,
            rng,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn aspiration(&self) -> Utility {
        self.aspiration
    }

    /// Sample an action from the current strategy.
    pub fn act(&mut self) -> Action {
        self.strategy.sample(&mut self.rng)
    }

    /// Normalized satisfaction: (payoff - aspiration) / sup, in [-1, 1].
    /// A non-positive normalizer means the game is degenerate at this aspiration.
    pub fn stimulus(&self, payoff: Utility, sup: Utility) -> Result<Utility> {
        if sup > 0. && sup.is_finite() {
            Ok((payoff - self.aspiration) / sup)
        } else {
            Err(Error::Supremum {
                aspiration: self.aspiration,
            })
        }
    }

    /// Reinforce the action just taken and return the new strategy.
    pub fn learn(&mut self, stimulus: Utility, action: Action) -> Strategy {
        self.strategy = self
            .strategy
            .reinforce(action, stimulus, self.learning_rate);
        self.strategy
    }

    /// Exponential moving average of realized payoffs. Zero habituation freezes it.
    pub fn update_aspiration(&mut self, payoff: Utility) -> Utility {
        if self.habituation > 0. {
            self.aspiration = (1. - self.habituation) * self.aspiration + self.habituation * payoff;
        }
        self.aspiration
    }
}
