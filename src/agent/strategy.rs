use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Probability distribution over the two actions.
///
/// Only two actions exist, so the distribution is kept on the simplex by
/// construction: whenever one component changes, the other is set to its
/// complement. There is never a renormalization step to drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strategy([Probability; 2]);

impl Strategy {
    /// Strategy that cooperates with probability `cooperate`.
    pub fn new(cooperate: Probability) -> Result<Self> {
        if (0. ..=1.).contains(&cooperate) {
            Ok(Self::with(Action::Cooperate, cooperate))
        } else {
            Err(Error::config("probability", cooperate, "must lie in [0, 1]"))
        }
    }
    pub fn uniform() -> Self {
        Self([0.5, 0.5])
    }
    pub fn get(&self, action: Action) -> Probability {
        self.0[action.index()]
    }
    pub fn as_array(&self) -> [Probability; 2] {
        self.0
    }

    /// Bush–Mosteller reinforcement of `action` by `stimulus`.
    ///
    /// Positive stimuli move the action's probability toward 1 in proportion
    /// to the remaining headroom, negative stimuli toward 0 in proportion to
    /// the current mass. With stimulus in [-1, 1] and learning rate in (0, 1]
    /// the step never leaves [0, 1].
    pub fn reinforce(&self, action: Action, stimulus: Utility, learning_rate: Probability) -> Self {
        if stimulus == 0. {
            return *self;
        }
        let p = self.get(action);
        let p = if stimulus > 0. {
            p + (1. - p) * learning_rate * stimulus
        } else {
            p + p * learning_rate * stimulus
        };
        Self::with(action, p.clamp(0., 1.))
    }

    /// Draw an action. Cooperation is chosen when a uniform draw
    /// in [0, 1) falls below its probability.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        if rng.random::<Probability>() < self.get(Action::Cooperate) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }

    fn with(action: Action, p: Probability) -> Self {
        let mut inner = [0.; 2];
        inner[action.index()] = p;
        inner[action.other().index()] = 1. - p;
        Self(inner)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::uniform()
    }
}

impl std::ops::Index<Action> for Strategy {
    type Output = Probability;
    fn index(&self, action: Action) -> &Self::Output {
        &self.0[action.index()]
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C {:.4} / D {:.4}", self.0[0], self.0[1])
    }
}
