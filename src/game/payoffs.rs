use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The four payoff magnitudes of a symmetric 2x2 game, by name.
///
/// - `t` Temptation: defecting against a cooperator
/// - `r` Reward: mutual cooperation
/// - `p` Punishment: mutual defection
/// - `s` Sucker: cooperating against a defector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoffs {
    pub t: Utility,
    pub r: Utility,
    pub p: Utility,
    pub s: Utility,
}

impl Payoffs {
    /// The canonical Prisoner's Dilemma magnitudes, T > R > P > S.
    pub const fn canonical() -> Self {
        Self {
            t: TEMPTATION,
            r: REWARD,
            p: PUNISHMENT,
            s: SUCKER,
        }
    }
    pub fn iter(&self) -> std::array::IntoIter<Utility, 4> {
        [self.t, self.r, self.p, self.s].into_iter()
    }
    /// Smallest integer bounding |x - reference| over all four payoffs.
    pub fn supremum(&self, reference: Utility) -> Utility {
        self.iter()
            .map(|x| (x - reference).abs())
            .fold(0., Utility::max)
            .ceil()
    }
}

impl Default for Payoffs {
    fn default() -> Self {
        Self::canonical()
    }
}

impl std::fmt::Display for Payoffs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T={} R={} P={} S={}", self.t, self.r, self.p, self.s)
    }
}
