use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The three canonical symmetric 2x2 social dilemmas.
///
/// All three share the same four magnitudes and differ only in which
/// payoff sits where:
///
/// | Game             | Ordering      |
/// |------------------|---------------|
/// | PrisonersDilemma | T > R > P > S |
/// | StagHunt         | R > T > P > S |
/// | Chicken          | T > R > S > P |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Game {
    #[default]
    PrisonersDilemma,
    StagHunt,
    Chicken,
}

impl Game {
    /// Unmodified payoff vector for this game.
    pub fn payoffs(&self) -> Payoffs {
        self.payoffs_from(Payoffs::canonical())
    }
    /// Rearrange a Prisoner's Dilemma vector into this game's ordering.
    /// Fields are exchanged as named, so a modified PD vector carries its
    /// perturbation into whichever slot the exchange moves it to.
    pub fn payoffs_from(&self, pd: Payoffs) -> Payoffs {
        match self {
            Self::PrisonersDilemma => pd,
            Self::StagHunt => Payoffs {
                t: pd.r,
                r: pd.t,
                ..pd
            },
            Self::Chicken => Payoffs {
                p: pd.s,
                s: pd.p,
                ..pd
            },
        }
    }
    pub const fn all() -> [Self; 3] {
        [Self::PrisonersDilemma, Self::StagHunt, Self::Chicken]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PrisonersDilemma => "Prisoner's Dilemma",
            Self::StagHunt => "Stag Hunt",
            Self::Chicken => "Chicken",
        }
    }
}

impl std::str::FromStr for Game {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PD" => Ok(Self::PrisonersDilemma),
            "SG" | "SH" => Ok(Self::StagHunt),
            "CH" => Ok(Self::Chicken),
            _ => Err(Error::config("game", s, "expected PD, SG, or CH")),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrisonersDilemma => write!(f, "PD"),
            Self::StagHunt => write!(f, "SG"),
            Self::Chicken => write!(f, "CH"),
        }
    }
}
