use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Payoff perturbation applied on top of a canonical game.
///
/// Fear makes being exploited worse, Greed makes mutual cooperation
/// more attractive. Classic leaves the game untouched.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    Classic,
    Fear,
    Greed,
}

impl Modifier {
    pub fn apply(&self, payoffs: Payoffs) -> Payoffs {
        match self {
            Self::Classic => payoffs,
            Self::Fear => Payoffs {
                s: payoffs.s - MODIFIER_DELTA,
                ..payoffs
            },
            Self::Greed => Payoffs {
                r: payoffs.r + MODIFIER_DELTA,
                ..payoffs
            },
        }
    }
    pub const fn all() -> [Self; 3] {
        [Self::Classic, Self::Fear, Self::Greed]
    }
}

impl std::str::FromStr for Modifier {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "fear" => Ok(Self::Fear),
            "greed" => Ok(Self::Greed),
            _ => Err(Error::config("mode", s, "expected classic, fear, or greed")),
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Fear => write!(f, "fear"),
            Self::Greed => write!(f, "greed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fear_lowers_sucker() {
        let base = Payoffs::canonical();
        let fear = Modifier::Fear.apply(base);
        assert_eq!(fear.s, base.s - 1.);
        assert_eq!((fear.t, fear.r, fear.p), (base.t, base.r, base.p));
    }

    #[test]
    fn greed_raises_reward() {
        let base = Payoffs::canonical();
        let greed = Modifier::Greed.apply(base);
        assert_eq!(greed.r, base.r + 1.);
        assert_eq!((greed.t, greed.p, greed.s), (base.t, base.p, base.s));
    }

    #[test]
    fn parse() {
        for modifier in Modifier::all() {
            assert_eq!(modifier.to_string().parse::<Modifier>().ok(), Some(modifier));
        }
        assert_eq!("FEAR".parse::<Modifier>().ok(), Some(Modifier::Fear));
        assert!("panic".parse::<Modifier>().is_err());
    }
}
