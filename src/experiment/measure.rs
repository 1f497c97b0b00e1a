use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which episode of a repetition defines "converged".
///
/// Always chosen by the caller; repetitions may differ in length, so
/// `Last` resolves against each trajectory separately.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Measure {
    #[default]
    Last,
    At(usize),
}

impl Measure {
    /// Episode index inside a trajectory of length `len`, if it exists.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        match *self {
            Self::Last => len.checked_sub(1),
            Self::At(i) if i < len => Some(i),
            Self::At(_) => None,
        }
    }
}

impl std::str::FromStr for Measure {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "last" => Ok(Self::Last),
            n => n
                .parse::<usize>()
                .map(Self::At)
                .map_err(|_| Error::config("measure", s, "expected `last` or an episode index")),
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Last => write!(f, "last"),
            Self::At(i) => write!(f, "{}", i),
        }
    }
}
