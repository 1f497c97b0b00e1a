use serde::Deserialize;
use serde::Serialize;

/// One of the two moves available in every stage game.
///
/// Index 0 is conventionally cooperation, index 1 defection. The learning
/// rule never looks at the meaning, only at the index.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    pub const fn index(self) -> usize {
        match self {
            Self::Cooperate => 0,
            Self::Defect => 1,
        }
    }
    /// The action not taken.
    pub const fn other(self) -> Self {
        match self {
            Self::Cooperate => Self::Defect,
            Self::Defect => Self::Cooperate,
        }
    }
    pub const fn all() -> [Self; 2] {
        [Self::Cooperate, Self::Defect]
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action.index()
    }
}

impl TryFrom<usize> for Action {
    type Error = crate::Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Cooperate),
            1 => Ok(Self::Defect),
            _ => Err(crate::Error::config("action", index, "must be 0 or 1")),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cooperate => write!(f, "C"),
            Self::Defect => write!(f, "D"),
        }
    }
}
