use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Immutable 2x2 payoff table built from a named payoff vector.
///
/// ```text
///              C        D
///        C  (R, R)   (S, T)
///        D  (T, S)   (P, P)
/// ```
///
/// The matrix is `Copy` and never mutated, so every repetition of an
/// experiment can hold its own copy without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    payoffs: Payoffs,
}

impl PayoffMatrix {
    pub fn payoff(&self, actions: (Action, Action)) -> (Utility, Utility) {
        let Payoffs { t, r, p, s } = self.payoffs;
        match actions {
            (Action::Cooperate, Action::Cooperate) => (r, r),
            (Action::Cooperate, Action::Defect) => (s, t),
            (Action::Defect, Action::Cooperate) => (t, s),
            (Action::Defect, Action::Defect) => (p, p),
        }
    }
    /// The payoff vector this matrix was built from.
    pub fn vector(&self) -> Payoffs {
        self.payoffs
    }
    /// Normalizer that keeps (payoff - reference) / sup inside [-1, 1].
    /// Depends on the reference, so it is recomputed whenever aspiration moves.
    pub fn supremum(&self, reference: Utility) -> Utility {
        self.payoffs.supremum(reference)
    }
}

impl From<Payoffs> for PayoffMatrix {
    fn from(payoffs: Payoffs) -> Self {
        Self { payoffs }
    }
}

impl From<(Game, Modifier)> for PayoffMatrix {
    fn from((game, modifier): (Game, Modifier)) -> Self {
        Self::from(game.payoffs_from(modifier.apply(Payoffs::canonical())))
    }
}

impl From<Game> for PayoffMatrix {
    fn from(game: Game) -> Self {
        Self::from((game, Modifier::Classic))
    }
}

#[rustfmt::skip]
impl std::fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌───┬──────────────┬──────────────┐")?;
        writeln!(f, "│   │            C │            D │")?;
        writeln!(f, "├───┼──────────────┼──────────────┤")?;
        for a in Action::all() {
            let (c0, c1) = self.payoff((a, Action::Cooperate));
            let (d0, d1) = self.payoff((a, Action::Defect));
            writeln!(
                f,
                "│ {} │ {:>5.1}, {:>5.1} │ {:>5.1}, {:>5.1} │",
                a, c0, c1, d0, d1
            )?;
        }
        writeln!(f, "└───┴──────────────┴──────────────┘")?;
        Ok(())
    }
}
