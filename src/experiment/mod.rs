//! Independent repetitions and the statistics computed across them.
//!
//! An [`Experiment`] is one parameter row: a game, a modifier, learning
//! hyperparameters, and how many repetitions of how many episodes to run.
//! Running it yields an [`Ensemble`] of trajectories, the unit every
//! convergence statistic is computed over.

mod ensemble;
mod experiment;
mod measure;
mod runner;
mod summary;
mod sweep;

pub use ensemble::*;
pub use experiment::*;
pub use measure::*;
pub use runner::*;
pub use summary::*;
pub use sweep::*;
