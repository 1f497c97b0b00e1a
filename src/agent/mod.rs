//! A single Bush–Mosteller learner.
//!
//! An agent is nothing more than a mixed strategy over two actions, an
//! aspiration level, and its own random stream. The learning rule is a
//! pure recurrence: there are no hidden states beyond those three.

mod agent;
mod params;
mod strategy;

pub use agent::*;
pub use params::*;
pub use strategy::*;
