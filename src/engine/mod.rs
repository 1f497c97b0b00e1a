//! The Bush–Mosteller simulation loop.
//!
//! One run drives a fixed pair of agents through a fixed number of episodes
//! of one stage game and records every episode into a [`Trajectory`].

mod episode;
mod metric;
mod model;
mod trajectory;

pub use episode::*;
pub use metric::*;
pub use model::*;
pub use trajectory::*;
