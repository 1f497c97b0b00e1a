//! Trajectory artifacts on disk.
//!
//! Each experiment is persisted as one JSON array per (agent, metric)
//! pair, shaped repetition × episode, so a consumer can load "metric for
//! agent i across all repetitions" without touching the rest.

mod artifact;

pub use artifact::*;
