//! The stage game: two actions, four named payoffs, one 2x2 matrix.
//!
//! Every game in this crate is a symmetric 2x2 game fully described by
//! its Temptation, Reward, Punishment and Sucker payoffs. The three
//! canonical dilemmas differ only in how those four values are ordered.

mod action;
mod game;
mod matrix;
mod modifier;
mod payoffs;

pub use action::*;
pub use game::*;
pub use matrix::*;
pub use modifier::*;
pub use payoffs::*;
