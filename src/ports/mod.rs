//! Ports (trait boundaries) between the match runner and whoever chooses moves.
//!
//! The runner only knows the [`Agent`] trait; engines, random baselines and
//! console players are adapters implementing it.

pub mod agent;

pub use agent::Agent;
