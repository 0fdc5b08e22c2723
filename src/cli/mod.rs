//! CLI infrastructure for the gametree binary
//!
//! This module provides the command-line interface for solving explicit
//! trees, analyzing Tic-Tac-Toe positions and playing against the engine.

pub mod commands;
pub mod output;
