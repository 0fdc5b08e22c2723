//! Minimax and alpha-beta search for two-player zero-sum games
//!
//! This crate provides:
//! - A search engine generic over anything implementing [`search::GameNode`]
//! - Explicit game trees with labeled nodes, loadable from JSON
//! - A complete Tic-Tac-Toe implementation searched to the end of the game
//! - Agents and a match runner for engine, random and console players

pub mod agents;
pub mod arena;
pub mod cli;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod search;
pub mod tictactoe;
pub mod tree;

pub use error::{Error, Result};
pub use search::{GameNode, SearchResult, SearchStats, Searcher, Value};
pub use tree::{NodeId, TreeNode};
