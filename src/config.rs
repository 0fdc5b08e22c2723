//! Configuration types for searches and matches.
//!
//! Both types are plain serde structs so the CLI can read them from a JSON
//! file and then override individual fields from command-line flags.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Which search routine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Exhaustive minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }
}

/// Search settings shared by tree solving and the Tic-Tac-Toe engine.
///
/// Tic-Tac-Toe is always searched to the end of the game, so there is no ply
/// budget here; `solve` takes one on the command line. Unknown fields are
/// rejected rather than ignored.
///
/// # Examples
///
/// ```
/// use gametree::config::{Algorithm, SearchConfig};
///
/// let config = SearchConfig::default().with_algorithm(Algorithm::Minimax);
/// assert_eq!(config.algorithm, Algorithm::Minimax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Set the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Read a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        load_json(path.as_ref())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

/// Who controls one side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Controller {
    /// Moves typed on the console
    Human,
    /// Exact search
    Engine,
    /// Uniformly random legal moves
    Random,
}

/// Match settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Controller for X
    pub x: Controller,
    /// Controller for O
    pub o: Controller,
    /// Which side moves first
    pub first_player: Player,
    /// Seed for random controllers
    pub seed: Option<u64>,
    /// Search used by engine controllers
    pub search: SearchConfig,
}

impl MatchConfig {
    /// Engine (X) against a human (O), X moving first.
    pub fn new() -> Self {
        Self {
            x: Controller::Engine,
            o: Controller::Human,
            first_player: Player::X,
            seed: None,
            search: SearchConfig::default(),
        }
    }

    pub fn with_controllers(mut self, x: Controller, o: Controller) -> Self {
        self.x = x;
        self.o = o;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Controller assigned to `player`.
    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Read a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        load_json(path.as_ref())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let json = fs::read_to_string(path)
        .map_err(|e| crate::Error::io(format!("read config {}", path.display()), e))?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_config_fills_missing_fields() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.algorithm, Algorithm::AlphaBeta);

        let config: SearchConfig = serde_json::from_str(r#"{"algorithm": "minimax"}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Minimax);
    }

    #[test]
    fn ply_budget_is_not_accepted_from_config() {
        assert!(serde_json::from_str::<SearchConfig>(r#"{"depth": 3}"#).is_err());
        assert!(serde_json::from_str::<MatchConfig>(r#"{"search": {"depth": 1}}"#).is_err());
        assert!(serde_json::from_str::<MatchConfig>(r#"{"player_x": "engine"}"#).is_err());
    }

    #[test]
    fn match_config_parses_controllers() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"x": "random", "o": "engine", "seed": 7}"#).unwrap();
        assert_eq!(config.controller(Player::X), Controller::Random);
        assert_eq!(config.controller(Player::O), Controller::Engine);
        assert_eq!(config.first_player, Player::X);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn match_config_builder() {
        let config = MatchConfig::new()
            .with_controllers(Controller::Engine, Controller::Engine)
            .with_first_player(Player::O)
            .with_seed(1)
            .with_search(SearchConfig::new(Algorithm::Minimax));
        assert_eq!(config.o, Controller::Engine);
        assert_eq!(config.first_player, Player::O);
        assert_eq!(config.search.algorithm, Algorithm::Minimax);
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Minimax.as_str(), "minimax");
        assert_eq!(Algorithm::AlphaBeta.as_str(), "alpha-beta");
    }
}
