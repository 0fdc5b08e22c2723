//! Ready-made agents: the exact search engine and a uniform random baseline

use log::trace;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    config::SearchConfig,
    ports::Agent,
    tictactoe::{self, Action, GameState},
};

/// Plays the first optimal action found by a full search.
pub struct SearchAgent {
    name: String,
    config: SearchConfig,
}

impl SearchAgent {
    /// Create an engine using alpha-beta pruning
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self { name, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> Result<Action> {
        if tictactoe::terminal(state) {
            return Err(crate::Error::NoValidMoves);
        }

        let (line, stats) = tictactoe::solve(state, self.config.algorithm)?;
        trace!(
            "{}: value {} after {} nodes ({} cutoffs)",
            self.name, line.value, stats.nodes, stats.cutoffs
        );
        line.best_move().copied().ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks uniformly among the legal actions.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from the thread RNG
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<Action> {
        if tictactoe::terminal(state) {
            return Err(crate::Error::NoValidMoves);
        }

        tictactoe::actions(state)
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Algorithm;

    #[test]
    fn search_agent_blocks_threat() {
        let mut agent = SearchAgent::with_config(
            "Engine".to_string(),
            SearchConfig::new(Algorithm::Minimax),
        );
        let state = GameState::from_string("XX..O....").unwrap();
        assert_eq!(agent.select_action(&state).unwrap(), Action::new(0, 2));
        assert_eq!(agent.name(), "Engine");
    }

    #[test]
    fn agents_refuse_finished_games() {
        let state = GameState::from_string("XXXOO....").unwrap();
        let mut engine = SearchAgent::new("Engine".to_string());
        let mut random = RandomAgent::with_seed("Random".to_string(), 3);
        assert!(matches!(
            engine.select_action(&state),
            Err(crate::Error::NoValidMoves)
        ));
        assert!(matches!(
            random.select_action(&state),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn random_agent_is_reproducible_and_legal() {
        let state = GameState::from_string("XO.X.O...").unwrap();
        let mut first = RandomAgent::with_seed("a".to_string(), 42);
        let mut second = RandomAgent::with_seed("b".to_string(), 42);
        for _ in 0..20 {
            let action = first.select_action(&state).unwrap();
            assert_eq!(action, second.select_action(&state).unwrap());
            assert!(tictactoe::actions(&state).contains(&action));
        }
    }
}
