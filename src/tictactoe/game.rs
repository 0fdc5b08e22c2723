//! Game records: the starting position, the moves played and the outcome

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    board::{Action, GameState, Player},
    rules,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal state, `None` while the game is still running
    pub fn of(state: &GameState) -> Option<Self> {
        if !rules::terminal(state) {
            return None;
        }
        Some(match state.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: GameState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on the empty board, X to move
    pub fn new() -> Self {
        Self::with_start(GameState::new())
    }

    /// Create a game that starts from an arbitrary position.
    ///
    /// A terminal starting position produces a game that is already over.
    pub fn with_start(initial: GameState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`](crate::Error::GameOver) once the game has ended and
    /// [`InvalidMove`](crate::Error::InvalidMove) for an occupied or off-board
    /// cell. The record is unchanged on error.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = rules::result(&current, action)?;
        debug!("{} plays {}", current.to_move, action);

        self.moves.push(Move {
            action,
            player: current.to_move,
        });
        self.outcome = GameOutcome::of(&new_state);

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get current board state by replaying the moves from the start.
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it was
    /// played in. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<GameState, crate::Error> {
        self.moves
            .iter()
            .try_fold(self.initial, |state, m| rules::result(&state, m.action))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_moves_and_outcome() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(
            game.current_state().unwrap(),
            GameState::from_string("XXXOO....").unwrap()
        );
    }

    #[test]
    fn test_play_after_game_over() {
        let mut game = Game::with_start(GameState::from_string("XX.OO....").unwrap());
        game.play(Action::new(0, 2)).unwrap();
        assert!(game.is_over());
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_invalid_move_leaves_record_unchanged() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 1, col: 1 }));
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn test_terminal_start_is_already_over() {
        let draw = GameState::from_string("XOXXOOOXX").unwrap();
        let game = Game::with_start(draw);
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }
}
