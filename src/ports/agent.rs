//! Agent port - anything that can pick a move in a Tic-Tac-Toe position

use crate::{
    Result,
    tictactoe::{Action, GameState},
};

/// A participant in a match.
///
/// # Examples
///
/// ```
/// use gametree::{
///     agents::SearchAgent,
///     ports::Agent,
///     tictactoe::{Action, GameState},
/// };
///
/// let mut engine = SearchAgent::new("Engine".to_string());
/// let state = GameState::from_string("XX.OO....").unwrap();
/// assert_eq!(engine.select_action(&state).unwrap(), Action::new(0, 2));
/// ```
pub trait Agent {
    /// Choose an action for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`NoValidMoves`](crate::Error::NoValidMoves) when `state` is
    /// terminal. Interactive agents may also fail on I/O.
    fn select_action(&mut self, state: &GameState) -> Result<Action>;

    /// Name used in logs and match summaries.
    fn name(&self) -> &str;
}
