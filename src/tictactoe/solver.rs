//! Exact minimax for Tic-Tac-Toe.
//!
//! The game tree is small enough to search to the end, so no evaluation
//! heuristic is involved: every value is the utility of a finished game under
//! perfect play by both sides.

use super::{Action, GameState};
use crate::{
    config::Algorithm,
    search::{self, NEG_INFINITY, POS_INFINITY, SearchResult, SearchStats, Searcher, Value},
};

/// No game lasts longer than this many plies, so it bounds every search.
pub const MAX_PLIES: usize = 9;

/// Value and best action for the maximizer (X) at `state`.
///
/// The action is `None` when `state` is terminal. Among equally good actions
/// the first in row-major order is chosen.
pub fn max_value(state: &GameState) -> crate::Result<(Value, Option<Action>)> {
    decide(state, true)
}

/// Value and best action for the minimizer (O) at `state`.
pub fn min_value(state: &GameState) -> crate::Result<(Value, Option<Action>)> {
    decide(state, false)
}

/// Value and best action for whichever side is to move.
///
/// # Examples
///
/// ```
/// use gametree::tictactoe::{self, Action, GameState};
///
/// // X to move can win on the top row.
/// let state = GameState::from_string("XX.OO....").unwrap();
/// let (value, action) = tictactoe::minimax(&state).unwrap();
/// assert_eq!(value, 1);
/// assert_eq!(action, Some(Action::new(0, 2)));
/// ```
pub fn minimax(state: &GameState) -> crate::Result<(Value, Option<Action>)> {
    if state.maximizing() {
        max_value(state)
    } else {
        min_value(state)
    }
}

fn decide(state: &GameState, maximizing: bool) -> crate::Result<(Value, Option<Action>)> {
    let line = search::minimax_path(state, MAX_PLIES, maximizing)?;
    Ok((line.value, line.best_move().copied()))
}

/// Full line of optimal play from `state` to the end of the game.
///
/// Both algorithms return the same line; alpha-beta gets there faster.
pub fn principal_variation(
    state: &GameState,
    algorithm: Algorithm,
) -> crate::Result<SearchResult<Action>> {
    Ok(solve(state, algorithm)?.0)
}

/// Search `state` with the given algorithm and report the work done.
pub fn solve(
    state: &GameState,
    algorithm: Algorithm,
) -> crate::Result<(SearchResult<Action>, SearchStats)> {
    let mut searcher = Searcher::new();
    let maximizing = state.maximizing();
    let line = match algorithm {
        Algorithm::Minimax => searcher.minimax_path(state, MAX_PLIES, maximizing)?,
        Algorithm::AlphaBeta => {
            searcher.alpha_beta_path(state, MAX_PLIES, maximizing, NEG_INFINITY, POS_INFINITY)?
        }
    };
    Ok((line, searcher.stats()))
}

/// Every legal action with the value it leads to, row-major.
pub fn evaluate_actions(
    state: &GameState,
    algorithm: Algorithm,
) -> crate::Result<Vec<(Action, Value)>> {
    if super::terminal(state) {
        return Ok(Vec::new());
    }

    super::actions(state)
        .into_iter()
        .map(|action| {
            let next = super::result(state, action)?;
            let (line, _) = solve(&next, algorithm)?;
            Ok((action, line.value))
        })
        .collect()
}
