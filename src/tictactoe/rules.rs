//! The four primitives that turn Tic-Tac-Toe into a searchable game tree.
//!
//! States are never materialized as a tree: [`GameState`] implements
//! [`GameNode`] so the search engine expands positions on demand through
//! [`actions`] and [`result`].

use super::{Action, Cell, GameState, Player};
use crate::search::{GameNode, Value};

/// Empty cells of `state`, row-major.
///
/// The list does not depend on whether the game is over; use [`terminal`] to
/// decide whether to ask for actions at all.
pub fn actions(state: &GameState) -> Vec<Action> {
    state
        .empty_positions()
        .into_iter()
        .map(Action::from_index)
        .collect()
}

/// The state reached when the side to move marks `action`.
///
/// # Errors
///
/// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) if the cell is off
/// the board or already marked. `state` itself is never modified.
#[must_use = "result returns a new game state; the original is unchanged"]
pub fn result(state: &GameState, action: Action) -> crate::Result<GameState> {
    let index = action
        .index()
        .filter(|&index| state.cells[index] == Cell::Empty)
        .ok_or(crate::Error::InvalidMove {
            row: action.row,
            col: action.col,
        })?;

    let mut next = *state;
    next.cells[index] = state.to_move.to_cell();
    next.to_move = state.to_move.opponent();
    Ok(next)
}

/// True once a line is complete or the board is full.
pub fn terminal(state: &GameState) -> bool {
    utility(state) != 0 || state.is_full()
}

/// +1 if X has a line, -1 if O has one, 0 otherwise.
pub fn utility(state: &GameState) -> Value {
    match state.winner() {
        Some(player) if player.is_maximizer() => 1,
        Some(_) => -1,
        None => 0,
    }
}

impl GameNode for GameState {
    type Move = Action;
    type Error = crate::Error;

    fn is_terminal(&self) -> bool {
        terminal(self)
    }

    fn value(&self) -> Value {
        utility(self)
    }

    fn moves(&self) -> Vec<Action> {
        actions(self)
    }

    fn play(&self, mv: &Action) -> crate::Result<GameState> {
        result(self, *mv)
    }
}

impl GameState {
    /// Whether the side to move is the maximizer
    pub fn maximizing(&self) -> bool {
        self.to_move == Player::MAXIMIZER
    }
}
