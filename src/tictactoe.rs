//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod solver;

pub use board::{Action, Cell, GameState, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{actions, result, terminal, utility};
pub use solver::{
    MAX_PLIES, evaluate_actions, max_value, min_value, minimax, principal_variation, solve,
};
