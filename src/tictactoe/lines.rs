//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::winning_line(cells, player).is_some()
    }

    /// The first completed line belonging to `player`, in row, column, diagonal order
    pub fn winning_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
    }

    /// The player owning a completed line.
    ///
    /// Well-formed games never complete lines for both players; if that
    /// happens anyway the maximizer is reported.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        [Player::MAXIMIZER, Player::MAXIMIZER.opponent()]
            .into_iter()
            .find(|&player| Self::has_won(cells, player))
    }
}
