//! Subcommands of the gametree binary

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod analyze;
pub mod play;
pub mod solve;

/// Parse a side given on the command line (`x` or `o`).
pub(crate) fn parse_player_token(value: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!("Invalid player '{other}' (expected 'x' or 'o')")),
    }
}
