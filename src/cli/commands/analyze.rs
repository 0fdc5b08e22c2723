//! Analyze command - optimal play from a Tic-Tac-Toe position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{format_path, print_kv, print_section, print_stats, print_subsection},
    config::Algorithm,
    tictactoe::{self, GameState},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move in a Tic-Tac-Toe position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order, e.g. `XO..X...._O`
    #[arg(default_value = ".........")]
    pub board: String,

    /// Search algorithm
    #[arg(long, short = 'a', value_enum, default_value_t = Algorithm::AlphaBeta)]
    pub algorithm: Algorithm,

    /// Also list the value of every legal move
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = GameState::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;

    print_section("Position");
    println!("{state}");
    print_kv("To move", &state.to_move.to_string());

    if tictactoe::terminal(&state) {
        print_kv("Status", "game over");
        print_kv("Utility", &tictactoe::utility(&state).to_string());
        return Ok(());
    }

    let (line, stats) = tictactoe::solve(&state, args.algorithm)?;
    print_subsection("Optimal play");
    print_kv("Value", &line.value.to_string());
    match line.best_move() {
        Some(action) => print_kv("Best action", &action.to_string()),
        None => print_kv("Best action", "none"),
    }
    print_kv("Line", &format_path(&line.path));
    print_stats(&stats);

    if args.all {
        print_subsection("Action values");
        for (action, value) in tictactoe::evaluate_actions(&state, args.algorithm)? {
            print_kv(&action.to_string(), &value.to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_board() {
        let args = AnalyzeArgs {
            board: "XXXX".to_string(),
            algorithm: Algorithm::AlphaBeta,
            all: false,
        };
        assert!(execute(args).is_err());
    }

    #[test]
    fn test_analyze_terminal_board() {
        let args = AnalyzeArgs {
            board: "XXXOO....".to_string(),
            algorithm: Algorithm::Minimax,
            all: true,
        };
        execute(args).unwrap();
    }
}
