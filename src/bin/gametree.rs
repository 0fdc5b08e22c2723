//! gametree CLI - minimax and alpha-beta search over explicit trees and
//! Tic-Tac-Toe
//!
//! This CLI provides:
//! - Solving explicit game trees from JSON files or built-in samples
//! - Analyzing Tic-Tac-Toe positions
//! - Playing Tic-Tac-Toe against the engine on the console

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "gametree")]
#[command(version, about = "Adversarial search over game trees", long_about = None)]
struct Cli {
    /// More log output on stderr (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an explicit game tree
    Solve(gametree::cli::commands::solve::SolveArgs),

    /// Find the optimal move in a Tic-Tac-Toe position
    Analyze(gametree::cli::commands::analyze::AnalyzeArgs),

    /// Play Tic-Tac-Toe on the console
    Play(gametree::cli::commands::play::PlayArgs),
}

fn level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logging::log_to_stderr(level(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Solve(args) => gametree::cli::commands::solve::execute(args),
        Commands::Analyze(args) => gametree::cli::commands::analyze::execute(args),
        Commands::Play(args) => gametree::cli::commands::play::execute(args),
    }
}
