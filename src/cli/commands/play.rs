//! Play command - console games between humans, the engine and random agents

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use crate::{
    agents::{RandomAgent, SearchAgent},
    arena,
    cli::{
        commands::parse_player_token,
        output::{print_kv, print_section},
    },
    config::{Algorithm, Controller, MatchConfig},
    ports::Agent,
    tictactoe::{self, Action, GameOutcome, GameState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play Tic-Tac-Toe on the console")]
pub struct PlayArgs {
    /// Who plays X
    #[arg(long, value_enum)]
    pub x: Option<Controller>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub o: Option<Controller>,

    /// Which side moves first on an empty board (`x` or `o`)
    #[arg(long)]
    pub first: Option<String>,

    /// Start from this position instead of an empty board
    #[arg(long)]
    pub start: Option<String>,

    /// Search algorithm for engine players
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Random seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON match configuration; flags override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Reads moves typed as `row col` and asks again until one is legal.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    fn prompt(&mut self, state: &GameState) -> io::Result<String> {
        writeln!(self.output, "\n{state}")?;
        write!(self.output, "{} to move (row col): ", state.to_move)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was entered",
            ));
        }
        Ok(line)
    }
}

/// Parse `row col` (commas allowed) into an action; range is not checked.
fn parse_action(line: &str) -> Option<Action> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some(Action::new(row, col))
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, state: &GameState) -> crate::Result<Action> {
        if tictactoe::terminal(state) {
            return Err(crate::Error::NoValidMoves);
        }

        loop {
            let line = self
                .prompt(state)
                .map_err(|e| crate::Error::io("read move", e))?;
            let Some(action) = parse_action(&line) else {
                warn!("could not parse move '{}'", line.trim());
                writeln!(self.output, "Enter a move as two numbers 0-2, e.g. `1 1`.")
                    .map_err(|e| crate::Error::io("write prompt", e))?;
                continue;
            };
            match tictactoe::result(state, action) {
                Ok(_) => return Ok(action),
                Err(err) => {
                    writeln!(self.output, "{err}")
                        .map_err(|e| crate::Error::io("write prompt", e))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let start = match &args.start {
        Some(board) => GameState::from_string(board)
            .with_context(|| format!("parsing start position '{board}'"))?,
        None => GameState::new_with_player(config.first_player),
    };

    let mut x = build_agent(&config, Player::X);
    let mut o = build_agent(&config, Player::O);

    print_section(&format!("{} (X) vs {} (O)", x.name(), o.name()));
    let game = arena::run_match(x.as_mut(), o.as_mut(), start)?;
    let end = game.current_state()?;

    println!("\n{end}\n");
    let result = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) | None => "Draw".to_string(),
    };
    print_kv("Result", &result);
    let moves: Vec<String> = game.moves.iter().map(|m| m.action.to_string()).collect();
    print_kv("Moves", &moves.join(" "));

    Ok(())
}

fn resolve_config(args: &PlayArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    let x = args.x.unwrap_or(config.x);
    let o = args.o.unwrap_or(config.o);
    config = config.with_controllers(x, o);
    if let Some(first) = &args.first {
        config = config.with_first_player(parse_player_token(first)?);
    }
    if let Some(algorithm) = args.algorithm {
        let search = config.search.clone().with_algorithm(algorithm);
        config = config.with_search(search);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn build_agent(config: &MatchConfig, player: Player) -> Box<dyn Agent> {
    let name = format!("{player:?}");
    match config.controller(player) {
        Controller::Human => Box::new(HumanAgent::new(
            format!("Human {name}"),
            io::stdin().lock(),
            io::stdout(),
        )),
        Controller::Engine => Box::new(SearchAgent::with_config(
            format!("Engine {name}"),
            config.search.clone(),
        )),
        Controller::Random => {
            let agent_name = format!("Random {name}");
            match config.seed {
                // Distinct streams for the two sides under one seed.
                Some(seed) => Box::new(RandomAgent::with_seed(
                    agent_name,
                    seed.wrapping_add(player as u64),
                )),
                None => Box::new(RandomAgent::new(agent_name)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("1 2\n"), Some(Action::new(1, 2)));
        assert_eq!(parse_action(" 0,0 "), Some(Action::new(0, 0)));
        assert_eq!(parse_action("1"), None);
        assert_eq!(parse_action("a b"), None);
        assert_eq!(parse_action("1 2 3"), None);
    }

    #[test]
    fn test_human_agent_reprompts_until_legal() {
        let state = GameState::from_string("....X...._O").unwrap();
        let input = Cursor::new("nonsense\n1 1\n5 5\n0 2\n");
        let mut output = Vec::new();
        let mut human = HumanAgent::new("Human".to_string(), input, &mut output);

        assert_eq!(human.select_action(&state).unwrap(), Action::new(0, 2));
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("to move (row col)").count(), 4);
        assert!(transcript.contains("occupied"));
    }

    #[test]
    fn test_human_agent_eof_is_io_error() {
        let mut human = HumanAgent::new("Human".to_string(), Cursor::new(""), Vec::new());
        let err = human.select_action(&GameState::new()).unwrap_err();
        assert!(matches!(err, crate::Error::Io { .. }));
    }

    #[test]
    fn test_engine_match_from_config() {
        let args = PlayArgs {
            x: Some(Controller::Engine),
            o: Some(Controller::Random),
            first: Some("o".to_string()),
            start: None,
            algorithm: Some(Algorithm::AlphaBeta),
            seed: Some(9),
            config: None,
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.first_player, Player::O);
        assert_eq!(config.seed, Some(9));
        execute(args).unwrap();
    }
}
