//! Running matches between two agents

use log::{debug, info};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Game, GameOutcome, GameState, Player},
};

/// Play `start` to the end, asking `x` and `o` for moves in turn.
///
/// An agent that proposes an illegal action aborts the match with
/// [`InvalidMove`](crate::Error::InvalidMove); re-asking is the agent's own
/// business.
///
/// # Examples
///
/// ```
/// use gametree::{agents::SearchAgent, arena, tictactoe::{GameOutcome, GameState}};
///
/// let mut x = SearchAgent::new("X".to_string());
/// let mut o = SearchAgent::new("O".to_string());
/// let game = arena::run_match(&mut x, &mut o, GameState::new()).unwrap();
/// assert_eq!(game.outcome, Some(GameOutcome::Draw));
/// ```
pub fn run_match(x: &mut dyn Agent, o: &mut dyn Agent, start: GameState) -> Result<Game> {
    let mut game = Game::with_start(start);
    let mut state = start;

    while !game.is_over() {
        let agent: &mut dyn Agent = match state.to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let action = agent.select_action(&state)?;
        debug!("{} ({}) chose {}", agent.name(), state.to_move, action);

        game.play(action)?;
        state = game.current_state()?;
    }

    match game.outcome {
        Some(GameOutcome::Win(Player::X)) => info!("{} wins as X", x.name()),
        Some(GameOutcome::Win(Player::O)) => info!("{} wins as O", o.name()),
        _ => info!("draw between {} and {}", x.name(), o.name()),
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{agents::RandomAgent, tictactoe::rules};

    #[test]
    fn random_match_ends_in_terminal_state() {
        let mut x = RandomAgent::with_seed("x".to_string(), 1);
        let mut o = RandomAgent::with_seed("o".to_string(), 2);
        let game = run_match(&mut x, &mut o, GameState::new()).unwrap();
        let end = game.current_state().unwrap();
        assert!(rules::terminal(&end));
        assert_eq!(GameOutcome::of(&end), game.outcome);
    }

    #[test]
    fn finished_start_plays_no_moves() {
        let mut x = RandomAgent::with_seed("x".to_string(), 1);
        let mut o = RandomAgent::with_seed("o".to_string(), 2);
        let start = GameState::from_string("XXXOO....").unwrap();
        let game = run_match(&mut x, &mut o, start).unwrap();
        assert!(game.moves.is_empty());
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}
