//! Session: drives a [`GameState`] through the console until the player quits.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::console::Console;
use crate::core::GameState;
use crate::game_view::{
    answer_reveal, banner, guess_budget, guess_header, FAREWELL, OUT_OF_GUESSES, REPLAY_QUESTION,
    ROUND_READY,
};
use crate::input::{parse_guess, wants_replay};
use crate::types::{Guess, Phase};

/// Play rounds until the player declines to replay.
///
/// Returns an error for I/O failures, including closed input.
pub fn run<R: BufRead, W: Write>(state: &mut GameState, console: &mut Console<R, W>) -> Result<()> {
    console.write_line(&banner(state.config().num_digits()))?;
    state.start()?;
    announce_round(state, console)?;

    loop {
        match state.phase() {
            Phase::AwaitingGuess => {
                let guess = read_guess(state, console)?;
                if let Some(result) = state.submit_guess(&guess) {
                    console.write_clues(&result)?;
                }
                if state.phase() == Phase::RoundLost {
                    console.write_line(OUT_OF_GUESSES)?;
                    if let Some(secret) = state.secret() {
                        console.write_line(&answer_reveal(secret))?;
                    }
                }
            }
            Phase::RoundWon | Phase::RoundLost => {
                state.finish_round();
            }
            Phase::AwaitingReplay => {
                console.write_line(REPLAY_QUESTION)?;
                let play_again = wants_replay(console.prompt()?);
                if state.answer_replay(play_again)? {
                    announce_round(state, console)?;
                }
            }
            Phase::NotStarted => {
                state.start()?;
                announce_round(state, console)?;
            }
            Phase::Terminated => break,
        }
    }

    console.write_line(FAREWELL)?;
    console.flush()
}

fn announce_round<R: BufRead, W: Write>(state: &GameState, console: &mut Console<R, W>) -> Result<()> {
    console.write_line(ROUND_READY)?;
    console.write_line(&guess_budget(state.config().max_guesses()))
}

/// Prompt until a well-formed guess arrives. Rejected lines cost nothing.
fn read_guess<R: BufRead, W: Write>(state: &GameState, console: &mut Console<R, W>) -> Result<Guess> {
    let num_digits = state.config().num_digits();
    loop {
        console.write_line(&guess_header(state.guess_number()))?;
        match parse_guess(console.prompt()?, num_digits) {
            Ok(guess) => return Ok(guess),
            Err(err) => debug!("rejected guess #{}: {}", state.guess_number(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use std::io::Cursor;

    /// Secret of the first round for `seed`.
    fn first_secret(config: GameConfig, seed: u32) -> String {
        let mut preview = GameState::new(config, seed);
        preview.start().unwrap();
        preview.secret().map(|s| s.to_string()).unwrap_or_default()
    }

    fn play(config: GameConfig, seed: u32, input: &str) -> (GameState, Result<()>, String) {
        play_bytes(config, seed, input.as_bytes())
    }

    fn play_bytes(config: GameConfig, seed: u32, input: &[u8]) -> (GameState, Result<()>, String) {
        let mut state = GameState::new(config, seed);
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        let result = run(&mut state, &mut console);
        let out = String::from_utf8(console.into_output()).unwrap();
        (state, result, out)
    }

    #[test]
    fn test_win_then_quit() {
        let config = GameConfig::default();
        let secret = first_secret(config, 7);
        let (state, result, out) = play(config, 7, &format!("{secret}\nno\n"));

        assert!(result.is_ok());
        assert!(state.is_terminated());
        assert_eq!(state.rounds_won(), 1);
        assert!(out.contains("Guess #1: \n> You got it!\n"));
        assert!(out.ends_with("Do you want to play again? (yes or no)\n> Thanks for playing!\n"));
    }

    #[test]
    fn test_malformed_input_does_not_consume_guesses() {
        let config = GameConfig::default();
        let secret = first_secret(config, 3);
        let input = format!("12\nabc\n12a\n{secret}\nn\n");
        let (state, result, out) = play(config, 3, &input);

        assert!(result.is_ok());
        assert_eq!(state.rounds_won(), 1);
        assert_eq!(out.matches("Guess #1: ").count(), 4);
        assert!(!out.contains("Guess #2: "));
    }

    #[test]
    fn test_invalid_utf8_guess_is_reprompted() {
        let config = GameConfig::default();
        let secret = first_secret(config, 3);
        let mut input = b"\xff\xfe\xfd\n".to_vec();
        input.extend_from_slice(format!("{secret}\nno\n").as_bytes());
        let (state, result, out) = play_bytes(config, 3, &input);

        assert!(result.is_ok());
        assert_eq!(state.rounds_won(), 1);
        assert_eq!(out.matches("Guess #1: ").count(), 2);
        assert!(!out.contains("Guess #2: "));
    }

    #[test]
    fn test_loss_reveals_secret() {
        let config = GameConfig::new(3, 2).unwrap();
        let secret = first_secret(config, 11);
        // A guess with a repeated digit can never equal a unique-digit secret.
        let (state, result, out) = play(config, 11, "000\n111\nno\n");

        assert!(result.is_ok());
        assert_eq!(state.rounds_won(), 0);
        assert!(out.contains("You have 2 guesses to get it."));
        assert!(out.contains("You ran out of guesses.\n"));
        assert!(out.contains(&format!("The answer was {secret}.\n")));
        assert!(!out.contains("Guess #3: "));
    }

    #[test]
    fn test_replay_starts_new_round() {
        let config = GameConfig::new(3, 1).unwrap();
        let (state, result, out) = play(config, 5, "000\nYes\n111\nnope\n");

        assert!(result.is_ok());
        assert_eq!(state.rounds_played(), 2);
        assert_eq!(out.matches("I have thought up a number.").count(), 2);
        assert_eq!(out.matches("You ran out of guesses.").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (state, result, _out) = play(GameConfig::default(), 1, "12\n");
        assert!(result.is_err());
        assert_eq!(state.phase(), Phase::AwaitingGuess);
        assert_eq!(state.guess_number(), 1);
    }
}
