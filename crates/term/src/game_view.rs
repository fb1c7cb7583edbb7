//! GameView: every piece of text the game shows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::types::{ClueResult, Secret};

/// Input prompt printed before every read.
pub const INPUT_PROMPT: &str = "> ";

pub const ROUND_READY: &str = "I have thought up a number.";
pub const OUT_OF_GUESSES: &str = "You ran out of guesses.";
pub const REPLAY_QUESTION: &str = "Do you want to play again? (yes or no)";
pub const FAREWELL: &str = "Thanks for playing!";

/// Rules and worked example shown once at startup.
pub fn banner(num_digits: usize) -> String {
    format!(
        "Bagels, a deductive logic game.

I am thinking of a {num_digits}-digit number with no repeated digits.
Try to guess what it is. Here are some clues:
When I say:    That means:
  Pico         One digit is correct but in the wrong position.
  Fermi        One digit is correct and in the right position.
  Bagels       No digit is correct.

For example, if the secret number was 248 and your guess was 843, the
clues would be Fermi Pico."
    )
}

pub fn guess_budget(max_guesses: u32) -> String {
    format!("You have {max_guesses} guesses to get it.")
}

pub fn guess_header(guess_number: u32) -> String {
    format!("Guess #{guess_number}: ")
}

pub fn answer_reveal(secret: &Secret) -> String {
    format!("The answer was {secret}.")
}

/// Colour for a clue line when colour output is on.
pub fn clue_color(result: &ClueResult) -> Color {
    match result {
        ClueResult::Exact => Color::Green,
        ClueResult::Clues(_) => Color::Yellow,
        ClueResult::Bagels => Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Clue;

    #[test]
    fn test_banner_mentions_digit_count_and_example() {
        let text = banner(3);
        assert!(text.starts_with("Bagels, a deductive logic game."));
        assert!(text.contains("I am thinking of a 3-digit number with no repeated digits."));
        assert!(text.contains("secret number was 248 and your guess was 843"));
        assert!(text.ends_with("clues would be Fermi Pico."));
    }

    #[test]
    fn test_banner_follows_config() {
        assert!(banner(5).contains("a 5-digit number"));
    }

    #[test]
    fn test_round_text() {
        assert_eq!(guess_budget(10), "You have 10 guesses to get it.");
        assert_eq!(guess_header(4), "Guess #4: ");
        assert_eq!(
            answer_reveal(&Secret::parse("042").unwrap()),
            "The answer was 042."
        );
    }

    #[test]
    fn test_clue_colors_differ_by_outcome() {
        assert_eq!(clue_color(&ClueResult::Exact), Color::Green);
        assert_eq!(clue_color(&ClueResult::Bagels), Color::DarkGrey);
        assert_eq!(
            clue_color(&ClueResult::from_clues([Clue::Pico])),
            Color::Yellow
        );
    }
}
