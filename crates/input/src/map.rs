//! Mapping from input lines to game inputs.

use thiserror::Error;

use crate::types::{Digits, Guess, MAX_NUM_DIGITS};

/// Why an input line is not a usable guess.
///
/// Always recoverable: the caller re-prompts without spending an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedGuess {
    #[error("expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("guess must contain only the digits 0-9")]
    NotDecimal,
}

/// Strip one trailing line terminator (`\n` or `\r\n`).
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse a guess of exactly `num_digits` decimal digits.
///
/// Only the line terminator is removed; any other whitespace makes the
/// guess malformed.
pub fn parse_guess(line: &str, num_digits: usize) -> Result<Guess, MalformedGuess> {
    let line = strip_line_ending(line);

    let actual = line.chars().count();
    if actual != num_digits {
        return Err(MalformedGuess::WrongLength {
            expected: num_digits,
            actual,
        });
    }
    if num_digits > MAX_NUM_DIGITS {
        return Err(MalformedGuess::WrongLength {
            expected: MAX_NUM_DIGITS,
            actual,
        });
    }

    let mut digits = Digits::new();
    for c in line.chars() {
        match c.to_digit(10) {
            // `to_digit` only accepts ASCII 0-9 for radix 10.
            Some(d) => digits.push(d as u8),
            None => return Err(MalformedGuess::NotDecimal),
        }
    }

    Guess::from_digits(&digits).ok_or(MalformedGuess::NotDecimal)
}

/// Whether a replay answer means "yes" (case-insensitive `y` prefix).
pub fn wants_replay(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
