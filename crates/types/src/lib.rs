//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no I/O, making them usable in any
//! context (core logic, input parsing, console rendering).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_NUM_DIGITS` | 3 | Digits per secret and per guess |
//! | `DEFAULT_MAX_GUESSES` | 10 | Guess budget per round |
//! | `MAX_NUM_DIGITS` | 10 | Size of the digit pool (0-9) |
//!
//! # Clues
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `Fermi` | A digit is correct and in the right position |
//! | `Pico` | A digit is correct but in the wrong position |
//! | `Bagels` | No digit is correct |
//!
//! # Examples
//!
//! ```
//! use bagels_types::{Clue, ClueResult, Secret};
//!
//! let secret = Secret::parse("248").unwrap();
//! assert_eq!(secret.len(), 3);
//! assert_eq!(secret.to_string(), "248");
//!
//! let result = ClueResult::from_clues([Clue::Pico, Clue::Fermi]);
//! assert_eq!(result.to_string(), "Fermi Pico");
//! assert_eq!(ClueResult::Exact.to_string(), "You got it!");
//! ```

use std::fmt;

use arrayvec::ArrayVec;

/// Default number of digits in the secret (3)
pub const DEFAULT_NUM_DIGITS: usize = 3;

/// Default guess budget per round (10)
pub const DEFAULT_MAX_GUESSES: u32 = 10;

/// Number of distinct decimal digits; caps the secret length.
pub const MAX_NUM_DIGITS: usize = 10;

/// Digit values (0-9), stack-only.
pub type Digits = ArrayVec<u8, MAX_NUM_DIGITS>;

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for &d in digits {
        write!(f, "{}", char::from(b'0' + d))?;
    }
    Ok(())
}

/// Secret number for one round.
///
/// Always holds 1..=10 pairwise distinct digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    digits: Digits,
}

impl Secret {
    /// Build a secret from digit values.
    ///
    /// Returns `None` if the slice is empty, too long, contains a value above 9,
    /// or repeats a digit.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.is_empty() || digits.len() > MAX_NUM_DIGITS {
            return None;
        }
        let mut seen = [false; MAX_NUM_DIGITS];
        for &d in digits {
            if d > 9 || seen[d as usize] {
                return None;
            }
            seen[d as usize] = true;
        }
        let mut out = Digits::new();
        out.extend(digits.iter().copied());
        Some(Self { digits: out })
    }

    /// Parse a secret from its decimal representation
    ///
    /// # Examples
    ///
    /// ```
    /// use bagels_types::Secret;
    ///
    /// assert!(Secret::parse("248").is_some());
    /// assert!(Secret::parse("242").is_none());
    /// assert!(Secret::parse("2a8").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut digits = Digits::new();
        for b in s.bytes() {
            if !b.is_ascii_digit() {
                return None;
            }
            digits.try_push(b - b'0').ok()?;
        }
        Self::from_digits(&digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether `digit` appears anywhere in the secret
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

/// A player's guess. Digits may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    digits: Digits,
}

impl Guess {
    /// Build a guess from digit values.
    ///
    /// Returns `None` if there are more than 10 digits or a value above 9.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.len() > MAX_NUM_DIGITS || digits.iter().any(|&d| d > 9) {
            return None;
        }
        let mut out = Digits::new();
        out.extend(digits.iter().copied());
        Some(Self { digits: out })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Exact positional equality with the secret
    pub fn matches(&self, secret: &Secret) -> bool {
        self.digits() == secret.digits()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

/// A single clue token.
///
/// Variant order is alphabetical by token, so sorting clues sorts them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clue {
    /// Correct digit, correct position
    Fermi,
    /// Correct digit, wrong position
    Pico,
}

impl Clue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Clue::Fermi => "Fermi",
            Clue::Pico => "Pico",
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text shown when the guess equals the secret.
pub const EXACT_MATCH_TEXT: &str = "You got it!";

/// Text shown when no guessed digit is in the secret.
pub const BAGELS_TEXT: &str = "Bagels";

/// Result of comparing a guess against the secret
///
/// - `Exact`: the guess is the secret
/// - `Bagels`: no guessed digit appears in the secret
/// - `Clues`: one token per matching position, sorted alphabetically
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClueResult {
    Exact,
    Bagels,
    Clues(ArrayVec<Clue, MAX_NUM_DIGITS>),
}

impl ClueResult {
    /// Build a result from unordered clue tokens.
    ///
    /// Sorts the tokens so their order carries no position information.
    /// An empty token list becomes `Bagels`. Tokens beyond `MAX_NUM_DIGITS`
    /// are dropped.
    pub fn from_clues<I: IntoIterator<Item = Clue>>(clues: I) -> Self {
        let mut out: ArrayVec<Clue, MAX_NUM_DIGITS> = clues.into_iter().take(MAX_NUM_DIGITS).collect();
        if out.is_empty() {
            return ClueResult::Bagels;
        }
        out.sort_unstable();
        ClueResult::Clues(out)
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ClueResult::Exact)
    }

    /// Clue tokens (empty for both sentinels)
    pub fn clues(&self) -> &[Clue] {
        match self {
            ClueResult::Clues(clues) => clues,
            ClueResult::Exact | ClueResult::Bagels => &[],
        }
    }
}

impl fmt::Display for ClueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClueResult::Exact => f.write_str(EXACT_MATCH_TEXT),
            ClueResult::Bagels => f.write_str(BAGELS_TEXT),
            ClueResult::Clues(clues) => {
                for (i, clue) in clues.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(clue.as_str())?;
                }
                Ok(())
            }
        }
    }
}

/// Game loop phases
///
/// The cycle goes: AwaitingGuess → RoundWon | RoundLost → AwaitingReplay →
/// AwaitingGuess (new round) or Terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created but no round started yet
    NotStarted,
    AwaitingGuess,
    RoundWon,
    RoundLost,
    AwaitingReplay,
    /// Player declined to replay; no further transitions
    Terminated,
}

impl Phase {
    /// Round resolved, replay question not yet asked
    pub fn is_round_over(&self) -> bool {
        matches!(self, Phase::RoundWon | Phase::RoundLost)
    }
}
