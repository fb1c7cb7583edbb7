//! Game configuration.
//!
//! The digit count and guess budget are fixed for the lifetime of a game.
//! Defaults come from [`bagels_types`]; `BAGELS_*` environment variables can
//! override them at startup, and every value is validated before a game is
//! built so a bad setting never reaches secret generation.

use std::env;

use thiserror::Error;

use crate::types::{DEFAULT_MAX_GUESSES, DEFAULT_NUM_DIGITS, MAX_NUM_DIGITS};

pub const ENV_NUM_DIGITS: &str = "BAGELS_NUM_DIGITS";
pub const ENV_MAX_GUESSES: &str = "BAGELS_MAX_GUESSES";
pub const ENV_SEED: &str = "BAGELS_SEED";

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: digit count must be between 1 and 10, got {0}")]
    NumDigitsOutOfRange(usize),

    #[error("invalid configuration: guess budget must be at least 1")]
    NoGuesses,

    #[error("invalid configuration: {var}=`{value}` is not a valid number")]
    Unparseable { var: &'static str, value: String },
}

impl ConfigError {
    /// Machine-readable error code, shared by all variants.
    pub fn code(&self) -> &'static str {
        "INVALID_CONFIGURATION"
    }
}

/// Validates a digit count against the 10-symbol digit pool.
pub fn check_num_digits(num_digits: usize) -> Result<(), ConfigError> {
    if (1..=MAX_NUM_DIGITS).contains(&num_digits) {
        Ok(())
    } else {
        Err(ConfigError::NumDigitsOutOfRange(num_digits))
    }
}

/// Immutable settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    num_digits: usize,
    max_guesses: u32,
    seed: Option<u32>,
}

impl GameConfig {
    pub fn new(num_digits: usize, max_guesses: u32) -> Result<Self, ConfigError> {
        check_num_digits(num_digits)?;
        if max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        Ok(Self {
            num_digits,
            max_guesses,
            seed: None,
        })
    }

    /// Fix the RNG seed so the game is reproducible.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read overrides from `BAGELS_NUM_DIGITS`, `BAGELS_MAX_GUESSES` and
    /// `BAGELS_SEED`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let num_digits = parse_var(&lookup, ENV_NUM_DIGITS)?.unwrap_or(DEFAULT_NUM_DIGITS);
        let max_guesses = parse_var(&lookup, ENV_MAX_GUESSES)?.unwrap_or(DEFAULT_MAX_GUESSES);
        let seed: Option<u32> = parse_var(&lookup, ENV_SEED)?;

        let config = Self::new(num_digits, max_guesses)?;
        Ok(match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_digits: DEFAULT_NUM_DIGITS,
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::Unparseable { var, value: raw })
        }
    }
}
