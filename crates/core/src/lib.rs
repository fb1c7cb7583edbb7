//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and clue logic.
//! It has **zero dependencies** on the console or any other I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Testable**: Unit tests for every rule and state transition
//! - **Portable**: Can be driven by any front end (console, scripted tests)
//!
//! # Module Structure
//!
//! - [`config`]: Validated game settings and their environment overrides
//! - [`clues`]: Fermi/Pico/Bagels clue computation
//! - [`game_state`]: Round and replay state machine
//! - [`rng`]: Deterministic LCG with unbiased range sampling
//! - [`secret`]: Unique-digit secret generation
//!
//! # Game Rules
//!
//! - The secret has `num_digits` distinct digits (1-10)
//! - Each guess has exactly `num_digits` digits; repeats are allowed
//! - `Fermi`: right digit, right place; `Pico`: right digit, wrong place
//! - `Bagels`: no digit is right
//! - Clue tokens are sorted alphabetically, hiding which position earned them
//! - A round is lost once `max_guesses` guesses miss
//!
//! # Example
//!
//! ```
//! use bagels_core::{GameConfig, GameState};
//! use bagels_core::types::{Guess, Phase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.start().unwrap();
//!
//! let secret = game.secret().unwrap().clone();
//! let guess = Guess::from_digits(secret.digits()).unwrap();
//! let result = game.submit_guess(&guess).unwrap();
//!
//! assert!(result.is_exact());
//! assert_eq!(game.phase(), Phase::RoundWon);
//! ```

pub mod clues;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod secret;

pub use bagels_types as types;

// Re-export commonly used types for convenience
pub use clues::compute_clues;
pub use config::{ConfigError, GameConfig};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use secret::generate;
