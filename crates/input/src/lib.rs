//! Console input module (engine-facing).
//!
//! This module is independent of any terminal backend. It maps raw input
//! lines into [`crate::types::Guess`] values and replay answers, so the same
//! rules apply to stdin, scripted tests and any future front end.

pub mod map;

pub use bagels_types as types;

pub use map::{parse_guess, wants_replay, MalformedGuess};
