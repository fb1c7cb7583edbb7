//! Console front end.
//!
//! A line-oriented terminal layer for Bagels: it prints the banner and clues,
//! reads guesses and replay answers, and drives the core state machine.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every user-facing string in one pure module ([`game_view`])
//! - Work over any `BufRead`/`Write` pair so whole games can be scripted

pub mod console;
pub mod game_view;
pub mod session;

pub use bagels_core as core;
pub use bagels_input as input;
pub use bagels_types as types;

pub use console::Console;
pub use session::run;
