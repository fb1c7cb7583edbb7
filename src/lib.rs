//! Bagels (workspace facade crate).
//!
//! Re-exports the member crates under `bagels::{core,input,term,types}` so the
//! binary, integration tests and benches share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use bagels_core as core;
pub use bagels_input as input;
pub use bagels_term as term;
pub use bagels_types as types;
