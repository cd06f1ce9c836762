//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_cli::{core, input, term, types}` and adds the
//! runtime [`config`] used by the binary.

pub mod config;

pub use tetris_cli_core as core;
pub use tetris_cli_input as input;
pub use tetris_cli_term as term;
pub use tetris_cli_types as types;
