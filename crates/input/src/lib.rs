//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key events
//! into [`crate::types::GameAction`]; key repeat is left to the terminal.

pub mod map;

pub use tetris_cli_types as types;

pub use map::{handle_key_event, should_quit};
