//! Terminal front end for the game.
//!
//! Rendering is split in two: [`GameView`] draws a `GameSnapshot` into an
//! in-memory [`FrameBuffer`] (pure, unit-testable), and [`TerminalRenderer`]
//! flushes that framebuffer to the terminal through crossterm, rewriting only
//! what changed since the previous frame.
//!
//! Board cells are drawn two columns wide to roughly square them up.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_cli_core as core;
pub use tetris_cli_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
