//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on the terminal or on input handling, making it:
//!
//! - **Deterministic**: Pieces come from an injected [`PieceSource`], so a seed or a script replays exactly
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless tests, benches)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with bounds checks and line clearing
//! - [`game_state`]: Complete game state including current and next piece, scoring, lifecycle
//! - [`piece`]: A single tetromino instance and its unchecked transforms
//! - [`pieces`]: Tetromino shape tables and rotation with optional wall kicks
//! - [`rng`]: Piece sources (uniform, 7-bag, scripted)
//! - [`scoring`]: Line clear points, leveling and gravity speed
//! - [`snapshot`]: Read-only copy of the game for renderers
//!
//! # Game Rules
//!
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines, multiplied by the level
//! - **Leveling**: level = lines / 10 + 1
//! - **Gravity**: 1000ms at level 1, 100ms faster per level, never below 100ms
//! - **Game over**: the next piece cannot spawn at the top of the board
//!
//! # Example
//!
//! ```
//! use tetris_cli_core::{GameState, ScriptedPieces};
//! use tetris_cli_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(ScriptedPieces::new(vec![PieceKind::I, PieceKind::O]));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.current().kind, PieceKind::O);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_cli_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, RotationPolicy, TickOutcome};
pub use piece::Tetromino;
pub use pieces::{get_cells, get_color, get_shape, shape_at, try_rotate, KICK_OFFSETS};
pub use rng::{BagRandomizer, PieceSource, Randomizer, ScriptedPieces, SimpleRng};
pub use scoring::{
    calculate_line_score as score_for, get_drop_interval_ms as drop_interval_ms,
    level_for_lines,
};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
