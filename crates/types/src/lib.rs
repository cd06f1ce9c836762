//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable by the engine, the terminal view and the input layer alike.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left of the piece's 4x4 box
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up by 100ms per level and bottoms out at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 6 | 500ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use tetris_cli_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//! assert_eq!(piece.color(), 3);
//!
//! let rotation = Rotation::North;
//! assert_eq!(rotation.rotate_cw(), Rotation::East);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square box every shape is defined in.
pub const SHAPE_SIZE: usize = 4;

/// Number of rotation states per piece.
pub const ROTATION_COUNT: u8 = 4;

/// Number of distinct piece kinds.
pub const PIECE_KIND_COUNT: u8 = 7;

/// Spawn anchor `(x, y)` for every piece kind: centered horizontally, top row.
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval, reached at level 10
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a fresh game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Line clear scoring table, indexed by lines cleared (0-4).
///
/// Points are multiplied by the current level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Input poll / render interval of the terminal loop (~100 FPS).
pub const FRAME_MS: u32 = 10;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color tag:
/// - **I**: 1, cyan, straight bar
/// - **O**: 2, yellow, 2x2 square
/// - **T**: 3, magenta, T-shaped
/// - **S**: 4, green, S-shaped
/// - **Z**: 5, red, Z-shaped (mirror of S)
/// - **J**: 6, blue, J-shaped
/// - **L**: 7, white, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Look up a kind by its catalog index (0 = I ... 6 = L).
    ///
    /// Returns `None` for anything outside `0..7`.
    ///
    /// ```
    /// use tetris_cli_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// assert_eq!(PieceKind::from_index(-1), None);
    /// ```
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Catalog index (0 = I ... 6 = L).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Color tag stored in board cells (1-7).
    pub fn color(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::color`]. `0` and anything above 7 map to `None`.
    pub fn from_color(color: u8) -> Option<Self> {
        match color {
            0 => None,
            c => Self::from_index(i32::from(c) - 1),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_cli_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the side panel.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, as an index 0..3 that cycles clockwise.
///
/// - **North** (0): spawn orientation
/// - **East** (1): rotated 90° clockwise
/// - **South** (2): rotated 180°
/// - **West** (3): rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Look up a rotation by index. No wraparound: only `0..4` is valid.
    ///
    /// ```
    /// use tetris_cli_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Some(Rotation::East));
    /// assert_eq!(Rotation::from_index(4), None);
    /// assert_eq!(Rotation::from_index(-1), None);
    /// ```
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Rotation index (0-3).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise: `(index + 1) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_cli_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise: `(index + 3) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_cli_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Player intents accepted by the engine.
///
/// The input layer translates raw keys into these; each maps onto exactly one
/// engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Stop the game
    Quit,
    /// Start a fresh game (the only way out of game over)
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_cli_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCcw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "quit" => Some(GameAction::Quit),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Quit => "quit",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tags_cover_one_through_seven() {
        let colors: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        assert_eq!(colors, vec![1, 2, 3, 4, 5, 6, 7]);
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color(kind.color()), Some(kind));
        }
        assert_eq!(PieceKind::from_color(0), None);
        assert_eq!(PieceKind::from_color(8), None);
    }

    #[test]
    fn index_roundtrips_through_from_index() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index() as i32), Some(kind));
        }
        assert_eq!(PieceKind::from_index(i32::MAX), None);
        assert_eq!(PieceKind::from_index(i32::MIN), None);
    }

    #[test]
    fn rotation_cycles_back_after_four_steps() {
        for start in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            let cw = start.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            let ccw = start.rotate_ccw().rotate_ccw().rotate_ccw().rotate_ccw();
            assert_eq!(cw, start);
            assert_eq!(ccw, start);
            assert_eq!(start.rotate_cw().rotate_ccw(), start);
        }
    }

    #[test]
    fn rotation_index_matches_modular_arithmetic() {
        for i in 0..4 {
            let r = Rotation::from_index(i).unwrap();
            assert_eq!(r.index() as i32, i);
            assert_eq!(r.rotate_cw().index() as i32, (i + 1) % 4);
            assert_eq!(r.rotate_ccw().index() as i32, (i + 3) % 4);
        }
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Pause,
            GameAction::Quit,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
