//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece source,
//! and scoring. It owns the current and next piece, validates every move and
//! rotation before committing it, and runs the lock / clear / spawn sequence.
//!
//! Lifecycle: `Spawning -> Falling -> (Locking -> Spawning) | GameOver`.
//! `paused` is orthogonal and freezes everything except resume, quit and
//! restart. `GameOver` (`running == false`) is only left through [`GameState::reset`].

use log::{debug, info};

use crate::board::Board;
use crate::piece::Tetromino;
use crate::pieces::{try_rotate, KICK_OFFSETS, NO_KICK_OFFSETS};
use crate::rng::{PieceSource, Randomizer};
use crate::scoring::{calculate_line_score, get_drop_interval_ms, level_for_lines};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, GameAction, PieceKind, STARTING_LEVEL};

/// How a blocked rotation is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationPolicy {
    /// Rotate in place or not at all.
    #[default]
    NoKick,
    /// Try [`KICK_OFFSETS`] in order and take the first one that fits.
    Kick,
}

impl RotationPolicy {
    /// Offsets tried, in order, when rotating under this policy
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            RotationPolicy::NoKick => &NO_KICK_OFFSETS,
            RotationPolicy::Kick => &KICK_OFFSETS,
        }
    }
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing happened.
    Idle,
    /// The piece fell one row.
    Moved,
    /// The piece could not fall and was locked.
    Locked { lines: u32 },
    /// The piece locked and its successor could not spawn.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = Randomizer> {
    board: Board,
    current: Tetromino,
    next: PieceKind,
    score: u32,
    level: u32,
    lines: u32,
    running: bool,
    paused: bool,
    source: S,
    policy: RotationPolicy,
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`, no wall kicks
    pub fn new(source: S) -> Self {
        Self::with_policy(source, RotationPolicy::default())
    }

    /// Create a new game with an explicit rotation policy
    pub fn with_policy(source: S, policy: RotationPolicy) -> Self {
        let mut state = Self {
            board: Board::new(),
            current: Tetromino::new(PieceKind::I),
            next: PieceKind::I,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            running: true,
            paused: false,
            source,
            policy,
        };
        state.reset();
        state
    }

    /// Start over: empty board, zeroed counters, fresh current and next piece.
    ///
    /// Returns `false` if the first piece could not spawn, in which case the
    /// game is already over.
    pub fn reset(&mut self) -> bool {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = STARTING_LEVEL;
        self.running = true;
        self.paused = false;

        let first = self.source.next_kind();
        self.next = self.source.next_kind();
        info!("new game: first {:?}, next {:?}", first, self.next);
        self.spawn_piece(first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct grid access for setting up positions in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Tetromino {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// Kind that will be promoted on the next lock
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Override the queued kind, leaving the piece source untouched
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    /// Gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(i32::try_from(self.level).unwrap_or(i32::MAX))
    }

    /// Check that every occupied cell of `piece` is inside the board and empty
    pub fn is_valid_position(&self, piece: &Tetromino) -> bool {
        piece
            .board_cells()
            .iter()
            .all(|&(x, y)| self.board.is_empty(x, y))
    }

    /// Move the current piece by `(dx, dy)` if the target fits. All or nothing.
    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.current.moved(dx, dy);
        if self.is_valid_position(&candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Rotate the current piece under the configured [`RotationPolicy`].
    ///
    /// A failed rotation leaves position and rotation untouched.
    pub fn rotate_current(&mut self, clockwise: bool) -> bool {
        let piece = self.current;
        let board = &self.board;
        let result = try_rotate(
            piece.kind,
            piece.rotation,
            piece.x,
            piece.y,
            clockwise,
            self.policy.offsets(),
            |x, y| board.is_empty(x, y),
        );

        match result {
            Some((rotation, (dx, dy))) => {
                self.current = Tetromino {
                    rotation,
                    x: piece.x + dx,
                    y: piece.y + dy,
                    ..piece
                };
                true
            }
            None => false,
        }
    }

    /// Drop the current piece as far as it goes and lock it.
    ///
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.move_current(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Write the current piece into the board, promote the next piece and
    /// draw a new one.
    ///
    /// If the promoted piece does not fit the game ends and no lines are
    /// cleared for this lock. Returns the number of lines cleared.
    pub fn lock_piece(&mut self) -> u32 {
        let kind = self.current.kind;
        for (x, y) in self.current.board_cells() {
            self.board.set(x, y, Some(kind));
        }

        let promoted = self.next;
        self.next = self.source.next_kind();

        if !self.spawn_piece(promoted) {
            return 0;
        }
        self.clear_lines()
    }

    /// Remove full rows and update lines, score and level.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = u32::try_from(self.board.clear_full_rows()).unwrap_or(u32::MAX);
        if cleared > 0 {
            let points = calculate_line_score(i32::try_from(cleared).unwrap_or(i32::MAX), self.level);
            self.lines = self.lines.saturating_add(cleared);
            self.score = self.score.saturating_add(points);
            self.level = level_for_lines(self.lines);
            debug!(
                "cleared {} line(s) for {} points, total {} lines, level {}",
                cleared, points, self.lines, self.level
            );
        }
        cleared
    }

    /// Place a fresh piece of `kind` at the spawn anchor.
    ///
    /// A blocked spawn ends the game.
    pub fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::new(kind);
        self.current = piece;
        if !self.is_valid_position(&piece) {
            self.running = false;
            info!(
                "game over: {:?} blocked at spawn, score {}, lines {}, level {}",
                kind, self.score, self.lines, self.level
            );
            return false;
        }
        debug!("spawned {:?}, next {:?}", kind, self.next);
        true
    }

    /// Raw-index form of [`GameState::spawn_piece`].
    ///
    /// An unknown index returns `false` without touching the game.
    pub fn spawn_piece_at_index(&mut self, type_index: i32) -> bool {
        match PieceKind::from_index(type_index) {
            Some(kind) => self.spawn_piece(kind),
            None => false,
        }
    }

    /// Over if already stopped, or if a fresh piece of the current kind no
    /// longer fits at the spawn anchor.
    pub fn check_game_over(&self) -> bool {
        !self.running || !self.is_valid_position(&Tetromino::new(self.current.kind))
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Stop the game. Only [`GameState::reset`] brings it back.
    pub fn quit(&mut self) {
        if self.running {
            info!("quit: score {}, lines {}, level {}", self.score, self.lines, self.level);
        }
        self.running = false;
    }

    /// One gravity step for the loop driver
    pub fn gravity_tick(&mut self) -> TickOutcome {
        if !self.running || self.paused {
            return TickOutcome::Idle;
        }

        if self.move_current(0, 1) {
            return TickOutcome::Moved;
        }

        let lines = self.lock_piece();
        if self.running {
            TickOutcome::Locked { lines }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Apply a player action. Returns whether it was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Quit => {
                self.quit();
                return true;
            }
            GameAction::Restart => {
                self.reset();
                return true;
            }
            _ => {}
        }

        if !self.running {
            return false;
        }

        if action == GameAction::Pause {
            self.toggle_pause();
            return true;
        }

        if self.paused {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_current(-1, 0),
            GameAction::MoveRight => self.move_current(1, 0),
            GameAction::SoftDrop => self.move_current(0, 1),
            GameAction::RotateCw => self.rotate_current(true),
            GameAction::RotateCcw => self.rotate_current(false),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Pause | GameAction::Quit | GameAction::Restart => true,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.running.then(|| ActiveSnapshot::from(self.current));
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.running = self.running;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Cell at `(x, y)` with the current piece drawn on top of the board
    pub fn cell_with_current(&self, x: i32, y: i32) -> Cell {
        if self.running && self.current.board_cells().contains(&(x, y)) {
            return Some(self.current.kind);
        }
        self.board.get(x, y)
    }
}

impl Default for GameState<Randomizer> {
    fn default() -> Self {
        Self::new(Randomizer::uniform(1))
    }
}
