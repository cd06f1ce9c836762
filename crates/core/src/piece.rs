//! Piece module - a single movable tetromino instance
//!
//! All transforms here are pure and unchecked. Whether the result fits on the
//! board is decided by the game state, which builds candidates with these
//! helpers and only commits the ones that validate.

use crate::pieces::{get_cells, get_shape, PieceShape, ShapeMatrix};
use crate::types::{PieceKind, Rotation, SPAWN_POSITION};

/// Active falling piece
///
/// `(x, y)` is the top-left corner of the piece's 4x4 shape box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor, rotation 0
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: i32::from(SPAWN_POSITION.0),
            y: i32::from(SPAWN_POSITION.1),
        }
    }

    /// Translated copy. Never checks bounds or collisions.
    pub fn moved(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Copy with the rotation index stepped by one. Never checks validity.
    pub fn rotated(self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..self }
    }

    /// Occupancy matrix for the current rotation
    pub fn shape(&self) -> &'static ShapeMatrix {
        get_shape(self.kind, self.rotation)
    }

    /// Occupied offsets relative to `(x, y)`
    pub fn cells(&self) -> PieceShape {
        get_cells(self.kind, self.rotation)
    }

    /// Occupied cells projected onto board coordinates
    pub fn board_cells(&self) -> PieceShape {
        self.cells().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
