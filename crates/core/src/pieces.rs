//! Pieces module - tetromino shape catalog
//!
//! Every piece kind has four rotation states, each stored as a fixed 4x4
//! occupancy matrix. Row index is the y offset from the piece anchor, column
//! index is the x offset. The tables are immutable statics; rotating a piece is
//! a table lookup, never a geometric transform.

use crate::types::{PieceKind, Rotation, ROTATION_COUNT, SHAPE_SIZE};

/// Occupancy matrix of one rotation state, indexed `[row][col]`.
pub type ShapeMatrix = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

/// Offset of a single mino relative to the piece anchor, as `(col, row)`.
pub type MinoOffset = (i32, i32);

/// The four occupied offsets of a shape, in row-major order.
pub type PieceShape = [MinoOffset; 4];

const X: bool = true;
const O: bool = false;

type ShapeSet = [ShapeMatrix; ROTATION_COUNT as usize];

static I_SHAPES: ShapeSet = [
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    [[O, O, X, O], [O, O, X, O], [O, O, X, O], [O, O, X, O]],
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    [[O, O, X, O], [O, O, X, O], [O, O, X, O], [O, O, X, O]],
];

static O_SHAPES: ShapeSet = [
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
];

static T_SHAPES: ShapeSet = [
    // pointing up
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // pointing right
    [[O, X, O, O], [O, X, X, O], [O, X, O, O], [O, O, O, O]],
    // pointing down
    [[O, O, O, O], [X, X, X, O], [O, X, O, O], [O, O, O, O]],
    // pointing left
    [[O, X, O, O], [X, X, O, O], [O, X, O, O], [O, O, O, O]],
];

static S_SHAPES: ShapeSet = [
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, O, O], [O, X, X, O], [O, O, X, O], [O, O, O, O]],
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, O, O], [O, X, X, O], [O, O, X, O], [O, O, O, O]],
];

static Z_SHAPES: ShapeSet = [
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, O, X, O], [O, X, X, O], [O, X, O, O], [O, O, O, O]],
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, O, X, O], [O, X, X, O], [O, X, O, O], [O, O, O, O]],
];

static J_SHAPES: ShapeSet = [
    [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, X, O], [O, X, O, O], [O, X, O, O], [O, O, O, O]],
    [[O, O, O, O], [X, X, X, O], [O, O, X, O], [O, O, O, O]],
    [[O, X, O, O], [O, X, O, O], [X, X, O, O], [O, O, O, O]],
];

static L_SHAPES: ShapeSet = [
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    [[O, X, O, O], [O, X, O, O], [O, X, X, O], [O, O, O, O]],
    [[O, O, O, O], [X, X, X, O], [X, O, O, O], [O, O, O, O]],
    [[X, X, O, O], [O, X, O, O], [O, X, O, O], [O, O, O, O]],
];

/// Get the occupancy matrix for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static ShapeMatrix {
    let set = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    &set[rotation.index()]
}

/// Raw-index lookup: `type_index` in `0..7`, `rotation_index` in `0..4`.
///
/// Returns `None` for anything out of range. There is no wraparound here;
/// callers that want it go through [`Rotation::rotate_cw`] first.
pub fn shape_at(type_index: i32, rotation_index: i32) -> Option<&'static ShapeMatrix> {
    let kind = PieceKind::from_index(type_index)?;
    let rotation = Rotation::from_index(rotation_index)?;
    Some(get_shape(kind, rotation))
}

/// Color tag a locked piece of this kind leaves on the board (1-7).
pub fn get_color(kind: PieceKind) -> u8 {
    kind.color()
}

/// Raw-index color lookup; `None` for an unknown type.
pub fn color_at(type_index: i32) -> Option<u8> {
    PieceKind::from_index(type_index).map(get_color)
}

/// The four occupied `(col, row)` offsets of a shape, in row-major order.
pub fn get_cells(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let matrix = get_shape(kind, rotation);
    let mut out = [(0i32, 0i32); 4];
    let mut n = 0;
    for (row, line) in matrix.iter().enumerate() {
        for (col, &filled) in line.iter().enumerate() {
            if filled && n < out.len() {
                out[n] = (col as i32, row as i32);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "{kind:?} {rotation:?} must have exactly four minos");
    out
}

/// Rotation offsets tried in order under the kick policy: in place, one column
/// either way, one row up, two columns either way, two rows up.
pub const KICK_OFFSETS: [(i32, i32); 7] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0), (0, -2)];

/// Offsets tried under the no-kick policy: in place only.
pub const NO_KICK_OFFSETS: [(i32, i32); 1] = [(0, 0)];

/// Try to rotate a piece, testing each offset in `kicks` in order.
///
/// Returns `Some((new_rotation, offset))` for the first offset at which every
/// mino satisfies `is_valid`, or `None` if all offsets collide.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
    clockwise: bool,
    kicks: &[(i32, i32)],
    is_valid: impl Fn(i32, i32) -> bool,
) -> Option<(Rotation, (i32, i32))> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };

    let cells = get_cells(kind, new_rotation);

    for &(dx, dy) in kicks {
        let new_x = x + dx;
        let new_y = y + dy;

        let valid = cells
            .iter()
            .all(|&(mx, my)| is_valid(new_x + mx, new_y + my));

        if valid {
            return Some((new_rotation, (dx, dy)));
        }
    }

    None
}
