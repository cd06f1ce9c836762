//! Board tests - grid bounds, cell access and line compaction

use tetris_cli::core::Board;
use tetris_cli::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i32 = BOARD_WIDTH as i32;
const H: i32 = BOARD_HEIGHT as i32;

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..H {
        for x in 0..W {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.cell_value(x, y), 0);
        }
    }
}

#[test]
fn test_is_in_bounds_edges() {
    assert!(Board::is_in_bounds(0, 0));
    assert!(Board::is_in_bounds(W - 1, H - 1));
    assert!(!Board::is_in_bounds(-1, 0));
    assert!(!Board::is_in_bounds(0, -1));
    assert!(!Board::is_in_bounds(W, 0));
    assert!(!Board::is_in_bounds(0, H));
    assert!(!Board::is_in_bounds(i32::MIN, i32::MAX));
}

#[test]
fn test_board_get_out_of_bounds_is_empty() {
    let board = Board::from_rows(&["##########"]);

    assert_eq!(board.get(-1, 19), None);
    assert_eq!(board.get(W, 19), None);
    assert_eq!(board.get(0, H), None);
    assert_eq!(board.cell_value(-1, 19), 0);
    // Out of range is never "empty" for placement purposes
    assert!(!board.is_empty(-1, 0));
    assert!(!board.is_empty(0, H));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set(5, 10, Some(PieceKind::T));
    assert_eq!(board.get(5, 10), Some(PieceKind::T));
    assert_eq!(board.cell_value(5, 10), 3);
    assert!(!board.is_empty(5, 10));

    board.set(5, 10, None);
    assert_eq!(board.get(5, 10), None);
    assert!(board.is_empty(5, 10));
}

#[test]
fn test_board_set_out_of_bounds_is_ignored() {
    let mut board = Board::new();

    board.set(-1, 0, Some(PieceKind::T));
    board.set(0, -1, Some(PieceKind::T));
    board.set(W, 0, Some(PieceKind::T));
    board.set(0, H, Some(PieceKind::T));

    assert_eq!(board, Board::new());
}

#[test]
fn test_is_row_full() {
    let board = Board::from_rows(&["#########.", "##########"]);
    assert!(!board.is_row_full(18));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(0));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::from_rows(&["...T......", "##########"]);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(3, 19), Some(PieceKind::T));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_row_with_gap_never_clears() {
    let mut board = Board::from_rows(&["####.#####"]);
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_partial_row_between_full_rows_drops_to_bottom() {
    let mut board = Board::from_rows(&["##########", "S..Z...L.J", "##########"]);

    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(board.get(0, 19), Some(PieceKind::S));
    assert_eq!(board.get(3, 19), Some(PieceKind::Z));
    assert_eq!(board.get(7, 19), Some(PieceKind::L));
    assert_eq!(board.get(9, 19), Some(PieceKind::J));
    assert_eq!(board.filled_count(), 4);
    for y in 0..19 {
        for x in 0..W {
            assert!(board.is_empty(x, y));
        }
    }
}

#[test]
fn test_clear_keeps_relative_order_of_survivors() {
    let mut board = Board::from_rows(&[
        "I.........",
        "##########",
        ".O........",
        "##########",
        "##########",
        "..T.......",
    ]);

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.get(2, 19), Some(PieceKind::T));
    assert_eq!(board.get(1, 18), Some(PieceKind::O));
    assert_eq!(board.get(0, 17), Some(PieceKind::I));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_clear_whole_board() {
    let rows = vec!["##########"; BOARD_HEIGHT as usize];
    let mut board = Board::from_rows(&rows);

    assert_eq!(board.clear_full_rows(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::from_rows(&["#.#.#.#.#."]);
    board.clear();
    assert_eq!(board, Board::default());
}
