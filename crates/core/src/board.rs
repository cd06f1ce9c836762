//! Board module - the 10x20 playfield of locked blocks
//!
//! Row 0 is the top; `x` grows to the right. Storage is one flat row-major
//! array so line compaction is a handful of `copy_within` calls.
//!
//! Reads outside the grid return an empty cell and writes outside the grid are
//! dropped, so collision code never has to special-case the edges.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Locked blocks of the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if !Self::is_in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position lies inside `[0, W) x [0, H)`
    pub fn is_in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < i32::from(BOARD_WIDTH) && y >= 0 && y < i32::from(BOARD_HEIGHT)
    }

    /// Get cell at position (x, y); out-of-range reads are empty
    pub fn get(&self, x: i32, y: i32) -> Cell {
        Self::index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Color tag of a cell: 0 for empty (or out of range), 1-7 otherwise
    pub fn cell_value(&self, x: i32, y: i32) -> u8 {
        self.get(x, y).map_or(0, |kind| kind.color())
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        Self::is_in_bounds(x, y) && self.get(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// Single bottom-to-top pass: non-full rows keep their relative order and
    /// each drops by the number of full rows beneath it. Vacated rows at the
    /// top are emptied. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles overlap without allocating
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Write color tags (0-7) into a row-major 2D grid for snapshots
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |kind| kind.color());
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from rows of text for tests: `#` or a piece letter fills a cell,
    /// anything else leaves it empty. Rows are aligned to the bottom.
    pub fn from_rows(rows: &[&str]) -> Self {
        use crate::types::PieceKind;

        let mut board = Self::new();
        let offset = i32::from(BOARD_HEIGHT) - rows.len() as i32;
        for (i, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => Some(PieceKind::I),
                    c => PieceKind::from_str(&c.to_string()),
                };
                board.set(x as i32, offset + i as i32, cell);
            }
        }
        board
    }

    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                let end = start + width;
                self.cells[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(PieceKind::I));
        assert_eq!(board.get(5, 10), Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_from_rows_aligns_to_bottom() {
        let board = Board::from_rows(&["#.........", "TTTTTTTTT."]);
        let cells = board.to_cells();

        assert_eq!(cells[18][0], Some(PieceKind::I));
        assert_eq!(cells[18][1], None);
        assert_eq!(cells[19][0], Some(PieceKind::T));
        assert_eq!(cells[19][9], None);
        assert_eq!(board.filled_count(), 10);
    }

    #[test]
    fn test_write_u8_grid_uses_color_tags() {
        let mut board = Board::new();
        board.set(2, 19, Some(PieceKind::L));
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][2], 7);
        assert_eq!(grid[19][3], 0);
    }
}
