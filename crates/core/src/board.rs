//! Board module - the settled-cell grid
//!
//! The board is a fixed 20x10 grid where each cell is either empty or holds the kind of
//! the piece that settled there. Uses a flat array for cache locality and zero allocation.
//! Coordinates are `(row, col)`: rows run 0..19 top to bottom, columns 0..9 left to right.
//! Dimensions never change; only cell contents do.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_AREA, BOARD_COLS, BOARD_ROWS};

/// Row indices removed by one [`Board::clear_full_rows`] call, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_ROWS as usize }>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_AREA],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_AREA],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Check if `(row, col)` lies outside the grid
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if `(row, col)` is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        let start = row * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and compact the rows above it downwards.
    ///
    /// Scans bottom to top with a two-pointer pass; empty rows enter at the top.
    /// Remaining rows keep their relative order. Returns the original indices of the
    /// removed rows, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_COLS as usize;
        let mut write_row = BOARD_ROWS as usize;

        for read_row in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Write `kind` into every `(row, col)` of `minos`.
    ///
    /// Positions above the board (negative rows) are dropped. Returns how many cells were written.
    pub fn merge(&mut self, minos: impl IntoIterator<Item = (i8, i8)>, kind: PieceKind) -> usize {
        let mut written = 0;
        for (row, col) in minos {
            if row >= 0 && self.set_cell(row, col, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_COLS as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
