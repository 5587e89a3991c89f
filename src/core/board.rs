//! Board module - the persistent record of locked cells
//!
//! The board is a fixed 13x20 grid of binary occupancy, stored as a flat
//! array in row-major order for cache locality and zero allocation.
//! Coordinates: (x, y) with x growing left to right and y top to bottom.
//!
//! All indexing goes through the bounds-checked `index`; out-of-range
//! reads report "not occupied" instead of being out of contract, so the
//! rightmost movement check can never touch memory it does not own.

use crate::core::piece::Piece;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The game board - 13 columns x 20 rows using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i8 {
        GRID_HEIGHT
    }

    /// Occupancy at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) holds a locked cell. Out-of-bounds positions are
    /// not occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Write every occupied cell of the piece into the grid.
    ///
    /// The movement rules keep every piece inside the grid, so an
    /// out-of-bounds commit asserts in debug builds. Committing onto an
    /// already-filled cell is possible when a piece locks at spawn on a
    /// full board; it overwrites silently and the simulation keeps
    /// running.
    pub fn commit(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            match Self::index(x, y) {
                Some(idx) => self.cells[idx] = true,
                None => debug_assert!(false, "commit out of bounds ({x}, {y})"),
            }
        }
    }

    /// Raw cells, row-major. Read-only view for rendering.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Set a single cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
