//! Piece module - the single active falling tetromino
//!
//! A `Piece` is a small value type: a reference into the immutable shape
//! catalog plus the grid position of the matrix's top-left corner. It is
//! replaced wholesale when it locks, never mutated in place after that.

use crate::core::board::Board;
use crate::core::shapes::{shape_for, Shape};
use crate::types::{GRID_HEIGHT, GRID_WIDTH, ShapeKind};

/// Active falling piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: &'static Shape,
    /// Column of the shape matrix's top-left corner.
    pub x: i8,
    /// Row of the shape matrix's top-left corner.
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position:
    /// horizontally centered for the shape's width, top row.
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = shape_for(kind);
        Self {
            shape,
            x: GRID_WIDTH / 2 - shape.width() / 2,
            y: 0,
        }
    }

    /// Iterate the absolute grid positions of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(|(col, row)| (self.x + col, self.y + row))
    }

    /// Whether the piece can move down one row.
    ///
    /// This is both the collision detector and the landed predicate:
    /// every occupied cell must stay above the bottom boundary and the
    /// cell below it must be free of locked blocks.
    pub fn can_descend(&self, board: &Board) -> bool {
        self.cells()
            .all(|(x, y)| y + 1 < GRID_HEIGHT && !board.is_occupied(x, y + 1))
    }
}
