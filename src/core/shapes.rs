//! Shape catalog - the seven tetromino templates
//!
//! Each shape is a small 2-D binary matrix describing which relative cells
//! are occupied. The matrices are immutable constants; pieces reference
//! them, they are never mutated or rotated.
//!
//! Invariant: every row of a matrix has the same length. `width()` reads
//! row 0 under that precondition, which keeps the right-boundary movement
//! check faithful to the reference behavior.

use crate::types::ShapeKind;

/// One immutable shape template from the catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    rows: &'static [&'static [u8]],
}

impl Shape {
    /// Column count of the matrix (all rows share it).
    #[inline]
    pub fn width(&self) -> i8 {
        self.rows[0].len() as i8
    }

    /// Row count of the matrix.
    #[inline]
    pub fn height(&self) -> i8 {
        self.rows.len() as i8
    }

    /// Whether the relative cell at (col, row) is occupied.
    pub fn is_filled(&self, col: i8, row: i8) -> bool {
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .is_some_and(|&v| v != 0)
    }

    /// Iterate the occupied relative cells as (col, row) pairs.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(move |(col, _)| (col as i8, row as i8))
        })
    }

    #[cfg(test)]
    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }
}

/// The 7-entry catalog: S, Z, I, O, T, L, J.
pub static SHAPES: [Shape; 7] = [
    Shape {
        kind: ShapeKind::S,
        rows: &[&[1, 1, 0], &[0, 1, 1]],
    },
    Shape {
        kind: ShapeKind::Z,
        rows: &[&[0, 1, 1], &[1, 1, 0]],
    },
    Shape {
        kind: ShapeKind::I,
        rows: &[&[1, 1, 1, 1]],
    },
    Shape {
        kind: ShapeKind::O,
        rows: &[&[1, 1], &[1, 1]],
    },
    Shape {
        kind: ShapeKind::T,
        rows: &[&[0, 1, 0], &[1, 1, 1]],
    },
    Shape {
        kind: ShapeKind::L,
        rows: &[&[1, 0], &[1, 0], &[1, 1]],
    },
    Shape {
        kind: ShapeKind::J,
        rows: &[&[0, 1], &[0, 1], &[1, 1]],
    },
];

/// Look up the catalog entry for a kind. The enum discriminants follow
/// catalog order, which the tests pin down.
pub fn shape_for(kind: ShapeKind) -> &'static Shape {
    &SHAPES[kind as usize]
}
