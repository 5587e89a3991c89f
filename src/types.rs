//! Core types shared across the application
//! This module contains pure data types and compile-time constants.

/// Nominal screen geometry (pixels). The grid is derived from it.
pub const SCREEN_WIDTH: u16 = 400;
pub const SCREEN_HEIGHT: u16 = 600;
pub const CELL_SIZE: u16 = 30;

/// Grid dimensions in cells: screen size divided by cell size.
pub const GRID_WIDTH: i8 = (SCREEN_WIDTH / CELL_SIZE) as i8;
pub const GRID_HEIGHT: i8 = (SCREEN_HEIGHT / CELL_SIZE) as i8;

/// Fixed tick rate (10 ticks per second keeps the fall speed playable).
pub const TICK_MS: u32 = 100;

/// Tetromino shape kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    Z,
    I,
    O,
    T,
    L,
    J,
}

impl ShapeKind {
    /// All kinds, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];
}

/// Player-issued commands for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
}
