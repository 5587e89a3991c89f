//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, the shape catalog, the active piece
//! and the session that ties them together. It has zero dependencies on
//! UI or I/O and is fully deterministic given a seed.

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use session::{GameSession, StepOutcome};
pub use shapes::{shape_for, Shape, SHAPES};
