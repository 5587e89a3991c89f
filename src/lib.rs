//! gridfall - a terminal falling-block game.
//!
//! Pieces fall on a fixed 13x20 grid; the player steers them left, right
//! and down, landed pieces lock into the board, and the game runs
//! indefinitely. `core` is pure and deterministic; `term` and `input`
//! are thin crossterm glue around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
