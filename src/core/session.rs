//! GameSession - movement legality and the gravity/lock heartbeat
//!
//! The session owns the board, the single active piece and the RNG; there
//! are no module-level globals. Exactly one `step` runs per tick, after
//! all player commands drained for that tick have been applied.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, GRID_WIDTH};

/// Result of one gravity evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The active piece moved down one row and is still falling.
    Descended,
    /// The piece could not descend: it was committed to the board and a
    /// fresh piece spawned at the top.
    Locked,
}

/// Complete simulation state. The game runs indefinitely; there is no
/// paused or game-over state.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Piece,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session with an empty board and the first piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(rng.pick_kind());
        Self {
            board: Board::new(),
            active,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Apply one player command to the active piece.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
        }
    }

    /// Move one column left unless already at the left boundary.
    pub fn move_left(&mut self) {
        if self.active.x > 0 {
            self.active.x -= 1;
        }
    }

    /// Move one column right unless the shape would leave the grid.
    /// Width comes from the matrix's declared column count (all rows of
    /// a catalog shape share it).
    pub fn move_right(&mut self) {
        if self.active.x + self.active.shape.width() < GRID_WIDTH {
            self.active.x += 1;
        }
    }

    /// Manual fast-drop by one row; no-op when the piece has landed.
    pub fn soft_drop(&mut self) {
        if self.active.can_descend(&self.board) {
            self.active.y += 1;
        }
    }

    /// The per-tick heartbeat: descend one row, or lock the piece into
    /// the board and spawn its replacement.
    pub fn step(&mut self) -> StepOutcome {
        if self.active.can_descend(&self.board) {
            self.active.y += 1;
            StepOutcome::Descended
        } else {
            self.board.commit(&self.active);
            self.active = Piece::spawn(self.rng.pick_kind());
            StepOutcome::Locked
        }
    }

    /// Replace the active piece, for deterministic test scenarios.
    #[cfg(test)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
