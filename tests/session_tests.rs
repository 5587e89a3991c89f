//! Session tests - movement boundaries and the gravity/lock cycle

use gridfall::core::{GameSession, StepOutcome};
use gridfall::types::{GameAction, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_move_left_clamps_at_zero_and_is_idempotent() {
    let mut session = GameSession::new(42);

    // More presses than columns: must stop at the left wall.
    for _ in 0..GRID_WIDTH as usize + 5 {
        session.apply_action(GameAction::MoveLeft);
    }
    assert_eq!(session.active().x, 0);

    session.apply_action(GameAction::MoveLeft);
    assert_eq!(session.active().x, 0, "move_left at x=0 is a no-op");
}

#[test]
fn test_move_right_stops_at_right_boundary() {
    let mut session = GameSession::new(42);

    for _ in 0..GRID_WIDTH as usize + 5 {
        session.apply_action(GameAction::MoveRight);
    }
    let piece = session.active();
    assert_eq!(piece.x + piece.shape.width(), GRID_WIDTH);

    session.apply_action(GameAction::MoveRight);
    assert_eq!(session.active().x, piece.x, "flush right is a no-op");

    // No occupied cell may sit at or beyond the right wall.
    assert!(piece.cells().all(|(x, _)| x < GRID_WIDTH));
}

#[test]
fn test_soft_drop_is_noop_once_landed() {
    let mut session = GameSession::new(42);

    // Soft-drop until the piece stops moving.
    let mut last_y = session.active().y;
    loop {
        session.apply_action(GameAction::SoftDrop);
        let y = session.active().y;
        if y == last_y {
            break;
        }
        last_y = y;
    }

    session.apply_action(GameAction::SoftDrop);
    assert_eq!(session.active().y, last_y);
    assert!(last_y + session.active().shape.height() <= GRID_HEIGHT);
}

#[test]
fn test_lock_commits_cells_and_respawns_at_top() {
    let mut session = GameSession::new(7);

    // Let gravity run until the first lock.
    let locked = loop {
        let piece = session.active();
        match session.step() {
            StepOutcome::Descended => continue,
            StepOutcome::Locked => break piece,
        }
    };

    for (x, y) in locked.cells() {
        assert!(
            session.board().is_occupied(x, y),
            "committed cell ({}, {}) missing",
            x,
            y
        );
    }
    assert_eq!(session.board().cells().iter().filter(|&&c| c).count(), 4);

    let fresh = session.active();
    assert_eq!(fresh.y, 0);
    assert_eq!(fresh.x, GRID_WIDTH / 2 - fresh.shape.width() / 2);
}

#[test]
fn test_pieces_stack_on_each_other() {
    let mut session = GameSession::new(3);

    // Run until several pieces have locked.
    let mut locks = 0;
    while locks < 5 {
        if session.step() == StepOutcome::Locked {
            locks += 1;
        }
    }

    assert_eq!(
        session.board().cells().iter().filter(|&&c| c).count(),
        5 * 4,
        "five locked tetrominoes occupy twenty cells"
    );
}

#[test]
fn test_same_tick_movement_applies_before_gravity() {
    let mut session = GameSession::new(42);
    let before = session.active();

    // Command then gravity, as one tick would run them.
    session.apply_action(GameAction::MoveLeft);
    session.step();

    let after = session.active();
    assert_eq!(after.x, before.x - 1);
    assert_eq!(after.y, before.y + 1);
}

#[test]
fn test_simulation_runs_forever_without_panicking() {
    // No line clearing and no game over: the board fills up, spawned
    // pieces lock immediately, and the loop just keeps going.
    let mut session = GameSession::new(99);
    for _ in 0..(GRID_HEIGHT as usize * GRID_WIDTH as usize * 4) {
        session.step();
    }
}
