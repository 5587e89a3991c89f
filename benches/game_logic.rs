use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::core::{Board, GameSession, Piece};
use gridfall::term::{GameView, Viewport};
use gridfall::types::{GameAction, ShapeKind};

fn bench_step(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            black_box(session.step());
        })
    });
}

fn bench_apply_action(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("apply_move_left", |b| {
        b.iter(|| {
            session.apply_action(black_box(GameAction::MoveLeft));
        })
    });
}

fn bench_can_descend(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(ShapeKind::T);

    c.bench_function("can_descend", |b| {
        b.iter(|| black_box(piece.can_descend(black_box(&board))))
    });
}

fn bench_commit(c: &mut Criterion) {
    let piece = Piece::spawn(ShapeKind::O);

    c.bench_function("commit_piece", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.commit(black_box(&piece));
            black_box(board)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| black_box(view.render(session.board(), &session.active(), viewport)))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_apply_action,
    bench_can_descend,
    bench_commit,
    bench_render
);
criterion_main!(benches);
