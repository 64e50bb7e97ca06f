use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::{Board, GameState, Piece};
use tui_blocks::types::{GameAction, ShapeKind, GRAVITY_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_gravity_step", |b| {
        b.iter(|| {
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            state.tick(black_box(GRAVITY_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_lock(c: &mut Criterion) {
    let mut base = Board::new();
    for y in 16..20 {
        for x in 0..9 {
            base.set(x, y, true);
        }
    }
    let mut bar = Piece::spawn(ShapeKind::I, 9, 16);
    bar.rotate();

    c.bench_function("lock_bar_into_well", |b| {
        b.iter(|| {
            let mut board = base.clone();
            black_box(board.lock(&bar));
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..10 {
        if x % 3 != 0 {
            board.set(x, 19, true);
        }
    }
    let piece = Piece::spawn(ShapeKind::T, 4, 17);

    c.bench_function("can_place", |b| {
        b.iter(|| black_box(board.can_place(black_box(&piece))))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut piece = Piece::spawn(ShapeKind::L, 4, 0);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate();
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_lock,
    bench_can_place,
    bench_rotate,
    bench_try_rotate
);
criterion_main!(benches);
