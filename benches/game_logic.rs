use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_2048::core::{Board, BoardConfig, Game, GameSnapshot, MemoryStore};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

fn empty_board(seed: u32) -> Board {
    Board::new(
        BoardConfig {
            starting_tiles: 0,
            ..BoardConfig::default()
        },
        seed,
    )
}

/// Checkerboard of 2s and 4s: every push scans all tiles, none can move.
fn dense_board() -> Board {
    let mut board = empty_board(7);
    for y in 0..4i8 {
        for x in 0..4i8 {
            let value = if (x + y) % 2 == 0 { 2 } else { 4 };
            board.place_tile(x, y, value).unwrap();
        }
    }
    board
}

fn bench_turn_cycle(c: &mut Criterion) {
    let mut game = Game::new(BoardConfig::default(), 12345, MemoryStore::default());
    let mut turn = 0usize;

    c.bench_function("turn_cycle", |b| {
        b.iter(|| {
            if game.board().is_over() {
                game.new_game();
            }
            game.handle_action(black_box(GameAction::Move(Direction::ALL[turn % 4])));
            turn += 1;
            for _ in 0..8 {
                game.tick(black_box(16));
            }
            game.take_events();
        })
    });
}

fn bench_shift_dense_board(c: &mut Criterion) {
    c.bench_function("shift_dense_board", |b| {
        b.iter_batched(
            dense_board,
            |mut board| {
                board.handle_direction(black_box(Direction::Left));
                board
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_shift_merge_heavy(c: &mut Criterion) {
    c.bench_function("shift_merge_heavy", |b| {
        b.iter_batched(
            || {
                // All tiles equal: eight merges per push.
                let mut board = empty_board(7);
                for y in 0..4i8 {
                    for x in 0..4i8 {
                        board.place_tile(x, y, 2).unwrap();
                    }
                }
                board
            },
            |mut board| {
                board.handle_direction(black_box(Direction::Left));
                board
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    let board = dense_board();
    c.bench_function("game_over_scan", |b| {
        b.iter(|| black_box(&board).check_game_over())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::new(BoardConfig::default(), 12345, MemoryStore::default());
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_render_into(c: &mut Criterion) {
    let game = Game::new(BoardConfig::default(), 12345, MemoryStore::default());
    let snap = game.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_turn_cycle,
    bench_shift_dense_board,
    bench_shift_merge_heavy,
    bench_game_over_scan,
    bench_snapshot,
    bench_render_into
);
criterion_main!(benches);
