use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{evaluate_outcome, Board, GameSnapshot, GameState};
use tui_tictactoe::term::{Animations, FrameBuffer, GameView, UiState, Viewport};
use tui_tictactoe::types::{CellPos, Player};

fn bench_evaluate(c: &mut Criterion) {
    let mut board = Board::new();
    for (i, pos) in CellPos::ALL.iter().enumerate().take(8) {
        let player = if i % 3 == 0 { Player::X } else { Player::O };
        board.apply_move(*pos, player).unwrap();
    }

    c.bench_function("evaluate_outcome", |b| {
        b.iter(|| evaluate_outcome(black_box(&board), black_box(Player::X), black_box(1)))
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("full_round_and_play_again", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            for pos in CellPos::ALL {
                if state.round_over() {
                    break;
                }
                let _ = state.select_cell(black_box(pos));
            }
            state.play_again();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.select_cell(CellPos::ALL[4]).unwrap();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for pos in [CellPos::ALL[0], CellPos::ALL[4], CellPos::ALL[8]] {
        state.select_cell(pos).unwrap();
    }
    let snap = state.snapshot();
    let ui = UiState {
        anim: Animations::finished(),
        ..UiState::default()
    };
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_100x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &ui, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_full_round,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
