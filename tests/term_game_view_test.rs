use tui_tictactoe::core::GameState;
use tui_tictactoe::term::{Animations, FrameBuffer, GameView, UiState, Viewport};
use tui_tictactoe::types::{CellPos, HitTarget, Player, Rect};

fn settled() -> UiState {
    UiState {
        anim: Animations::finished(),
        ..UiState::default()
    }
}

fn text(fb: &FrameBuffer) -> String {
    fb.to_text()
}

fn pos(row: u8, col: u8) -> CellPos {
    CellPos::new(row, col).unwrap()
}

#[test]
fn hit_test_maps_every_cell() {
    let view = GameView::default();
    let layout = view.layout(Viewport::new(100, 40)).unwrap();

    for p in CellPos::ALL {
        let r = layout.cell_rect(p);
        assert_eq!(layout.hit(r.x, r.y), Some(HitTarget::Cell(p)));
        assert_eq!(
            layout.hit(r.right() - 1, r.bottom() - 1),
            Some(HitTarget::Cell(p))
        );
    }
}

#[test]
fn grid_gaps_and_outside_hit_nothing() {
    let view = GameView::default();
    let layout = view.layout(Viewport::new(100, 40)).unwrap();

    let a = layout.cell_rect(pos(0, 0));
    // Column just right of the first cell is a grid line.
    assert_eq!(layout.hit(a.right(), a.y), None);
    // Row just below it too.
    assert_eq!(layout.hit(a.x, a.bottom()), None);
    assert_eq!(layout.hit(0, 0), None);
    assert_eq!(layout.hit(99, 39), None);
}

#[test]
fn play_again_box_sits_in_hud() {
    let view = GameView::default();
    let layout = view.layout(Viewport::new(59, 19)).unwrap();
    let b = layout.play_again;
    assert!(b.x >= layout.hud.x && b.right() <= layout.hud.right());
    assert!(b.y >= layout.hud.y && b.bottom() <= layout.hud.bottom());
    assert_eq!(layout.hit(b.x, b.y), Some(HitTarget::PlayAgain));
}

#[test]
fn finished_grid_has_crossings() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(59, 19);
    let fb = view.render(&snap, &settled(), vp);
    let layout = view.layout(vp).unwrap();

    let a = layout.cell_rect(pos(0, 0));
    assert_eq!(fb.get(a.right(), a.bottom()).unwrap().ch, '┼');
    assert_eq!(fb.get(a.right(), a.y).unwrap().ch, '│');
    assert_eq!(fb.get(a.x, a.bottom()).unwrap().ch, '─');
}

#[test]
fn grid_is_hidden_before_animation_starts() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, &UiState::default(), Viewport::new(59, 19));
    let t = text(&fb);
    assert!(!t.contains('│'));
    assert!(!t.contains('─'));
}

#[test]
fn marks_are_drawn_inside_their_cell() {
    let mut state = GameState::new(1);
    let first = state.current_player();
    state.select_cell(pos(1, 1)).unwrap();
    let snap = state.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(59, 19);
    let fb = view.render(&snap, &settled(), vp);
    let layout = view.layout(vp).unwrap();

    let filled = |r: Rect| {
        (r.y..r.bottom())
            .flat_map(|y| (r.x..r.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
            .count()
    };
    assert!(filled(layout.cell_rect(pos(1, 1))) > 0);
    assert_eq!(filled(layout.cell_rect(pos(0, 0))), 0);

    // The centre of an X is solid, the centre of an O is hollow.
    let c = layout.cell_rect(pos(1, 1));
    let centre = fb.get(c.x + c.w / 2, c.y + c.h / 2).unwrap().ch;
    match first {
        Player::X => assert_eq!(centre, '█'),
        Player::O => assert_eq!(centre, ' '),
    }
}

#[test]
fn hud_shows_turn_and_points() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, &settled(), Viewport::new(59, 19));
    let t = text(&fb);

    let turn = format!("Player {} Turn", state.current_player().as_str());
    assert!(t.contains(&turn), "{t}");
    assert!(t.contains("X Points: 0"));
    assert!(t.contains("O Points: 0"));
    assert!(!t.contains("Play Again?"));
}

#[test]
fn hud_shows_winner_and_play_again_after_round() {
    let mut state = GameState::new(1);
    let winner = state.current_player();
    for p in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)] {
        state.select_cell(p).unwrap();
    }
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, &settled(), Viewport::new(59, 19));
    let t = text(&fb);

    assert!(t.contains(&format!("{} WON", winner.as_str())), "{t}");
    assert!(t.contains("Play Again?"));
    assert!(t.contains(&format!("{} Points: 1", winner.as_str())));
}

#[test]
fn hover_tints_hovered_cell_only() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(59, 19);
    let layout = view.layout(vp).unwrap();

    let plain = view.render(&snap, &settled(), vp);
    let hovered = view.render(
        &snap,
        &UiState {
            hover: Some(HitTarget::Cell(pos(2, 0))),
            ..settled()
        },
        vp,
    );

    let r = layout.cell_rect(pos(2, 0));
    assert_ne!(
        plain.get(r.x, r.y).unwrap().style.bg,
        hovered.get(r.x, r.y).unwrap().style.bg
    );
    let other = layout.cell_rect(pos(0, 0));
    assert_eq!(plain.get(other.x, other.y), hovered.get(other.x, other.y));
}

#[test]
fn tiny_terminal_gets_a_message() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, &settled(), Viewport::new(30, 8));
    let t = text(&fb);
    assert!(t.contains("Terminal too small"));
    assert!(t.contains("need 59x19"));
}

#[test]
fn render_into_reuses_buffer_across_resizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, &settled(), Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&snap, &settled(), Viewport::new(60, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 20));
}
