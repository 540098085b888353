use tui_tictactoe::term::{Redraw, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame_in_full() {
    let mut t = RenderThrottle::new(250);
    assert_eq!(t.should_render(0, 1, false), Redraw::Full);
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false).is_needed());
    assert_eq!(t.should_render(1, 2, false), Redraw::Changed);
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false).is_needed());
    assert_eq!(t.should_render(10, 1, false), Redraw::Skip);
    assert_eq!(t.should_render(249, 1, false), Redraw::Skip);
    assert!(t.should_render(250, 1, false).is_needed());
}

#[test]
fn render_throttle_keepalive_repaints_everything() {
    let mut t = RenderThrottle::new(250);
    t.should_render(0, 7, false);
    assert_eq!(t.should_render(250, 7, false), Redraw::Full);
    // The keep-alive restarts the interval.
    assert_eq!(t.should_render(260, 7, false), Redraw::Skip);
    assert_eq!(t.should_render(500, 7, false), Redraw::Full);
}

#[test]
fn render_throttle_animating_always_renders() {
    let mut t = RenderThrottle::new(250);
    t.should_render(0, 1, true);
    assert_eq!(t.should_render(1, 1, true), Redraw::Changed);
    assert_eq!(t.should_render(2, 1, true), Redraw::Changed);
}
