use tui_2048::core::{BoardConfig, Game, GameSnapshot, MemoryStore};
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn empty_snapshot() -> GameSnapshot {
    GameSnapshot {
        width: 4,
        height: 4,
        values: vec![0; 16],
        ..GameSnapshot::default()
    }
}

#[test]
fn term_view_renders_border_corners() {
    let game = Game::new(BoardConfig::default(), 1, MemoryStore::default());
    let snap = game.snapshot();
    let view = GameView::default();

    // With cell_w=6 and cell_h=3:
    // board pixels = 4*6 by 4*3 => 24x12
    // plus border => 26x14
    let vp = Viewport::new(26, 14);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(25, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_tile_values() {
    let mut snap = empty_snapshot();
    snap.values[0] = 2;
    snap.values[5] = 1024; // cell (1, 1)

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(26, 14));

    let text = screen_text(&fb);
    assert!(text.contains('2'));
    assert!(text.contains("1024"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = empty_snapshot();
    snap.score = 1234;
    snap.best = 4096;

    let view = GameView::default();
    // Wider than the 26x14 board frame to allow a panel.
    let fb = view.render(&snap, Viewport::new(60, 14));

    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("BEST"));
    assert!(text.contains("4096"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = empty_snapshot();
    let view = GameView::default();

    // Board frame is 14 rows tall (12 + border).
    let vp = Viewport::new(26, 20);
    let fb = view.render(&snap, vp);

    // start_y = (20 - 14) / 2 = 3 => top-left corner at (0,3).
    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = empty_snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let vp = Viewport::new(26, 20);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = empty_snapshot();
    let view = GameView::default();
    let vp = Viewport::new(26, 14);

    assert!(!screen_text(&view.render(&snap, vp)).contains("GAME OVER"));

    snap.game_over = true;
    let text = screen_text(&view.render(&snap, vp));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("R  NEW GAME"));
}
