use tui_snake::core::GameState;
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{Direction, GridPosition};

fn p(x: u16, y: u16) -> GridPosition {
    GridPosition::new(x, y)
}

#[test]
fn playfield_fits_exact_viewport() {
    let view = GameView::default();
    assert_eq!(view.frame_size(), (42, 17));

    let gs = GameState::new(1);
    let fb = view.render(&gs.snapshot(), Viewport::new(42, 17));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 16).unwrap().ch, '└');
    assert_eq!(fb.get(41, 16).unwrap().ch, '┘');
    assert_eq!(fb.get(20, 0).unwrap().ch, '─');
    assert_eq!(fb.get(0, 8).unwrap().ch, '│');
}

#[test]
fn head_apple_and_body_glyphs() {
    let view = GameView::default();
    let mut gs = GameState::with_body(1, p(5, 5), Direction::Right, &[p(4, 5), p(3, 5)]);
    gs.place_apple(p(3, 2));
    let fb = view.render(&gs.snapshot(), Viewport::new(42, 17));

    // World y grows upward: y=5 is terminal row 1 + (14 - 5).
    assert_eq!(fb.get(11, 10).unwrap().ch, '▶');
    assert_eq!(fb.get(12, 10).unwrap().ch, '▶');
    assert_eq!(fb.get(9, 10).unwrap().ch, '█');
    assert_eq!(fb.get(7, 10).unwrap().ch, '█');
    assert_eq!(fb.get(7, 13).unwrap().ch, '●');
    assert_eq!(fb.get(8, 13).unwrap().ch, '●');
    // Empty cells show the grid.
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn head_glyph_follows_direction() {
    let view = GameView::default();
    let gs = GameState::with_body(1, p(0, 0), Direction::Up, &[]);
    let fb = view.render(&gs.snapshot(), Viewport::new(42, 17));
    assert_eq!(fb.get(1, 15).unwrap().ch, '▲');
}

#[test]
fn side_panel_shows_score_when_wide_enough() {
    let view = GameView::default();
    let mut gs = GameState::new(1);
    gs.place_apple(p(1, 0));
    gs.advance(tui_snake::types::MOVE_INTERVAL_MS);
    assert_eq!(gs.score(), 10);

    let fb = view.render(&gs.snapshot(), Viewport::new(80, 17));
    // Playfield centered at x=19, panel two columns to its right.
    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("10"));
    assert!(fb.row_text(3).contains("LENGTH"));
    assert!(fb.row_text(4).contains('2'));

    let narrow = view.render(&gs.snapshot(), Viewport::new(42, 17));
    assert!(!narrow.row_text(0).contains("SCORE"));
}

#[test]
fn game_over_overlay_text() {
    let view = GameView::default();
    let mut gs = GameState::with_body(1, p(4, 5), Direction::Right, &[p(5, 5), p(5, 6)]);
    gs.place_apple(p(10, 10));
    gs.step();
    assert!(gs.game_over());

    let fb = view.render(&gs.snapshot(), Viewport::new(42, 17));
    assert!(fb.row_text(7).contains("GAME OVER!"));
    assert!(fb.row_text(8).contains("YOUR FINAL SCORE: 0"));
    assert!(fb.row_text(9).contains("SPACE TO TRY AGAIN"));
}

#[test]
fn small_viewport_does_not_panic() {
    let view = GameView::default();
    let gs = GameState::new(1);
    let fb = view.render(&gs.snapshot(), Viewport::new(10, 4));
    assert_eq!((fb.width(), fb.height()), (10, 4));
}
