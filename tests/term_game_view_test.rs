use tui_2048::core::{GameState, SimpleRng};
use tui_2048::term::{FrameBuffer, GameView, Hud, Overlay, Viewport};
use tui_2048::types::VariantKind;

fn screen(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn themed_game() -> GameState {
    GameState::from_rows(
        VariantKind::Themed,
        &[[1u8, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 11]],
        2048,
        true,
        SimpleRng::new(1),
    )
    .unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let game = GameState::new(VariantKind::Classic, SimpleRng::new(1));
    let snap = game.snapshot();
    let view = GameView::default();

    // 4 tiles of 8 columns + 5 gaps + border = 39 wide; 4*3 + 5 + 2 = 19 tall.
    // Too narrow for the side panel, so the frame is centered alone.
    let fb = view.render(&snap, &Hud::new(game.styles(), game.hint()), Viewport::new(39, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(38, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(38, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_tile_in_its_style_colors() {
    let game = themed_game();
    let snap = game.snapshot();
    let view = GameView::default();
    let hud = Hud::new(game.styles(), game.hint());
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, &hud, vp);

    let layout = view.layout(&snap, game.styles(), vp);
    let (x, y) = layout.tile_origin(3, 3, view.gap());
    let style = game.styles().get(11);
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.style.bg, style.bg);

    // Label sits on the middle row of the tile.
    let row = fb.row_text(y + 1);
    assert!(row.contains("Tianchao"));
    assert!(screen(&fb).contains("Xia"));
}

#[test]
fn term_view_side_panel_shows_score_best_and_hint() {
    let game = themed_game();
    let mut snap = game.snapshot();
    snap.best = 9000;
    let view = GameView::default();
    let fb = view.render(&snap, &Hud::new(game.styles(), game.hint()), Viewport::new(80, 24));

    let all = screen(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("2048"));
    assert!(all.contains("BEST"));
    assert!(all.contains("9000"));
    assert!(all.contains("Try to reach Tianchao!"));
}

#[test]
fn term_view_overlays_and_status_line() {
    let game = GameState::new(VariantKind::Extended, SimpleRng::new(8));
    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    for (overlay, text) in [
        (Overlay::Won, "YOU HAVE WON!"),
        (Overlay::GameOver, "GAME OVER!"),
        (Overlay::ConfirmExit, "Save your game?"),
    ] {
        let hud = Hud {
            overlay: Some(overlay),
            status: Some("Saved to Saved Games/game.2048"),
            ..Hud::new(game.styles(), game.hint())
        };
        let all = screen(&view.render(&snap, &hud, vp));
        assert!(all.contains(text), "missing {}", text);
        assert!(all.contains("Saved to Saved Games/game.2048"));
    }
}

#[test]
fn term_view_extended_grid_fits_classic_terminal() {
    let game = GameState::new(VariantKind::Extended, SimpleRng::new(8));
    let snap = game.snapshot();
    let view = GameView::default();
    let layout = view.layout(&snap, game.styles(), Viewport::new(80, 24));
    assert!(layout.origin_y + layout.frame_h <= 24);
    assert!(layout.origin_x + layout.frame_w <= 80);
}
