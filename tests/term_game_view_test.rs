use tetris_canvas::core::{piece_color, GameState};
use tetris_canvas::term::{encode_changes, encode_full, Canvas, GameView, Ink, Viewport};
use tetris_canvas::types::PieceKind;

fn find_row(canvas: &Canvas, needle: &str) -> Option<u16> {
    (0..canvas.height()).find(|&y| canvas.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();

    // 10x20 cells at 2x1 => 20x20, plus border => 22x22
    let canvas = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(canvas.get(0, 0).unwrap().ch, '┌');
    assert_eq!(canvas.get(21, 0).unwrap().ch, '┐');
    assert_eq!(canvas.get(0, 21).unwrap().ch, '└');
    assert_eq!(canvas.get(21, 21).unwrap().ch, '┘');
    assert_eq!(canvas.get(0, 0).unwrap().ink, Ink::Frame);
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::L.cell_code();
    snap.active = None;

    let canvas = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let glyph = canvas.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.ink, Ink::Block(PieceKind::L));
    }
    assert_eq!(canvas.get(x0 + 2, y0).unwrap().ink, Ink::Well);
    assert_eq!(Ink::Block(PieceKind::L).colors().0, piece_color(PieceKind::L));
}

#[test]
fn term_view_draws_active_piece() {
    let snap = GameState::new(4).snapshot();
    let active = snap.active.unwrap();
    let canvas = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y, kind) in active.blocks() {
        let glyph = canvas.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.ink, Ink::Block(kind));
    }
}

#[test]
fn term_view_overlays_follow_status() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let paused = GameState::new(1).snapshot();
    let canvas = view.render(&paused, vp);
    assert!(find_row(&canvas, "PAUSED").is_some());
    assert!(find_row(&canvas, "click to play").is_some());

    let mut over = paused;
    over.paused = false;
    over.game_over = true;
    over.active = None;
    let canvas = view.render(&over, vp);
    assert!(find_row(&canvas, "GAME OVER").is_some());
    assert!(find_row(&canvas, "click to restart").is_some());
    assert!(find_row(&canvas, "PAUSED").is_none());

    let mut running = paused;
    running.paused = false;
    let canvas = view.render(&running, vp);
    assert!(find_row(&canvas, "PAUSED").is_none());
    assert!(find_row(&canvas, "GAME OVER").is_none());
}

#[test]
fn term_view_side_panel_shows_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 300;

    let canvas = GameView::default().render(&snap, Viewport::new(60, 22));
    let label = find_row(&canvas, "SCORE").expect("score label");
    assert!(canvas.row_text(label + 1).contains("300"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = GameState::new(1).snapshot();
    let canvas = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((canvas.width(), canvas.height()), (5, 3));

    let mut out = Vec::new();
    encode_full(&canvas, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn term_moving_piece_only_redraws_changed_rows() {
    let mut game = GameState::new(2);
    game.resume();
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let before = view.render(&game.snapshot(), vp);
    let mut out = Vec::new();
    encode_changes(&before, &before.clone(), &mut out).unwrap();
    assert!(out.is_empty());

    assert!(game.move_by(1, 0));
    let after = view.render(&game.snapshot(), vp);
    encode_changes(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());
}
