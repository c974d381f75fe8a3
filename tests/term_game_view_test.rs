use blockfall::core::{GameState, Sequence};
use blockfall::term::{AnchorY, GameView, Viewport, HALF_BLOCK};
use blockfall::types::{GameCommand, PieceKind};

fn row_text(fb: &blockfall::term::FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let mut view = GameView::default();

    // Two terminal columns and one row per board cell: 20x20 plus border.
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_settled_cell_spans_two_columns() {
    let mut state = GameState::with_source(Sequence::new([PieceKind::O, PieceKind::I]));
    state.start();
    state.apply_command(GameCommand::HardDrop);
    let snap = state.snapshot();

    let mut view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Board column 4 maps to terminal columns 9 and 10; row 19 to terminal row 20.
    for x in [9, 10] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert!(cell.style.bg.r > 100 && cell.style.bg.g > 100 && cell.style.bg.b < 60);
    }
    let empty = fb.get(7, 20).unwrap();
    assert!(empty.style.bg.r < 40);
}

#[test]
fn term_view_hud_tracks_game() {
    let mut state = GameState::with_source(Sequence::repeat(PieceKind::I));
    state.start();
    let mut view = GameView::default();
    let vp = Viewport::new(80, 24);

    let fb = view.render(&state.snapshot(), vp);
    let text: Vec<String> = (0..fb.height()).map(|y| row_text(&fb, y)).collect();
    assert!(text.iter().any(|l| l.contains("SCORE")));
    assert!(text.iter().any(|l| l.contains("NEXT")));
    assert!(!text.iter().any(|l| l.contains("PAUSED")));

    state.apply_command(GameCommand::TogglePause);
    let fb = view.render(&state.snapshot(), vp);
    assert!((0..fb.height()).any(|y| row_text(&fb, y).contains("PAUSED")));
}

#[test]
fn term_view_game_over_shows_final_score() {
    let mut state = GameState::with_source(Sequence::repeat(PieceKind::O));
    state.start();
    while !state.game_over() {
        state.apply_command(GameCommand::HardDrop);
    }

    let mut view = GameView::default();
    let fb = view.render(&state.snapshot(), Viewport::new(80, 24));
    let all: String = (0..fb.height()).map(|y| row_text(&fb, y)).collect::<Vec<_>>().join("\n");

    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 0"));
    assert!(all.contains("R TO RESTART"));
}
