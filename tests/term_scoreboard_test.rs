use tui_tennis::core::{score_point, start_match, GameState, ScorePair};
use tui_tennis::term::{AnchorY, ScoreboardView, Viewport};
use tui_tennis::types::Player;

fn screen_text(fb: &tui_tennis::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn scoreboard_renders_border_corners_at_top() {
    let view = ScoreboardView::default().with_anchor_y(AnchorY::Top);
    let w = ScoreboardView::frame_width();
    let fb = view.render(&start_match(), Viewport::new(w, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 4).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, 4).unwrap().ch, '┘');
}

#[test]
fn scoreboard_shows_names_and_called_score() {
    let view = ScoreboardView::new("Ana", "Bo");
    let state = score_point(&start_match(), Player::Player1);
    let fb = view.render(&state, Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains("SET 1"));
    assert!(text.contains("GAME"));

    let ana = text.lines().find(|l| l.contains("Ana")).unwrap();
    assert!(ana.contains("15"));
    let bo = text.lines().find(|l| l.contains("Bo")).unwrap();
    assert!(bo.trim_end().ends_with("0  │") || bo.contains(" 0 "));
}

#[test]
fn scoreboard_shows_advantage_and_status() {
    let view = ScoreboardView::new("Ana", "Bo");
    let mut state = start_match();
    state.current_game = GameState::Advantage(Player::Player2);
    let text = screen_text(&view.render(&state, Viewport::new(80, 24)));

    let bo = text.lines().find(|l| l.contains("Bo") && l.contains('│')).unwrap();
    assert!(bo.contains("AD"));
    assert!(text.contains("Set 1 - Advantage Bo"));
}

#[test]
fn scoreboard_shows_tiebreak_points_and_winner() {
    let view = ScoreboardView::new("Ana", "Bo");
    let mut state = start_match();
    state.sets = [ScorePair(7, 6), ScorePair(6, 3), ScorePair::ZERO];
    state.tiebreaks[0] = Some(ScorePair(7, 4));
    state.current_set = 2;
    state.match_winner = Some(Player::Player1);
    state.current_game = GameState::GameOver(Player::Player1);

    let text = screen_text(&view.render(&state, Viewport::new(80, 24)));
    assert!(text.contains("6(4)"));
    assert!(text.contains("* Ana") || text.contains("*Ana"));
    assert!(text.contains("Game, set and match Ana (2-0)"));
}

#[test]
fn scoreboard_centers_vertically_by_default() {
    let view = ScoreboardView::default();
    let w = ScoreboardView::frame_width();
    // Frame plus status block is 8 rows tall.
    let fb = view.render(&start_match(), Viewport::new(w, 18));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn scoreboard_survives_tiny_viewports() {
    let view = ScoreboardView::default();
    let fb = view.render(&start_match(), Viewport::new(5, 2));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 2);
}
