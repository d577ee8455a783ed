use engine::app::InputFrame;
use engine::surface::SurfaceSize;

use dotty::board_ui::{BoardLayout, GestureTracker, HudModel, BOARD_MARGIN, HUD_HEIGHT};
use dotty::dots_core::{DotsGame, GridPos, GRID_COLS};
use dotty::session::DotSelectionStatus;

fn layout() -> BoardLayout {
    BoardLayout::compute(SurfaceSize::new(480, 620))
}

fn frame(pos: (u32, u32)) -> InputFrame {
    InputFrame {
        mouse_pos: Some(pos),
        mouse_held: true,
        ..InputFrame::default()
    }
}

#[test]
fn layout_snaps_the_board_to_uniform_cells_below_the_hud() {
    let layout = layout();
    assert_eq!(layout.board.w, layout.cell * GRID_COLS as u32);
    assert_eq!(layout.board.w, layout.board.h);
    assert!(layout.board.y >= HUD_HEIGHT + BOARD_MARGIN);
    assert!(layout.radius * 2 <= layout.cell);
}

#[test]
fn hit_test_accepts_dot_centers_and_rejects_cell_corners() {
    let layout = layout();
    let pos = GridPos::new(0, 0);
    let (cx, cy) = layout.dot_center(pos);
    assert_eq!(layout.hit_test(cx as u32, cy as u32), Some(pos));

    // The very corner of the cell is outside the disc.
    assert_eq!(
        layout.hit_test(layout.board.x + 1, layout.board.y + 1),
        None
    );
    // Outside the board entirely.
    assert_eq!(layout.hit_test(0, 0), None);
}

#[test]
fn drag_across_two_dots_yields_first_middle_last() {
    let layout = layout();
    let mut tracker = GestureTracker::new();

    let (ax, ay) = layout.dot_center(GridPos::new(0, 0));
    let (bx, by) = layout.dot_center(GridPos::new(0, 1));

    let mut down = frame((ax as u32, ay as u32));
    down.mouse_down = true;
    assert_eq!(
        tracker.track(down, &layout),
        vec![(GridPos::new(0, 0), DotSelectionStatus::First)]
    );

    assert_eq!(
        tracker.track(frame((bx as u32, by as u32)), &layout),
        vec![(GridPos::new(0, 1), DotSelectionStatus::Middle)]
    );

    // Lingering on the same dot emits nothing new.
    assert!(tracker.track(frame((bx as u32, by as u32)), &layout).is_empty());

    let up = InputFrame {
        mouse_pos: Some((bx as u32, by as u32)),
        mouse_up: true,
        ..InputFrame::default()
    };
    assert_eq!(
        tracker.track(up, &layout),
        vec![(GridPos::new(0, 1), DotSelectionStatus::Last)]
    );
    assert!(!tracker.is_active());
}

#[test]
fn a_drag_that_never_touches_a_dot_is_silent() {
    let layout = layout();
    let mut tracker = GestureTracker::new();

    let mut down = frame((1, 1));
    down.mouse_down = true;
    assert!(tracker.track(down, &layout).is_empty());

    let up = InputFrame {
        mouse_pos: Some((2, 2)),
        mouse_up: true,
        ..InputFrame::default()
    };
    assert!(tracker.track(up, &layout).is_empty());
    assert!(!tracker.is_active());
}

#[test]
fn hud_text_lags_the_model_until_refreshed() {
    let mut game = DotsGame::new(5);
    game.set_grid_for_test([[0; GRID_COLS]; 6]);
    let mut hud = HudModel::new(&game);
    assert_eq!(hud.moves_text, "MOVES 10");
    assert_eq!(hud.score_text, "SCORE 0");

    game.process_dot(GridPos::new(0, 0));
    game.process_dot(GridPos::new(0, 1));
    game.finish_move();

    // The cached strings are unchanged until an explicit refresh.
    assert_eq!(hud.moves_text, "MOVES 10");
    hud.refresh(&game);
    assert_eq!(hud.moves_text, "MOVES 9");
    assert_eq!(hud.score_text, "SCORE 2");
}
