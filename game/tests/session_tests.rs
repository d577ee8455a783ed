//! Interaction-ordering properties of the session controller, driven through
//! the headless harness. Effect order is the contract under test.

use engine::SessionHarness;

use dotty::dots_core::{GridPos, GRID_COLS, GRID_ROWS, STARTING_MOVES};
use dotty::palette::AccessibilitySelection;
use dotty::playtest::{dispatch_resolved, play_gesture, Gesture};
use dotty::session::{
    DotSelectionStatus, DotsSession, SessionEffect, SessionEvent,
};

fn harness() -> SessionHarness<DotsSession> {
    let mut harness = SessionHarness::new(DotsSession::new(99));
    // A uniform board so any orthogonal path is selectable.
    harness
        .state_mut()
        .game
        .set_grid_for_test([[0; GRID_COLS]; GRID_ROWS]);
    harness.clear_log();
    harness
}

fn touch(pos: (usize, usize), status: DotSelectionStatus) -> SessionEvent {
    SessionEvent::DotTouched {
        pos: GridPos::new(pos.0, pos.1),
        status,
    }
}

#[test]
fn dot_touches_after_game_over_are_inert() {
    let mut harness = harness();
    harness.state_mut().game.set_moves_left_for_test(0);

    let effects = harness.dispatch(touch((0, 0), DotSelectionStatus::First));
    assert!(effects.is_empty());
    assert!(harness.state().game.selected_dots().is_empty());
}

#[test]
fn first_dot_resets_tones_before_playing_one() {
    let mut harness = harness();
    let effects = harness.dispatch(touch((0, 0), DotSelectionStatus::First));
    assert_eq!(
        effects,
        vec![
            SessionEffect::ResetTones,
            SessionEffect::PlayTone { added: true },
            SessionEffect::Redraw,
        ]
    );
}

#[test]
fn backtracking_plays_the_removed_tone() {
    let mut harness = harness();
    harness.run([
        touch((0, 0), DotSelectionStatus::First),
        touch((0, 1), DotSelectionStatus::Middle),
    ]);

    let effects = harness.dispatch(touch((0, 0), DotSelectionStatus::Middle));
    assert_eq!(
        effects,
        vec![
            SessionEffect::PlayTone { added: false },
            SessionEffect::Redraw,
        ]
    );
}

#[test]
fn rejected_dots_make_no_sound() {
    let mut harness = harness();
    harness.dispatch(touch((0, 0), DotSelectionStatus::First));

    // Not adjacent to the last selected dot.
    let effects = harness.dispatch(touch((3, 3), DotSelectionStatus::Middle));
    assert_eq!(effects, vec![SessionEffect::Redraw]);
}

#[test]
fn releasing_on_a_single_dot_clears_without_animation() {
    let mut harness = harness();
    harness.dispatch(touch((0, 0), DotSelectionStatus::First));

    let effects = harness.dispatch(touch((0, 0), DotSelectionStatus::Last));
    assert!(!effects.contains(&SessionEffect::StartRemovalAnimation));
    assert!(harness.state().game.selected_dots().is_empty());
    assert_eq!(harness.state().game.moves_left(), STARTING_MOVES);
}

#[test]
fn releasing_a_chain_starts_the_animation_without_touching_the_model() {
    let mut harness = harness();
    harness.run([
        touch((0, 0), DotSelectionStatus::First),
        touch((0, 1), DotSelectionStatus::Middle),
    ]);

    let effects = harness.dispatch(touch((0, 1), DotSelectionStatus::Last));
    assert!(effects.contains(&SessionEffect::StartRemovalAnimation));

    // Finalization is deferred: selection, score, and moves are untouched
    // until the animation reports completion.
    assert_eq!(harness.state().game.selected_dots().len(), 2);
    assert_eq!(harness.state().game.score(), 0);
    assert_eq!(harness.state().game.moves_left(), STARTING_MOVES);
}

#[test]
fn removal_finished_commits_the_move_then_redraws_and_refreshes() {
    let mut harness = harness();
    harness.run([
        touch((0, 0), DotSelectionStatus::First),
        touch((0, 1), DotSelectionStatus::Middle),
        touch((0, 1), DotSelectionStatus::Last),
    ]);

    let effects = harness.dispatch(SessionEvent::RemovalFinished);
    assert_eq!(effects, vec![SessionEffect::Redraw, SessionEffect::RefreshHud]);
    assert_eq!(harness.state().game.score(), 2);
    assert_eq!(harness.state().game.moves_left(), STARTING_MOVES - 1);
    assert!(harness.state().game.selected_dots().is_empty());
}

#[test]
fn the_final_move_appends_the_game_over_cue_after_the_hud_refresh() {
    let mut harness = harness();
    harness.state_mut().game.set_moves_left_for_test(1);
    harness.run([
        touch((5, 5), DotSelectionStatus::First),
        touch((5, 4), DotSelectionStatus::Middle),
        touch((5, 4), DotSelectionStatus::Last),
    ]);

    let effects = harness.dispatch(SessionEvent::RemovalFinished);
    assert_eq!(
        effects,
        vec![
            SessionEffect::Redraw,
            SessionEffect::RefreshHud,
            SessionEffect::PlayGameOver,
        ]
    );
    assert!(harness.state().game.is_game_over());
}

#[test]
fn new_game_resets_strictly_after_the_board_slides_off() {
    let mut harness = harness();
    harness.run([
        touch((0, 0), DotSelectionStatus::First),
        touch((0, 1), DotSelectionStatus::Middle),
        touch((0, 1), DotSelectionStatus::Last),
        SessionEvent::RemovalFinished,
    ]);
    assert_eq!(harness.state().game.score(), 2);

    let effects = harness.dispatch(SessionEvent::NewGameRequested);
    assert_eq!(effects, vec![SessionEffect::StartBoardOff]);
    // The old board is still live while it slides out.
    assert_eq!(harness.state().game.score(), 2);
    assert_eq!(harness.state().game.moves_left(), STARTING_MOVES - 1);

    let effects = harness.dispatch(SessionEvent::BoardOffFinished);
    assert_eq!(
        effects,
        vec![
            SessionEffect::Redraw,
            SessionEffect::RefreshHud,
            SessionEffect::StartBoardOn,
        ]
    );
    assert_eq!(harness.state().game.score(), 0);
    assert_eq!(harness.state().game.moves_left(), STARTING_MOVES);

    assert!(harness.dispatch(SessionEvent::BoardOnFinished).is_empty());
}

#[test]
fn accessibility_toggle_cycles_three_modes_and_wraps() {
    let mut harness = harness();
    let mut seen = Vec::new();
    for _ in 0..3 {
        let effects = harness.dispatch(SessionEvent::AccessibilityToggled);
        let SessionEffect::ShowNotice(mode) = effects[0] else {
            panic!("expected a notice first, got {effects:?}");
        };
        assert_eq!(effects[1], SessionEffect::Redraw);
        seen.push(mode);
    }

    assert_eq!(
        seen,
        vec![
            AccessibilitySelection::RedGreenBlind,
            AccessibilitySelection::Monochrome,
            AccessibilitySelection::Default,
        ]
    );
    assert_eq!(harness.state().palette, AccessibilitySelection::Default);
}

#[test]
fn palette_changes_never_touch_the_board() {
    let mut harness = harness();
    harness.dispatch(touch((0, 0), DotSelectionStatus::First));
    let before = harness.state().game.clone();

    harness.dispatch(SessionEvent::AccessibilityToggled);
    let after = &harness.state().game;
    assert_eq!(after.selected_dots(), before.selected_dots());
    assert_eq!(after.score(), before.score());
    assert_eq!(after.moves_left(), before.moves_left());
}

#[test]
fn a_full_game_plays_out_to_exactly_one_game_over_cue() {
    let mut harness = harness();
    harness
        .state_mut()
        .game
        .set_moves_left_for_test(2);

    for gesture in [
        Gesture::over([(0, 0), (0, 1)]),
        Gesture::over([(5, 5), (4, 5), (3, 5)]),
    ] {
        // Replays may deal non-uniform boards; keep every path selectable.
        harness
            .state_mut()
            .game
            .set_grid_for_test([[0; GRID_COLS]; GRID_ROWS]);
        play_gesture(&mut harness, &gesture);
    }

    assert!(harness.state().game.is_game_over());
    let cues = harness
        .log()
        .iter()
        .filter(|e| **e == SessionEffect::PlayGameOver)
        .count();
    assert_eq!(cues, 1);
    assert_eq!(harness.state().game.score(), 5);

    // And a new game brings the session back to life.
    dispatch_resolved(&mut harness, SessionEvent::NewGameRequested);
    assert!(!harness.state().game.is_game_over());
    assert_eq!(harness.state().game.score(), 0);
}
