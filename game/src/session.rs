//! The game session controller.
//!
//! A pure event-to-effects state machine bridging input gestures, animation
//! completions, and UI requests to the `DotsGame` model. It performs no I/O
//! itself: sounds, redraws, and animation starts are reported as ordered
//! `SessionEffect`s for the caller to carry out, and that ordering is the
//! behavioral contract (e.g. the model is never finalized before the removal
//! animation reports completion).

use engine::SessionLogic;
use serde::{Deserialize, Serialize};

use crate::dots_core::{DotStatus, DotsGame, GridPos};
use crate::palette::AccessibilitySelection;

/// Position of a dot event within a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotSelectionStatus {
    First,
    Middle,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Session startup or an explicit restart without animation.
    Started,
    DotTouched {
        pos: GridPos,
        status: DotSelectionStatus,
    },
    NewGameRequested,
    BoardOffFinished,
    BoardOnFinished,
    RemovalFinished,
    AccessibilityToggled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    ResetTones,
    PlayTone { added: bool },
    PlayGameOver,
    StartBoardOff,
    StartBoardOn,
    StartRemovalAnimation,
    Redraw,
    RefreshHud,
    ShowNotice(AccessibilitySelection),
}

/// Everything the controller owns: the injected model plus the palette mode.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub game: DotsGame,
    pub palette: AccessibilitySelection,
}

impl SessionState {
    pub fn new(game: DotsGame) -> Self {
        Self {
            game,
            palette: AccessibilitySelection::default(),
        }
    }

    pub fn with_palette(mut self, palette: AccessibilitySelection) -> Self {
        self.palette = palette;
        self
    }
}

pub fn handle_event(state: &mut SessionState, event: SessionEvent) -> Vec<SessionEffect> {
    match event {
        SessionEvent::Started => {
            state.game.new_game();
            vec![SessionEffect::Redraw, SessionEffect::RefreshHud]
        }

        SessionEvent::DotTouched { pos, status } => {
            // Selections after the last move are inert: no mutation, no sound.
            if state.game.is_game_over() {
                return Vec::new();
            }

            let mut effects = Vec::new();

            if status == DotSelectionStatus::First {
                effects.push(SessionEffect::ResetTones);
            }

            match state.game.process_dot(pos) {
                DotStatus::Added => effects.push(SessionEffect::PlayTone { added: true }),
                DotStatus::Removed => effects.push(SessionEffect::PlayTone { added: false }),
                DotStatus::Rejected => {}
            }

            if status == DotSelectionStatus::Last {
                if state.game.selected_dots().len() > 1 {
                    // The grid mutation and counter updates happen when the
                    // removal animation finishes, never here.
                    effects.push(SessionEffect::StartRemovalAnimation);
                } else {
                    state.game.clear_selected_dots();
                }
            }

            effects.push(SessionEffect::Redraw);
            effects
        }

        SessionEvent::NewGameRequested => {
            // The reset itself waits for BoardOffFinished so the swap never
            // shows a mixed frame.
            vec![SessionEffect::StartBoardOff]
        }

        SessionEvent::BoardOffFinished => {
            state.game.new_game();
            vec![
                SessionEffect::Redraw,
                SessionEffect::RefreshHud,
                SessionEffect::StartBoardOn,
            ]
        }

        SessionEvent::BoardOnFinished => Vec::new(),

        SessionEvent::RemovalFinished => {
            state.game.finish_move();
            let mut effects = vec![SessionEffect::Redraw, SessionEffect::RefreshHud];
            if state.game.is_game_over() {
                effects.push(SessionEffect::PlayGameOver);
            }
            effects
        }

        SessionEvent::AccessibilityToggled => {
            state.palette = state.palette.cycle();
            vec![
                SessionEffect::ShowNotice(state.palette),
                SessionEffect::Redraw,
            ]
        }
    }
}

/// Factory for sessions, giving the headless harness a way to build one.
#[derive(Debug, Clone, Copy)]
pub struct DotsSession {
    pub seed: u64,
    pub starting_moves: u32,
}

impl DotsSession {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            starting_moves: crate::dots_core::STARTING_MOVES,
        }
    }

    pub fn with_starting_moves(mut self, moves: u32) -> Self {
        self.starting_moves = moves;
        self
    }
}

impl SessionLogic for DotsSession {
    type State = SessionState;
    type Event = SessionEvent;
    type Effect = SessionEffect;

    fn initial_state(&self) -> SessionState {
        SessionState::new(DotsGame::new(self.seed).with_starting_moves(self.starting_moves))
    }

    fn handle(&self, state: &mut SessionState, event: SessionEvent) -> Vec<SessionEffect> {
        handle_event(state, event)
    }
}
