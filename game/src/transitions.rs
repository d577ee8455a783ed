use std::time::Duration;

use crate::session::SessionEvent;

/// Board slide on new game (both directions).
pub const BOARD_SLIDE_DURATION: Duration = Duration::from_millis(700);
/// Shrink-out of the selected dots before the move commits.
pub const REMOVAL_DURATION: Duration = Duration::from_millis(300);

/// Single-shot board animations.
///
/// At most one phase runs at a time; starting a phase while another is in
/// flight is ignored (there is no cancellation path). `tick` reports each
/// completion exactly once and falls back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardTransition {
    #[default]
    Idle,
    SlidingOff {
        elapsed: Duration,
    },
    SlidingOn {
        elapsed: Duration,
    },
    Removing {
        elapsed: Duration,
    },
}

impl BoardTransition {
    pub fn is_idle(self) -> bool {
        self == BoardTransition::Idle
    }

    pub fn start_board_off(&mut self) -> bool {
        self.start(BoardTransition::SlidingOff {
            elapsed: Duration::ZERO,
        })
    }

    pub fn start_board_on(&mut self) -> bool {
        self.start(BoardTransition::SlidingOn {
            elapsed: Duration::ZERO,
        })
    }

    pub fn start_removal(&mut self) -> bool {
        self.start(BoardTransition::Removing {
            elapsed: Duration::ZERO,
        })
    }

    fn start(&mut self, phase: BoardTransition) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = phase;
        true
    }

    /// Advances the running phase; returns the completion event when the
    /// phase just finished.
    pub fn tick(&mut self, dt: Duration) -> Option<SessionEvent> {
        let (elapsed, duration, finished) = match *self {
            BoardTransition::Idle => return None,
            BoardTransition::SlidingOff { elapsed } => (
                elapsed,
                BOARD_SLIDE_DURATION,
                SessionEvent::BoardOffFinished,
            ),
            BoardTransition::SlidingOn { elapsed } => {
                (elapsed, BOARD_SLIDE_DURATION, SessionEvent::BoardOnFinished)
            }
            BoardTransition::Removing { elapsed } => {
                (elapsed, REMOVAL_DURATION, SessionEvent::RemovalFinished)
            }
        };

        let elapsed = elapsed.saturating_add(dt);
        if elapsed >= duration {
            *self = BoardTransition::Idle;
            return Some(finished);
        }

        *self = match *self {
            BoardTransition::SlidingOff { .. } => BoardTransition::SlidingOff { elapsed },
            BoardTransition::SlidingOn { .. } => BoardTransition::SlidingOn { elapsed },
            BoardTransition::Removing { .. } => BoardTransition::Removing { elapsed },
            BoardTransition::Idle => unreachable!("idle handled above"),
        };
        None
    }

    /// Vertical board offset in pixels for the slide phases. The board exits
    /// downward and re-enters from above.
    pub fn slide_offset(self, travel: u32) -> i32 {
        match self {
            BoardTransition::SlidingOff { elapsed } => {
                (progress(elapsed, BOARD_SLIDE_DURATION) * travel as f32) as i32
            }
            BoardTransition::SlidingOn { elapsed } => {
                -(((1.0 - progress(elapsed, BOARD_SLIDE_DURATION)) * travel as f32) as i32)
            }
            BoardTransition::Idle | BoardTransition::Removing { .. } => 0,
        }
    }

    /// `0..=1` shrink progress of the selected dots; 0 outside the removal
    /// phase.
    pub fn removal_progress(self) -> f32 {
        match self {
            BoardTransition::Removing { elapsed } => progress(elapsed, REMOVAL_DURATION),
            _ => 0.0,
        }
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f32 {
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
