//! Headless playtesting helpers.
//!
//! These drive a session through the same event protocol the windowed app
//! uses, answering every animation-start effect with its completion event so
//! whole games can be simulated in a unit test.

use engine::SessionHarness;

use crate::dots_core::GridPos;
use crate::session::{DotSelectionStatus, DotsSession, SessionEffect, SessionEvent};

/// A drag gesture over a path of dots.
#[derive(Debug, Clone)]
pub struct Gesture {
    path: Vec<GridPos>,
}

impl Gesture {
    pub fn over(path: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            path: path
                .into_iter()
                .map(|(row, col)| GridPos::new(row, col))
                .collect(),
        }
    }

    /// The event sequence the pointer would produce: First on the opening
    /// dot, Middle for the rest, and a Last that repeats the final dot.
    pub fn events(&self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for (i, &pos) in self.path.iter().enumerate() {
            let status = if i == 0 {
                DotSelectionStatus::First
            } else {
                DotSelectionStatus::Middle
            };
            events.push(SessionEvent::DotTouched { pos, status });
        }
        if let Some(&last) = self.path.last() {
            events.push(SessionEvent::DotTouched {
                pos: last,
                status: DotSelectionStatus::Last,
            });
        }
        events
    }
}

/// Dispatches one event and immediately resolves any animations it starts,
/// as if every animation completed instantly. Returns every effect emitted
/// along the way, in order.
pub fn dispatch_resolved(
    harness: &mut SessionHarness<DotsSession>,
    event: SessionEvent,
) -> Vec<SessionEffect> {
    let mut all = Vec::new();
    let mut queue = vec![event];
    while let Some(event) = queue.pop() {
        for effect in harness.dispatch(event) {
            match effect {
                SessionEffect::StartRemovalAnimation => {
                    queue.push(SessionEvent::RemovalFinished)
                }
                SessionEffect::StartBoardOff => queue.push(SessionEvent::BoardOffFinished),
                SessionEffect::StartBoardOn => queue.push(SessionEvent::BoardOnFinished),
                _ => {}
            }
            all.push(effect);
        }
    }
    all
}

/// Plays a full gesture through `dispatch_resolved`.
pub fn play_gesture(
    harness: &mut SessionHarness<DotsSession>,
    gesture: &Gesture,
) -> Vec<SessionEffect> {
    let mut all = Vec::new();
    for event in gesture.events() {
        all.extend(dispatch_resolved(harness, event));
    }
    all
}
