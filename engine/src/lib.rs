pub mod app;
pub mod audio;
pub mod digest;
pub mod graphics;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;
pub mod view_tree;

/// An event-driven game session: each discrete event mutates the state and
/// yields an ordered list of effects for the outside world to perform.
///
/// The effect order is part of the contract. Callers (and tests) may rely on
/// it, which is what makes interaction-order bugs testable without a window.
pub trait SessionLogic {
    type State;
    type Event;
    type Effect;

    fn initial_state(&self) -> Self::State;
    fn handle(&self, state: &mut Self::State, event: Self::Event) -> Vec<Self::Effect>;
}

/// Drives a `SessionLogic` headlessly and keeps a log of every effect it
/// emitted, in emission order.
#[derive(Debug)]
pub struct SessionHarness<L: SessionLogic> {
    logic: L,
    state: L::State,
    log: Vec<L::Effect>,
}

impl<L: SessionLogic> SessionHarness<L>
where
    L::Effect: Clone,
{
    pub fn new(logic: L) -> Self {
        let state = logic.initial_state();
        Self {
            logic,
            state,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &L::State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut L::State {
        &mut self.state
    }

    /// Handles one event, returning its effects and appending them to the log.
    pub fn dispatch(&mut self, event: L::Event) -> Vec<L::Effect> {
        let effects = self.logic.handle(&mut self.state, event);
        self.log.extend(effects.iter().cloned());
        effects
    }

    pub fn run<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = L::Event>,
    {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Every effect emitted since construction (or the last `clear_log`).
    pub fn log(&self) -> &[L::Effect] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}
