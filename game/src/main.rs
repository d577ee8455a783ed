use std::error::Error;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use engine::app::{run_game, AppConfig, AppContext, GameApp, InputFrame};
use engine::graphics::Renderer2d;
use engine::view_tree::{draw_view_tree, ViewTree};
use winit::dpi::PhysicalSize;

use dotty::board_ui::{
    build_hud_view, draw_background, draw_board, draw_game_over_hint, draw_notice, BoardLayout,
    GameUiAction, GestureTracker, HudModel, Notice,
};
use dotty::dots_core::DotsGame;
use dotty::session::{self, SessionEffect, SessionEvent, SessionState};
use dotty::settings::{PlayerSettings, SettingsStore};
use dotty::sfx::SoundEffects;
use dotty::transitions::BoardTransition;

struct AppState {
    session: SessionState,
    transition: BoardTransition,
    gestures: GestureTracker,
    hud: HudModel,
    notice: Option<Notice>,
    layout: BoardLayout,
}

struct DotsApp {
    settings: PlayerSettings,
    sfx: Option<SoundEffects>,
}

impl DotsApp {
    fn new(settings: PlayerSettings) -> Self {
        let sfx = match SoundEffects::new(settings.audio.effective_sfx_gain()) {
            Ok(sfx) => Some(sfx),
            Err(err) => {
                eprintln!("audio unavailable, continuing without sound: {err}");
                None
            }
        };
        Self { settings, sfx }
    }

    /// Effects that touch presentation state are applied here; the rest
    /// (sound) are passed through for `handle_effects` after present.
    fn apply_effect(&mut self, state: &mut AppState, effect: SessionEffect) -> bool {
        match effect {
            SessionEffect::StartBoardOff => {
                state.transition.start_board_off();
            }
            SessionEffect::StartBoardOn => {
                state.transition.start_board_on();
            }
            SessionEffect::StartRemovalAnimation => {
                state.transition.start_removal();
            }
            SessionEffect::RefreshHud => state.hud.refresh(&state.session.game),
            SessionEffect::ShowNotice(palette) => {
                state.notice = Some(Notice::new(palette.label()));
            }
            SessionEffect::Redraw => {}
            SessionEffect::ResetTones
            | SessionEffect::PlayTone { .. }
            | SessionEffect::PlayGameOver => return false,
        }
        true
    }
}

impl GameApp for DotsApp {
    type State = AppState;
    type Action = GameUiAction;
    type Effect = SessionEffect;

    fn init_state(&mut self, ctx: &mut AppContext) -> AppState {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        let game = DotsGame::new(seed).with_starting_moves(self.settings.gameplay.starting_moves);
        let session = SessionState::new(game)
            .with_palette(self.settings.accessibility.initial_palette);
        let hud = HudModel::new(&session.game);
        AppState {
            session,
            transition: BoardTransition::default(),
            gestures: GestureTracker::new(),
            hud,
            notice: None,
            layout: BoardLayout::compute(ctx.surface_size),
        }
    }

    fn build_view(&self, state: &AppState, ctx: &AppContext) -> ViewTree<GameUiAction> {
        build_hud_view(ctx.surface_size, &state.hud, state.session.game.is_game_over())
    }

    fn update_state(
        &mut self,
        state: &mut AppState,
        input: InputFrame,
        dt: Duration,
        actions: &[GameUiAction],
        ctx: &mut AppContext,
    ) -> Vec<SessionEffect> {
        state.layout = BoardLayout::compute(ctx.surface_size);

        if let Some(notice) = &mut state.notice {
            if !notice.tick(dt) {
                state.notice = None;
            }
        }

        let mut events = Vec::new();

        if let Some(finished) = state.transition.tick(dt) {
            events.push(finished);
        }

        for action in actions {
            match action {
                GameUiAction::NewGame => events.push(SessionEvent::NewGameRequested),
                GameUiAction::ToggleColors => events.push(SessionEvent::AccessibilityToggled),
            }
        }

        // Gestures only reach the board while no animation is running;
        // an in-flight slide or removal would otherwise race the model.
        if state.transition.is_idle() {
            for (pos, status) in state.gestures.track(input, &state.layout) {
                events.push(SessionEvent::DotTouched { pos, status });
            }
        } else if state.gestures.is_active() {
            state.gestures.cancel();
        }

        let mut sound_effects = Vec::new();
        for event in events {
            for effect in session::handle_event(&mut state.session, event) {
                if !self.apply_effect(state, effect) {
                    sound_effects.push(effect);
                }
            }
        }
        sound_effects
    }

    fn render(
        &mut self,
        state: &AppState,
        view: &ViewTree<GameUiAction>,
        renderer: &mut dyn Renderer2d,
    ) {
        draw_background(renderer);

        let travel = state.layout.slide_travel(renderer.size().height);
        draw_board(
            renderer,
            &state.session.game,
            &state.layout,
            state.session.palette,
            state.transition.slide_offset(travel),
            state.transition.removal_progress(),
        );

        if state.session.game.is_game_over() && state.transition.is_idle() {
            draw_game_over_hint(renderer, &state.layout);
        }

        draw_view_tree(renderer, view);

        if let Some(notice) = &state.notice {
            draw_notice(renderer, notice);
        }
    }

    fn handle_effects(&mut self, effects: Vec<SessionEffect>, _ctx: &mut AppContext) {
        let Some(sfx) = &mut self.sfx else {
            return;
        };
        for effect in effects {
            match effect {
                SessionEffect::ResetTones => sfx.reset_tones(),
                SessionEffect::PlayTone { added } => sfx.play_tone(added),
                SessionEffect::PlayGameOver => sfx.play_game_over(),
                _ => {}
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let store = SettingsStore::from_env();
    let settings = store.load();
    if let Err(err) = store.save(&settings) {
        eprintln!("could not write settings file: {err}");
    }

    let mut app = DotsApp::new(settings);
    if app.settings.audio.mute_all {
        app.sfx = None;
    }

    run_game(
        AppConfig {
            title: "Dotty".to_string(),
            desired_size: PhysicalSize::new(480, 620),
            clamp_to_monitor: true,
            vsync: Some(true),
        },
        app,
    )
}
