use std::time::Duration;

use engine::app::InputFrame;
use engine::graphics::{text_width, Color, Renderer2d};
use engine::surface::SurfaceSize;
use engine::ui::{Anchor, Insets, Rect, Size};
use engine::view_tree::{ButtonNode, TextNode, ViewNode, ViewTree};

use crate::dots_core::{DotsGame, GridPos, GRID_COLS, GRID_ROWS};
use crate::palette::AccessibilitySelection;
use crate::session::DotSelectionStatus;

pub const HUD_HEIGHT: u32 = 72;
pub const BOARD_MARGIN: u32 = 12;
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

const BACKGROUND: Color = [16, 16, 22, 255];
const BOARD_BACKGROUND: Color = [24, 26, 34, 255];
const SELECTION_RING: Color = [250, 250, 250, 255];
const GAME_OVER_TEXT: Color = [240, 120, 120, 255];

/// Actions the HUD buttons can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameUiAction {
    NewGame,
    ToggleColors,
}

/// Pixel geometry of the board for the current surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub board: Rect,
    pub cell: u32,
    pub radius: u32,
}

impl BoardLayout {
    pub fn compute(surface: SurfaceSize) -> Self {
        let content = Rect::from_size(surface.width, surface.height).inset(Insets {
            left: BOARD_MARGIN,
            top: HUD_HEIGHT + BOARD_MARGIN,
            right: BOARD_MARGIN,
            bottom: BOARD_MARGIN,
        });
        let side = content.w.min(content.h);
        // Snap to a multiple of the column count so cells stay uniform.
        let cell = (side / GRID_COLS as u32).max(1);
        let side = cell * GRID_COLS as u32;
        let board = content.place(Size::new(side, side), Anchor::TopCenter);
        Self {
            board,
            cell,
            radius: (cell * 2 / 5).max(1),
        }
    }

    pub fn dot_center(&self, pos: GridPos) -> (i32, i32) {
        let x = self.board.x as i32 + pos.col as i32 * self.cell as i32 + self.cell as i32 / 2;
        let y = self.board.y as i32 + pos.row as i32 * self.cell as i32 + self.cell as i32 / 2;
        (x, y)
    }

    /// Maps a pointer position to the dot whose disc it touches.
    ///
    /// The test is radius-based with a little slop, so grazing the corner of
    /// a cell does not select its dot.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<GridPos> {
        if !self.board.contains(x, y) {
            return None;
        }
        let col = ((x - self.board.x) / self.cell) as usize;
        let row = ((y - self.board.y) / self.cell) as usize;
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        let pos = GridPos::new(row, col);
        let (cx, cy) = self.dot_center(pos);
        let dx = x as i32 - cx;
        let dy = y as i32 - cy;
        let reach = (self.radius + self.radius / 4) as i32;
        if dx * dx + dy * dy <= reach * reach {
            Some(pos)
        } else {
            None
        }
    }

    /// How far the board must travel to be fully off a surface of `height`.
    pub fn slide_travel(&self, height: u32) -> u32 {
        height.max(self.board.y + self.board.h)
    }
}

/// Folds per-frame pointer input into First/Middle/Last dot events.
///
/// A drag that never touches a dot produces nothing; the Last event reuses
/// the most recently touched dot, so releasing between cells still ends the
/// gesture on the dot it last covered.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    active: bool,
    last: Option<GridPos>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.last = None;
    }

    pub fn track(
        &mut self,
        input: InputFrame,
        layout: &BoardLayout,
    ) -> Vec<(GridPos, DotSelectionStatus)> {
        let mut events = Vec::new();

        if input.mouse_down {
            self.active = true;
            self.last = None;
        }

        if !self.active {
            return events;
        }

        if input.mouse_held || input.mouse_down {
            if let Some(pos) = input
                .mouse_pos
                .and_then(|(x, y)| layout.hit_test(x, y))
            {
                if self.last != Some(pos) {
                    let status = if self.last.is_none() {
                        DotSelectionStatus::First
                    } else {
                        DotSelectionStatus::Middle
                    };
                    events.push((pos, status));
                    self.last = Some(pos);
                }
            }
        }

        if input.mouse_up {
            if let Some(pos) = self.last {
                events.push((pos, DotSelectionStatus::Last));
            }
            self.active = false;
            self.last = None;
        }

        events
    }
}

/// Cached HUD text: the strings change only on an explicit refresh, so
/// displayed counters stay in step with the visual board during animations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudModel {
    pub moves_text: String,
    pub score_text: String,
}

impl HudModel {
    pub fn new(game: &DotsGame) -> Self {
        let mut hud = Self {
            moves_text: String::new(),
            score_text: String::new(),
        };
        hud.refresh(game);
        hud
    }

    pub fn refresh(&mut self, game: &DotsGame) {
        self.moves_text = format!("MOVES {}", game.moves_left());
        self.score_text = format!("SCORE {}", game.score());
    }
}

/// A short-lived text banner, the stand-in for a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub remaining: Duration,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            remaining: NOTICE_DURATION,
        }
    }

    /// Counts down; returns false once expired.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(dt);
        !self.remaining.is_zero()
    }
}

pub fn build_hud_view(
    surface: SurfaceSize,
    hud: &HudModel,
    game_over: bool,
) -> ViewTree<GameUiAction> {
    let mut view = ViewTree::new();

    let bar = Rect::new(0, 0, surface.width, HUD_HEIGHT);
    let inner = bar.inset(Insets::all(8));

    view.push(ViewNode::Button(ButtonNode {
        rect: inner.place(Size::new(110, 26), Anchor::TopLeft),
        label: "NEW GAME".to_string(),
        action: GameUiAction::NewGame,
        enabled: true,
    }));
    view.push(ViewNode::Button(ButtonNode {
        rect: inner.place(Size::new(110, 26), Anchor::TopRight),
        label: "COLORS".to_string(),
        action: GameUiAction::ToggleColors,
        enabled: true,
    }));

    view.push(ViewNode::Text(TextNode {
        pos: (inner.x, inner.y + 36),
        text: hud.moves_text.clone(),
        scale: 3,
    }));
    let score_w = text_width(&hud.score_text, 3);
    view.push(ViewNode::Text(TextNode {
        pos: (
            inner.x + inner.w.saturating_sub(score_w),
            inner.y + 36,
        ),
        text: hud.score_text.clone(),
        scale: 3,
    }));

    if game_over {
        let text = "GAME OVER";
        let w = text_width(text, 3);
        view.push(ViewNode::Text(TextNode {
            pos: (
                surface.width.saturating_sub(w) / 2,
                HUD_HEIGHT.saturating_sub(20),
            ),
            text: text.to_string(),
            scale: 3,
        }));
    }

    view
}

pub fn draw_background(renderer: &mut dyn Renderer2d) {
    renderer.clear(BACKGROUND);
}

/// Draws the grid of dots with the slide offset and removal shrink applied.
pub fn draw_board(
    renderer: &mut dyn Renderer2d,
    game: &DotsGame,
    layout: &BoardLayout,
    palette: AccessibilitySelection,
    slide_offset: i32,
    removal_progress: f32,
) {
    let board_y = layout.board.y as i32 + slide_offset;
    if board_y < renderer.size().height as i32 && board_y + layout.board.h as i32 > 0 {
        let clipped_y = board_y.max(0) as u32;
        let clip_h = (board_y + layout.board.h as i32 - clipped_y as i32).max(0) as u32;
        renderer.fill_rect(
            Rect::new(layout.board.x, clipped_y, layout.board.w, clip_h),
            BOARD_BACKGROUND,
        );
    }

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let pos = GridPos::new(row, col);
            let (cx, cy) = layout.dot_center(pos);
            let cy = cy + slide_offset;

            let selected = game.is_selected(pos);
            let mut radius = layout.radius;
            if selected && removal_progress > 0.0 {
                radius = ((layout.radius as f32) * (1.0 - removal_progress)).round() as u32;
                if radius == 0 {
                    continue;
                }
            }

            let color = palette.dot_color(game.color_at(pos));
            renderer.fill_circle(cx, cy, radius, color);
            if selected {
                renderer.circle_outline(cx, cy, radius + 3, 2, SELECTION_RING);
            }
        }
    }
}

pub fn draw_notice(renderer: &mut dyn Renderer2d, notice: &Notice) {
    let size = renderer.size();
    let scale = 2;
    let w = text_width(&notice.text, scale);
    let x = size.width.saturating_sub(w) / 2;
    let y = size.height.saturating_sub(40);
    let pad = 6;
    let back = Rect::new(
        x.saturating_sub(pad),
        y.saturating_sub(pad),
        w + pad * 2,
        10 * scale + pad * 2,
    );
    renderer.blend_rect(back, [0, 0, 0, 255], 180);
    renderer.draw_text_scaled(x, y, &notice.text, [235, 235, 240, 255], scale);
}

pub fn draw_game_over_hint(renderer: &mut dyn Renderer2d, layout: &BoardLayout) {
    let text = "OUT OF MOVES";
    let scale = 2;
    let w = text_width(text, scale);
    let (cx, cy) = layout.board.center();
    renderer.draw_text_scaled(
        cx.saturating_sub(w / 2),
        cy,
        text,
        GAME_OVER_TEXT,
        scale,
    );
}
