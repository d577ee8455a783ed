use serde::{Deserialize, Serialize};

use crate::graphics::{glyph_advance_x, text_width, Color, Renderer2d};
use crate::ui::Rect;

/// Per-frame pointer state fed to hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiInput {
    pub mouse_pos: Option<(u32, u32)>,
    pub mouse_down: bool,
    pub mouse_up: bool,
}

/// A declarative, serializable description of the HUD for one frame.
///
/// Rebuilt from state every frame; hit testing and drawing both consume it,
/// so what the player clicks is exactly what was drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewTree<A> {
    pub nodes: Vec<ViewNode<A>>,
}

impl<A> ViewTree<A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: ViewNode<A>) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<A> Default for ViewTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewNode<A> {
    Button(ButtonNode<A>),
    Text(TextNode),
    Rect(RectNode),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonNode<A> {
    pub rect: Rect,
    pub label: String,
    pub action: A,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextNode {
    pub pos: (u32, u32),
    pub text: String,
    pub scale: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectNode {
    pub rect: Rect,
    pub color: Color,
}

/// Actions for buttons released under the cursor, topmost first.
pub fn hit_test_actions<A: Clone>(view: &ViewTree<A>, input: UiInput) -> Vec<A> {
    if !input.mouse_up {
        return Vec::new();
    }
    let Some((mx, my)) = input.mouse_pos else {
        return Vec::new();
    };
    let mut actions = Vec::new();
    for node in view.nodes.iter().rev() {
        if let ViewNode::Button(button) = node {
            if button.enabled && button.rect.contains(mx, my) {
                actions.push(button.action.clone());
            }
        }
    }
    actions
}

const BUTTON_FILL: Color = [40, 44, 60, 255];
const BUTTON_BORDER: Color = [120, 128, 160, 255];
const BUTTON_DISABLED_LABEL: Color = [100, 100, 110, 255];
const LABEL_COLOR: Color = [235, 235, 240, 255];

pub fn draw_view_tree<A>(renderer: &mut dyn Renderer2d, view: &ViewTree<A>) {
    for node in &view.nodes {
        match node {
            ViewNode::Rect(rect) => renderer.fill_rect(rect.rect, rect.color),
            ViewNode::Text(text) => {
                renderer.draw_text_scaled(text.pos.0, text.pos.1, &text.text, LABEL_COLOR, text.scale)
            }
            ViewNode::Button(button) => {
                renderer.fill_rect(button.rect, BUTTON_FILL);
                renderer.rect_outline(button.rect, BUTTON_BORDER);
                let label_color = if button.enabled {
                    LABEL_COLOR
                } else {
                    BUTTON_DISABLED_LABEL
                };
                let scale = 2;
                let w = text_width(&button.label, scale);
                let x = button
                    .rect
                    .x
                    .saturating_add(button.rect.w.saturating_sub(w) / 2)
                    // Advance includes one trailing pixel column of spacing.
                    .saturating_add(glyph_advance_x(scale) / 8);
                let y = button
                    .rect
                    .y
                    .saturating_add(button.rect.h.saturating_sub(5 * scale + scale) / 2);
                renderer.draw_text_scaled(x, y, &button.label, label_color, scale);
            }
        }
    }
}
