use engine::graphics::Color;
use serde::{Deserialize, Serialize};

use crate::dots_core::NUM_COLORS;

/// Which color set the board draws with. Affects colors only; the rules and
/// the grid never change with the palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilitySelection {
    #[default]
    Default,
    RedGreenBlind,
    Monochrome,
}

impl AccessibilitySelection {
    pub const ALL: [AccessibilitySelection; 3] = [
        AccessibilitySelection::Default,
        AccessibilitySelection::RedGreenBlind,
        AccessibilitySelection::Monochrome,
    ];

    /// Advances to the next mode, wrapping after the last one.
    pub fn cycle(self) -> Self {
        match self {
            AccessibilitySelection::Default => AccessibilitySelection::RedGreenBlind,
            AccessibilitySelection::RedGreenBlind => AccessibilitySelection::Monochrome,
            AccessibilitySelection::Monochrome => AccessibilitySelection::Default,
        }
    }

    /// Short name shown in the transient notice when the mode changes.
    pub fn label(self) -> &'static str {
        match self {
            AccessibilitySelection::Default => "NORMAL COLORS",
            AccessibilitySelection::RedGreenBlind => "RED-GREEN FRIENDLY",
            AccessibilitySelection::Monochrome => "MONOCHROME",
        }
    }

    pub fn dot_color(self, color_index: u8) -> Color {
        let i = (color_index % NUM_COLORS) as usize;
        match self {
            AccessibilitySelection::Default => DEFAULT_DOTS[i],
            AccessibilitySelection::RedGreenBlind => RG_BLIND_DOTS[i],
            AccessibilitySelection::Monochrome => MONO_DOTS[i],
        }
    }
}

const DEFAULT_DOTS: [Color; NUM_COLORS as usize] = [
    [226, 70, 70, 255],   // red
    [76, 186, 96, 255],   // green
    [72, 116, 226, 255],  // blue
    [235, 200, 70, 255],  // yellow
    [164, 92, 214, 255],  // purple
];

// Red and green replaced by hues distinguishable with deuteranopia/protanopia.
const RG_BLIND_DOTS: [Color; NUM_COLORS as usize] = [
    [230, 140, 50, 255],  // orange
    [90, 180, 220, 255],  // sky blue
    [40, 70, 160, 255],   // navy
    [235, 200, 70, 255],  // yellow
    [150, 90, 200, 255],  // purple
];

const MONO_DOTS: [Color; NUM_COLORS as usize] = [
    [245, 245, 245, 255],
    [196, 196, 196, 255],
    [148, 148, 148, 255],
    [100, 100, 100, 255],
    [56, 56, 56, 255],
];
