// Layout preferences for the resizable dashboard panels
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEFT_WIDTH: f64 = 800.0;
pub const DEFAULT_LEFT_SECTION_HEIGHT: f64 = 460.0;
pub const DEFAULT_TOP_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreferences {
    pub left_width: f64,
    pub left_section_height: f64,
    pub top_height: f64,
}

impl Default for LayoutPreferences {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            left_section_height: DEFAULT_LEFT_SECTION_HEIGHT,
            top_height: DEFAULT_TOP_HEIGHT,
        }
    }
}

/// A partially specified layout record, as stored on disk or sent by a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    pub left_width: Option<f64>,
    pub left_section_height: Option<f64>,
    pub top_height: Option<f64>,
}

impl LayoutPreferences {
    /// Apply a patch; fields that are missing or not a positive finite number
    /// keep their current value.
    pub fn merged(self, patch: LayoutPatch) -> Self {
        Self {
            left_width: pick(patch.left_width, self.left_width),
            left_section_height: pick(patch.left_section_height, self.left_section_height),
            top_height: pick(patch.top_height, self.top_height),
        }
    }
}

fn pick(candidate: Option<f64>, fallback: f64) -> f64 {
    match candidate {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}
