use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color options shared by both views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB background of the structure viewport.
    pub background: [f32; 3],
    /// RGB color for the transient hover highlight, applied to both the
    /// heatmap overlay and the viewer residue mark.
    pub highlight: [f32; 3],
    /// RGB color for the persistent click selection mark.
    pub selection: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            highlight: [1.0, 0.92, 0.23],
            selection: [0.2, 0.8, 0.4],
        }
    }
}
