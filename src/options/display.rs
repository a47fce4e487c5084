use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Heatmap windowing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct DisplayOptions {
    /// Half-width, in sequence positions, of the window applied around a
    /// selected position.
    pub window_margin: usize,
    /// Fraction of the position axis shown when a table is first
    /// rendered. Long proteins are unreadable at full length, so the
    /// initial window covers only the leading part of the sequence.
    pub initial_window_fraction: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            window_margin: 50,
            initial_window_fraction: 0.25,
        }
    }
}
