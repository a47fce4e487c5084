//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (heatmap windowing, colors, viewer presentation
//! and addressing, score sources) are consolidated here. Options serialize
//! to/from TOML for presets stored alongside the embedding application.

mod colors;
mod display;
mod source;
mod viewer;

use std::path::Path;

pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use source::SourceOptions;
pub use viewer::{LightingMode, ViewerOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MutviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[colors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Heatmap windowing options.
    pub display: DisplayOptions,
    /// Shared color options.
    pub colors: ColorOptions,
    /// Structure-viewer presentation and addressing options.
    pub viewer: ViewerOptions,
    /// Score-table source options.
    #[schemars(skip)]
    pub source: SourceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MutviewError::Io`] when the file cannot be read,
    /// [`MutviewError::OptionsParse`] when it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, MutviewError> {
        let content = std::fs::read_to_string(path).map_err(MutviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MutviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`MutviewError::OptionsParse`] on serialization failure,
    /// [`MutviewError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), MutviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MutviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MutviewError::Io)?;
        }
        std::fs::write(path, content).map_err(MutviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
