use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Score-table source options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceOptions {
    /// Directory where downloaded score tables are cached.
    pub cache_dir: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("assets/scores"),
        }
    }
}
