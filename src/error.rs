//! Crate-level error types.

use std::fmt;

/// Errors produced by the mutview crate.
#[derive(Debug)]
pub enum MutviewError {
    /// A score-table field failed numeric parsing.
    ScoreParse(String),
    /// A score record violated the table's shape contract.
    ScoreValidation(String),
    /// Failed to fetch a remote resource.
    Fetch(String),
    /// Failed to load a molecular structure into the viewer backend.
    StructureLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MutviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScoreParse(msg) => write!(f, "score parse error: {msg}"),
            Self::ScoreValidation(msg) => {
                write!(f, "score validation error: {msg}")
            }
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::StructureLoad(msg) => {
                write!(f, "structure load error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MutviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MutviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
