//! Load-time errors.
//!
//! The turn state machine has no runtime failure path; everything that can go
//! wrong does so while definitions and configuration are being loaded.

use std::path::PathBuf;

/// Errors raised while loading animations, configuration or wiring a match.
#[derive(Debug, thiserror::Error)]
pub enum CatapultError {
    /// I/O error reading a definition or config file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A clip the state machine drives is not defined for this catapult.
    #[error("missing animation clip {alias:?} (ai: {is_ai})")]
    MissingClip { alias: String, is_ai: bool },

    /// The firing clip has no release frame.
    #[error("animation clip {0:?} has no split frame")]
    MissingSplitFrame(String),

    /// A sheet with no frames, or a split frame outside the sheet.
    #[error("animation clip {alias:?} is invalid: {message}")]
    InvalidClip { alias: String, message: String },

    /// Two definitions share an alias for the same catapult.
    #[error("animation clip {0:?} is defined twice")]
    DuplicateClip(String),

    /// Enemy references are not mutual.
    #[error("players {a} and {b} are not each other's enemy")]
    InconsistentEnemies { a: usize, b: usize },

    /// A player has no enemy assigned.
    #[error("player {0} has no enemy")]
    MissingEnemy(usize),

    /// Id does not belong to this battlefield.
    #[error("unknown {kind} id {id}")]
    UnknownId { kind: &'static str, id: usize },
}

impl CatapultError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatapultError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatapultError>;
