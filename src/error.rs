//! Settings, save file and audio errors

use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the game rules; the rules themselves never error
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Settings or save file could not be read or written
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Settings or save file is not valid JSON
    #[error("malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Settings describe a game that cannot be played
    #[error("invalid settings: {0}")]
    Invalid(String),
    /// A synthesized cue was rejected by the audio backend
    #[error("failed to load {cue} cue: {reason}")]
    Audio { cue: &'static str, reason: String },
}

pub type Result<T, E = SnakeError> = std::result::Result<T, E>;
