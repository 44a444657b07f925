//! Error types for recoverable environment faults
//!
//! Malformed level data and out-of-range grid access are programming errors
//! and panic instead; see `field::grid`.

use thiserror::Error;

use crate::audio::{SoundEffect, Track};

/// Failure reported by the audio device while applying a side effect
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to play track {0:?}: {1}")]
    Play(Track, String),

    #[error("failed to pause track {0:?}: {1}")]
    Pause(Track, String),

    #[error("failed to rewind track {0:?}: {1}")]
    Rewind(Track, String),

    #[error("failed to set volume on track {0:?}: {1}")]
    Volume(Track, String),

    #[error("failed to play effect {0:?}: {1}")]
    Effect(SoundEffect, String),
}

/// Failure while reading a level asset from disk
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("level has {rows} rows, field holds at most {max}")]
    TooManyRows { rows: usize, max: usize },

    #[error("row {row} has {len} columns, field holds at most {max}")]
    RowTooLong { row: usize, len: usize, max: usize },

    #[error("unknown tile character {ch:?} at column {col}, row {row}")]
    UnknownTile { ch: char, col: usize, row: usize },
}

/// Failure while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

pub type Result<T, E = AudioError> = std::result::Result<T, E>;
