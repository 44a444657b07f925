//! Inovation - runtime core of a side-scrolling platformer
//!
//! Core modules:
//! - `field`: Tile grid engine (level decoding, collision queries, animation clock)
//! - `game`: Macro-state controller (title, opening, gameplay, ending, secret screens)
//! - `audio`: Background music / sound effect collaborator
//! - `input`: Per-frame input queries
//! - `render`: Sprite blit contract consumed by the external renderer
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod field;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;

pub use error::{AudioError, ConfigError, LevelError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 320;
    pub const SCREEN_HEIGHT: i32 = 240;

    /// Logical frames per second
    pub const FRAME_RATE: u32 = 60;

    /// Edge length of one tile in pixels
    pub const CHAR_SIZE: i32 = 16;

    /// Field dimensions in tiles
    pub const FIELD_WIDTH: usize = 128;
    pub const FIELD_HEIGHT: usize = 128;

    /// Frames a screen must be active before a confirm press is honoured
    pub const INPUT_GUARD_FRAMES: u32 = 5;

    /// Extra timer units added per frame while fast-forwarding a scroll
    pub const FAST_FORWARD_STEP: u32 = 20;
}
