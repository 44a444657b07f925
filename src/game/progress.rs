//! Progress of a single run

use serde::{Deserialize, Serialize};

use crate::field::TileKind;

/// Play style chosen on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Normal,
    /// Unlocked by the title screen key sequence
    Lunker,
}

/// Items collected and time spent in the current run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    mode: GameMode,
    /// Item kinds picked up, in pickup order
    collected: Vec<TileKind>,
    /// Frames spent in gameplay
    time_frames: u32,
    /// Withholds the secret item from pickup and drawing
    #[serde(default)]
    hidden_secret: bool,
}

impl GameData {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_lunker(&self) -> bool {
        self.mode == GameMode::Lunker
    }

    /// Record a pickup. Returns false for non-items or kinds already held.
    pub fn collect(&mut self, kind: TileKind) -> bool {
        if !kind.is_collectible() || self.collected.contains(&kind) {
            return false;
        }
        self.collected.push(kind);
        true
    }

    pub fn has_item(&self, kind: TileKind) -> bool {
        self.collected.contains(&kind)
    }

    /// Collected items shown on the result screen. The secret item and life
    /// pickups do not count.
    pub fn item_count(&self) -> u32 {
        self.collected
            .iter()
            .filter(|k| k.counts_for_completion())
            .count() as u32
    }

    pub fn has_secret_item(&self) -> bool {
        self.collected.iter().any(|k| k.is_secret())
    }

    pub fn is_hidden_secret(&self) -> bool {
        self.hidden_secret
    }

    pub fn set_hidden_secret(&mut self, hidden: bool) {
        self.hidden_secret = hidden;
    }

    /// Advance the play clock by one frame
    pub fn tick(&mut self) {
        self.time_frames = self.time_frames.saturating_add(1);
    }

    pub fn time_frames(&self) -> u32 {
        self.time_frames
    }

    pub fn time_in_seconds(&self, frame_rate: u32) -> u32 {
        self.time_frames / frame_rate.max(1)
    }
}
