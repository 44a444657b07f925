//! Game state controller
//!
//! The game is always on exactly one macro-state (screen). Each frame the
//! controller swaps in the screen requested by the previous frame's
//! [`Signal`], advances it, and renders it unless the frame ran slow.
//! Screens never touch each other; they share only the per-frame context.

pub mod controller;
pub mod ending;
pub mod opening;
pub mod playing;
pub mod progress;
pub mod screen;
pub mod secret;
pub mod signal;
pub mod stage;
pub mod title;

pub use controller::{GameController, GameplayFactory};
pub use ending::{EndingPhase, EndingScreen};
pub use opening::OpeningScreen;
pub use playing::{Gameplay, PlayingScreen};
pub use progress::{GameData, GameMode};
pub use screen::{Screen, ScreenKind};
pub use secret::SecretScreen;
pub use signal::{SecretVariant, Signal};
pub use stage::Stage;
pub use title::TitleScreen;

use rand_pcg::Pcg32;

use crate::audio::Audio;
use crate::input::InputSource;
use crate::settings::Settings;

/// Everything a screen may read or mutate while advancing one frame
pub struct Frame<'a> {
    pub input: &'a dyn InputSource,
    pub audio: &'a mut dyn Audio,
    pub rng: &'a mut Pcg32,
    pub settings: &'a Settings,
    /// Progress of the current run. Replaced when a new game starts.
    pub progress: &'a mut GameData,
}

/// Read-only context for drawing a screen
pub struct View<'a> {
    pub touch_enabled: bool,
    pub progress: &'a GameData,
    pub settings: &'a Settings,
}
