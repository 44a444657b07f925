//! Gameplay screen
//!
//! Player physics and collision live behind [`Gameplay`]; this screen only
//! draws the backdrop and forwards whatever signal the gameplay reports.

use glam::IVec2;

use super::{Frame, Signal, View};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Result;
use crate::render::{Blit, Renderer, SpriteSheet};

/// A running level: owns the tile grid and whatever moves on it
pub trait Gameplay {
    /// Advance one frame and report the requested transition
    fn advance(&mut self, frame: &mut Frame) -> Result<Signal>;

    fn render(&self, view: &View, renderer: &mut dyn Renderer);
}

pub struct PlayingScreen {
    signal: Signal,
    gameplay: Box<dyn Gameplay>,
}

impl PlayingScreen {
    pub fn new(gameplay: Box<dyn Gameplay>) -> Self {
        Self {
            signal: Signal::None,
            gameplay,
        }
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn advance(&mut self, frame: &mut Frame) -> Result<()> {
        self.signal = self.gameplay.advance(frame)?;
        Ok(())
    }

    pub fn render(&self, view: &View, renderer: &mut dyn Renderer) {
        let bg_row = if view.progress.is_lunker() { 240 } else { 0 };
        renderer.draw(Blit::new(
            SpriteSheet::Background,
            IVec2::ZERO,
            IVec2::new(0, bg_row),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));
        self.gameplay.render(view, renderer);
    }
}

impl std::fmt::Debug for PlayingScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayingScreen")
            .field("signal", &self.signal)
            .finish_non_exhaustive()
    }
}
