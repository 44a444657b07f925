//! Opening cutscene: a scrolling story text

use glam::IVec2;

use super::{Frame, Signal, View};
use crate::consts::{FAST_FORWARD_STEP, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Result;
use crate::render::{Blit, Renderer, SpriteSheet};

/// Height of the scrolled text in pixels
pub const OPENING_SCROLL_LEN: i32 = 416;
/// Timer units per scrolled pixel
pub const OPENING_SCROLL_SPEED: i32 = 3;

/// True once a text of `len` pixels scrolled at `speed` has left the screen
pub(crate) fn scroll_finished(timer: u32, len: i32, speed: i32) -> bool {
    i64::from(timer) > i64::from(speed) * i64::from(len + SCREEN_HEIGHT)
}

#[derive(Debug, Clone, Default)]
pub struct OpeningScreen {
    signal: Signal,
    timer: u32,
}

impl OpeningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn advance(&mut self, frame: &mut Frame) -> Result<()> {
        self.timer += 1;
        if frame.input.fast_forward() {
            self.timer += FAST_FORWARD_STEP;
        }

        if self.signal.is_none()
            && scroll_finished(self.timer, OPENING_SCROLL_LEN, OPENING_SCROLL_SPEED)
        {
            self.signal = Signal::Game;
            frame.audio.pause_all()?;
        }
        Ok(())
    }

    pub fn render(&self, _view: &View, renderer: &mut dyn Renderer) {
        renderer.draw(Blit::new(
            SpriteSheet::Background,
            IVec2::ZERO,
            IVec2::new(0, 480),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));
        renderer.draw(Blit::new(
            SpriteSheet::Message,
            IVec2::new(
                (SCREEN_WIDTH - 256) / 2,
                SCREEN_HEIGHT - self.timer as i32 / OPENING_SCROLL_SPEED,
            ),
            IVec2::new(0, 160),
            IVec2::new(256, OPENING_SCROLL_LEN),
        ));
    }
}
