//! Secret epilogue screens

use glam::IVec2;

use super::{Frame, SecretVariant, Signal, View};
use crate::consts::{INPUT_GUARD_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::{Blit, Renderer, SpriteSheet};

#[derive(Debug, Clone)]
pub struct SecretScreen {
    signal: Signal,
    timer: u32,
    variant: SecretVariant,
}

impl SecretScreen {
    pub fn new(variant: SecretVariant) -> Self {
        Self {
            signal: Signal::None,
            timer: 0,
            variant,
        }
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn variant(&self) -> SecretVariant {
        self.variant
    }

    pub fn advance(&mut self, frame: &mut Frame) {
        self.timer += 1;
        if frame.input.confirm_pressed() && self.timer > INPUT_GUARD_FRAMES {
            self.signal = Signal::Title;
        }
    }

    pub fn render(&self, _view: &View, renderer: &mut dyn Renderer) {
        let dest = IVec2::new((SCREEN_WIDTH - 256) / 2, (SCREEN_HEIGHT - 96) / 2);
        let size = IVec2::new(256, 96);
        renderer.draw(Blit::new(
            SpriteSheet::Background,
            IVec2::ZERO,
            IVec2::new(0, 240),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));
        if self.variant == SecretVariant::One {
            renderer.draw(Blit::new(
                SpriteSheet::Message,
                dest,
                IVec2::new(0, 2048 - 96 * 2),
                size,
            ));
        }
        renderer.draw(Blit::new(
            SpriteSheet::Message,
            dest,
            IVec2::new(0, 2048 - 96),
            size,
        ));
    }
}
