//! Ending: staff roll followed by the result panel

use glam::IVec2;

use super::opening::scroll_finished;
use super::{Frame, SecretVariant, Signal, View};
use crate::consts::{FAST_FORWARD_STEP, INPUT_GUARD_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Result;
use crate::render::{Blit, Renderer, SpriteSheet};

/// Height of the staff roll in pixels
pub const ENDING_SCROLL_LEN: i32 = 1088;
/// Timer units per scrolled pixel
pub const ENDING_SCROLL_SPEED: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndingPhase {
    #[default]
    StaffRoll,
    Result,
}

/// Music command produced by the result fade on one frame
enum Fade {
    Volume(f32),
    Stop,
}

#[derive(Debug, Clone, Default)]
pub struct EndingScreen {
    signal: Signal,
    timer: u32,
    /// Frames into the music fade, result phase only
    fade_timer: u32,
    phase: EndingPhase,
}

impl EndingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn phase(&self) -> EndingPhase {
        self.phase
    }

    pub fn fade_timer(&self) -> u32 {
        self.fade_timer
    }

    pub fn advance(&mut self, frame: &mut Frame) -> Result<()> {
        self.timer += 1;
        match self.phase {
            EndingPhase::StaffRoll => {
                if frame.input.fast_forward() {
                    self.timer += FAST_FORWARD_STEP;
                }
                if scroll_finished(self.timer, ENDING_SCROLL_LEN, ENDING_SCROLL_SPEED) {
                    self.timer = 0;
                    self.phase = EndingPhase::Result;
                    log::debug!("Staff roll finished");
                }
                Ok(())
            }
            EndingPhase::Result => {
                let fade = self.advance_fade(frame.settings.fade_frames());

                if self.signal.is_none()
                    && frame.input.confirm_pressed()
                    && self.timer > INPUT_GUARD_FRAMES
                {
                    self.signal = if frame.progress.has_secret_item() {
                        if frame.progress.is_lunker() {
                            Signal::Secret(SecretVariant::Two)
                        } else {
                            Signal::Secret(SecretVariant::One)
                        }
                    } else {
                        Signal::Title
                    };
                }

                match fade {
                    Some(Fade::Volume(v)) => frame.audio.set_volume(v),
                    Some(Fade::Stop) => frame.audio.pause_all(),
                    None => Ok(()),
                }
            }
        }
    }

    fn advance_fade(&mut self, max: u32) -> Option<Fade> {
        if self.fade_timer >= max {
            return None;
        }
        self.fade_timer += 1;
        if self.fade_timer == max {
            Some(Fade::Stop)
        } else {
            Some(Fade::Volume(1.0 - self.fade_timer as f32 / max as f32))
        }
    }

    pub fn render(&self, view: &View, renderer: &mut dyn Renderer) {
        renderer.draw(Blit::new(
            SpriteSheet::Background,
            IVec2::ZERO,
            IVec2::new(0, 480),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));

        match self.phase {
            EndingPhase::StaffRoll => renderer.draw(Blit::new(
                SpriteSheet::Message,
                IVec2::new(
                    (SCREEN_WIDTH - 256) / 2,
                    SCREEN_HEIGHT - self.timer as i32 / ENDING_SCROLL_SPEED,
                ),
                IVec2::new(0, 576),
                IVec2::new(256, ENDING_SCROLL_LEN),
            )),
            EndingPhase::Result => {
                let top = (SCREEN_HEIGHT - 160) / 2;
                renderer.draw(Blit::new(
                    SpriteSheet::Message,
                    IVec2::new((SCREEN_WIDTH - 256) / 2, top),
                    IVec2::new(0, 1664),
                    IVec2::new(256, 160),
                ));
                renderer.draw_number(
                    view.progress.item_count(),
                    IVec2::new(SCREEN_WIDTH / 2, top + 13 * 5 + 2),
                );
                renderer.draw_number(
                    view.progress.time_in_seconds(view.settings.frame_rate),
                    IVec2::new((SCREEN_WIDTH - 13) / 2, top + 13 * 8 + 2),
                );
            }
        }
    }
}
