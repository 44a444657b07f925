//! The macro-state sum type

use super::{
    EndingPhase, EndingScreen, Frame, OpeningScreen, PlayingScreen, SecretScreen, SecretVariant,
    Signal, TitleScreen, View,
};
use crate::error::Result;
use crate::render::Renderer;

/// Which screen is current, without its private state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Title,
    Opening,
    Playing,
    Ending(EndingPhase),
    Secret(SecretVariant),
}

/// One of the top-level screens, owning its timers and sub-state
#[derive(Debug)]
pub enum Screen {
    Title(TitleScreen),
    Opening(OpeningScreen),
    Playing(PlayingScreen),
    Ending(EndingScreen),
    Secret(SecretScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Title(_) => ScreenKind::Title,
            Screen::Opening(_) => ScreenKind::Opening,
            Screen::Playing(_) => ScreenKind::Playing,
            Screen::Ending(s) => ScreenKind::Ending(s.phase()),
            Screen::Secret(s) => ScreenKind::Secret(s.variant()),
        }
    }

    /// Advance timers and sub-state by one frame
    pub fn advance(&mut self, frame: &mut Frame) -> Result<()> {
        match self {
            Screen::Title(s) => {
                s.advance(frame);
                Ok(())
            }
            Screen::Opening(s) => s.advance(frame),
            Screen::Playing(s) => s.advance(frame),
            Screen::Ending(s) => s.advance(frame),
            Screen::Secret(s) => {
                s.advance(frame);
                Ok(())
            }
        }
    }

    /// Issue draw calls. Never mutates the screen.
    pub fn render(&self, view: &View, renderer: &mut dyn Renderer) {
        match self {
            Screen::Title(s) => s.render(view, renderer),
            Screen::Opening(s) => s.render(view, renderer),
            Screen::Playing(s) => s.render(view, renderer),
            Screen::Ending(s) => s.render(view, renderer),
            Screen::Secret(s) => s.render(view, renderer),
        }
    }

    /// Transition requested by this screen, [`Signal::None`] by default
    pub fn pending_signal(&self) -> Signal {
        match self {
            Screen::Title(s) => s.signal(),
            Screen::Opening(s) => s.signal(),
            Screen::Playing(s) => s.signal(),
            Screen::Ending(s) => s.signal(),
            Screen::Secret(s) => s.signal(),
        }
    }
}
