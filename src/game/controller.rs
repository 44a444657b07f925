//! Frame-stepped macro-state controller

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{
    EndingScreen, Frame, GameData, Gameplay, OpeningScreen, PlayingScreen, Screen, ScreenKind,
    SecretScreen, Signal, Stage, TitleScreen, View,
};
use crate::audio::{Audio, Track};
use crate::error::Result;
use crate::input::InputSource;
use crate::render::Renderer;
use crate::settings::Settings;

/// Builds the gameplay for a new Playing screen from the run's progress
pub type GameplayFactory = Box<dyn FnMut(&GameData) -> Box<dyn Gameplay>>;

/// Owns the current screen and the side effects bound to transitions
pub struct GameController<A: Audio> {
    screen: Screen,
    audio: A,
    progress: GameData,
    rng: Pcg32,
    settings: Settings,
    gameplay: GameplayFactory,
    /// Frames ticked so far
    frames: u64,
}

impl<A: Audio> GameController<A> {
    /// Create a controller sitting on the title screen
    pub fn new(audio: A, settings: Settings, gameplay: GameplayFactory) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game controller initialized with seed: {seed}");
        Self {
            screen: Screen::Title(TitleScreen::new()),
            audio,
            progress: GameData::default(),
            rng: Pcg32::seed_from_u64(seed),
            settings,
            gameplay,
            frames: 0,
        }
    }

    /// Controller whose Playing screen runs the built-in [`Stage`] on `level`.
    ///
    /// The level is decoded each time a game starts; it must be well formed.
    pub fn with_level(audio: A, settings: Settings, level: impl Into<String>) -> Self {
        let level = level.into();
        let factory: GameplayFactory =
            Box::new(move |_: &GameData| -> Box<dyn Gameplay> { Box::new(Stage::new(&level)) });
        Self::new(audio, settings, factory)
    }

    pub fn current_state(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn progress(&self) -> &GameData {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut GameData {
        &mut self.progress
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one logical frame.
    ///
    /// Swaps in the screen requested last frame, advances it, and renders it
    /// unless `running_slowly`. An audio failure is reported after the frame's
    /// logic has completed; the transition itself is never rolled back.
    pub fn tick(
        &mut self,
        input: &dyn InputSource,
        renderer: &mut dyn Renderer,
        running_slowly: bool,
    ) -> Result<()> {
        let signal = self.screen.pending_signal();
        let entered = if signal.is_none() {
            Ok(())
        } else {
            self.transition(signal)
        };

        let advanced = {
            let mut frame = Frame {
                input,
                audio: &mut self.audio,
                rng: &mut self.rng,
                settings: &self.settings,
                progress: &mut self.progress,
            };
            self.screen.advance(&mut frame)
        };

        if !running_slowly {
            let view = View {
                touch_enabled: input.touch_enabled(),
                progress: &self.progress,
                settings: &self.settings,
            };
            self.screen.render(&view, renderer);
        }
        self.frames += 1;

        first_fault(entered, advanced)
    }

    /// Replace the current screen and fire the entry side effect
    fn transition(&mut self, signal: Signal) -> Result<()> {
        let from = self.screen.kind();
        self.screen = match signal {
            Signal::None => return Ok(()),
            Signal::Title => Screen::Title(TitleScreen::new()),
            Signal::Opening => Screen::Opening(OpeningScreen::new()),
            Signal::Game => Screen::Playing(PlayingScreen::new((self.gameplay)(&self.progress))),
            Signal::Ending => Screen::Ending(EndingScreen::new()),
            Signal::Secret(variant) => Screen::Secret(SecretScreen::new(variant)),
        };
        log::info!("Screen {from:?} -> {:?}", self.screen.kind());

        match signal {
            Signal::Title => self.audio.pause_all(),
            Signal::Ending | Signal::Secret(_) => self.audio.play_track(Track::Ending),
            Signal::None | Signal::Opening | Signal::Game => Ok(()),
        }
    }
}

/// Keep the transition's audio fault over the screen's, logging both
fn first_fault(entered: Result<()>, advanced: Result<()>) -> Result<()> {
    if let Err(e) = &entered {
        log::warn!("Audio failed on transition: {e}");
    }
    match (entered, advanced) {
        (Err(e), Err(dropped)) => {
            log::warn!("Audio failed while advancing: {dropped}");
            Err(e)
        }
        (entered, advanced) => entered.and(advanced),
    }
}
