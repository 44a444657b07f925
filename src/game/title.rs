//! Title screen

use glam::IVec2;
use rand::Rng;

use super::{Frame, GameData, GameMode, Signal, View};
use crate::consts::{INPUT_GUARD_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::Key;
use crate::render::{Blit, Renderer, SpriteSheet};

/// Directional presses that toggle lunker mode
pub const LUNKER_SEQUENCE: [Key; 8] = [
    Key::Left,
    Key::Left,
    Key::Left,
    Key::Right,
    Key::Right,
    Key::Right,
    Key::Left,
    Key::Right,
];

/// Frames between prompt shake updates
const SHAKE_INTERVAL: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct TitleScreen {
    signal: Signal,
    timer: u32,
    /// Prompt shake offset in pixels
    shake: IVec2,
    lunker_mode: bool,
    /// Progress through [`LUNKER_SEQUENCE`]
    lunker_command: usize,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn lunker_mode(&self) -> bool {
        self.lunker_mode
    }

    pub fn shake(&self) -> IVec2 {
        self.shake
    }

    pub fn advance(&mut self, frame: &mut Frame) {
        self.timer += 1;
        if self.timer % SHAKE_INTERVAL == 0 {
            self.shake = if frame.settings.reduced_motion {
                IVec2::ZERO
            } else {
                IVec2::new(
                    frame.rng.random_range(-3..=1),
                    frame.rng.random_range(-3..=1),
                )
            };
        }

        if frame.input.confirm_pressed() && self.timer > INPUT_GUARD_FRAMES {
            let mode = if self.lunker_mode {
                GameMode::Lunker
            } else {
                GameMode::Normal
            };
            *frame.progress = GameData::new(mode);
            self.signal = Signal::Opening;
            log::info!("New game requested ({mode:?})");
        }

        self.update_lunker_command(frame);
    }

    fn update_lunker_command(&mut self, frame: &Frame) {
        let expected = LUNKER_SEQUENCE[self.lunker_command];
        if frame.input.just_pressed(expected) {
            self.lunker_command += 1;
        } else if Key::ALL
            .into_iter()
            .any(|k| k.is_direction() && k != expected && frame.input.just_pressed(k))
        {
            self.lunker_command = 0;
        }

        if self.lunker_command == LUNKER_SEQUENCE.len() {
            self.lunker_command = 0;
            self.lunker_mode = !self.lunker_mode;
            log::info!("Lunker mode {}", if self.lunker_mode { "on" } else { "off" });
        }
    }

    pub fn render(&self, view: &View, renderer: &mut dyn Renderer) {
        let (bg_row, prompt_row) = if self.lunker_mode {
            (240, 64)
        } else if view.touch_enabled {
            (0, 64 - 16)
        } else {
            (0, 64 + 16)
        };
        renderer.draw(Blit::new(
            SpriteSheet::Background,
            IVec2::ZERO,
            IVec2::new(0, bg_row),
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));
        renderer.draw(Blit::new(
            SpriteSheet::Message,
            IVec2::new((SCREEN_WIDTH - 256) / 2, 160 + (SCREEN_HEIGHT - 240) / 2) + self.shake,
            IVec2::new(0, prompt_row),
            IVec2::new(256, 16),
        ));
        renderer.draw(Blit::new(
            SpriteSheet::Message,
            IVec2::new((SCREEN_WIDTH - 256) / 2, 32 + (SCREEN_HEIGHT - 240) / 2),
            IVec2::ZERO,
            IVec2::new(256, 48),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Audio, SoundEffect, Track};
    use crate::error::Result;
    use crate::input::InputState;
    use crate::render::RecordingRenderer;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Silent;

    impl Audio for Silent {
        fn play_track(&mut self, _: Track) -> Result<()> {
            Ok(())
        }
        fn resume_track(&mut self, _: Track) -> Result<()> {
            Ok(())
        }
        fn pause_all(&mut self) -> Result<()> {
            Ok(())
        }
        fn set_volume(&mut self, _: f32) -> Result<()> {
            Ok(())
        }
        fn play_effect(&mut self, _: SoundEffect) -> Result<()> {
            Ok(())
        }
    }

    struct Harness {
        input: InputState,
        rng: Pcg32,
        settings: Settings,
        progress: GameData,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                input: InputState::new(),
                rng: Pcg32::seed_from_u64(1),
                settings: Settings::default(),
                progress: GameData::default(),
            }
        }

        fn step(&mut self, title: &mut TitleScreen, keys: &[Key]) {
            self.input.update(keys, false);
            let mut audio = Silent;
            let mut frame = Frame {
                input: &self.input,
                audio: &mut audio,
                rng: &mut self.rng,
                settings: &self.settings,
                progress: &mut self.progress,
            };
            title.advance(&mut frame);
        }
    }

    #[test]
    fn test_confirm_ignored_during_guard_frames() {
        let mut h = Harness::new();
        let mut title = TitleScreen::new();
        for _ in 0..5 {
            h.step(&mut title, &[Key::Enter]);
            h.step(&mut title, &[]);
        }
        // Ten frames in, but the presses landed on frames 1, 3, 5, 7, 9
        assert_eq!(title.signal(), Signal::Opening);

        let mut title = TitleScreen::new();
        let mut h = Harness::new();
        for _ in 0..5 {
            h.step(&mut title, &[Key::Space]);
        }
        assert_eq!(title.signal(), Signal::None);
    }

    #[test]
    fn test_confirm_after_guard_starts_new_game() {
        let mut h = Harness::new();
        let mut title = TitleScreen::new();
        for _ in 0..5 {
            h.step(&mut title, &[]);
        }
        h.step(&mut title, &[Key::Space]);
        assert_eq!(title.signal(), Signal::Opening);
        assert_eq!(h.progress.mode(), GameMode::Normal);
    }

    fn enter_sequence(h: &mut Harness, title: &mut TitleScreen, seq: &[Key]) {
        for &key in seq {
            h.step(title, &[key]);
            h.step(title, &[]);
        }
    }

    #[test]
    fn test_lunker_sequence_toggles_mode() {
        let mut h = Harness::new();
        let mut title = TitleScreen::new();
        enter_sequence(&mut h, &mut title, &LUNKER_SEQUENCE);
        assert!(title.lunker_mode());

        for _ in 0..3 {
            h.step(&mut title, &[]);
        }
        h.step(&mut title, &[Key::Enter]);
        assert_eq!(title.signal(), Signal::Opening);
        assert_eq!(h.progress.mode(), GameMode::Lunker);

        enter_sequence(&mut h, &mut title, &LUNKER_SEQUENCE);
        assert!(!title.lunker_mode());
    }

    #[test]
    fn test_wrong_direction_resets_sequence() {
        let mut h = Harness::new();
        let mut title = TitleScreen::new();
        enter_sequence(&mut h, &mut title, &LUNKER_SEQUENCE[..5]);
        enter_sequence(&mut h, &mut title, &[Key::Up]);
        enter_sequence(&mut h, &mut title, &LUNKER_SEQUENCE[5..]);
        assert!(!title.lunker_mode());
    }

    #[test]
    fn test_shake_range_and_reduced_motion() {
        let mut h = Harness::new();
        let mut title = TitleScreen::new();
        for _ in 0..200 {
            h.step(&mut title, &[]);
            let s = title.shake();
            assert!((-3..=1).contains(&s.x) && (-3..=1).contains(&s.y));
        }

        h.settings.reduced_motion = true;
        for _ in 0..5 {
            h.step(&mut title, &[]);
        }
        assert_eq!(title.shake(), IVec2::ZERO);
    }

    #[test]
    fn test_render_prompt_for_touch() {
        let progress = GameData::default();
        let settings = Settings::default();
        let view = View {
            touch_enabled: true,
            progress: &progress,
            settings: &settings,
        };
        let mut renderer = RecordingRenderer::new();
        TitleScreen::new().render(&view, &mut renderer);

        let msgs: Vec<_> = renderer.blits(SpriteSheet::Message).collect();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].src, IVec2::new(0, 48));
        assert_eq!(msgs[1].size, IVec2::new(256, 48));
    }
}
