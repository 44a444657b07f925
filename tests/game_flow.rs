//! Full runs through the public API: title to ending on a tiny level

use inovation::audio::{Clip, MusicDeck, Sink, SoundEffect, Track};
use inovation::error::Result;
use inovation::game::{EndingPhase, GameController, ScreenKind, Signal};
use inovation::input::{InputState, Key};
use inovation::render::{RecordingRenderer, SpriteSheet};
use inovation::settings::Settings;

/// Start point with an apple right next to it
const LEVEL: &str = "@c\nBBB\n";

#[derive(Debug, Default)]
struct Played(Vec<Clip>);

impl Sink for Played {
    fn play(&mut self, clip: Clip) -> Result<()> {
        self.0.push(clip);
        Ok(())
    }
    fn pause(&mut self, _: Clip) -> Result<()> {
        Ok(())
    }
    fn rewind(&mut self, _: Clip) -> Result<()> {
        Ok(())
    }
    fn set_volume(&mut self, _: Clip, _: f32) -> Result<()> {
        Ok(())
    }
}

struct Run {
    game: GameController<MusicDeck<Played>>,
    input: InputState,
    renderer: RecordingRenderer,
}

impl Run {
    fn new() -> Self {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let deck = MusicDeck::new(Played::default(), &settings);
        Self {
            game: GameController::with_level(deck, settings, LEVEL),
            input: InputState::new(),
            renderer: RecordingRenderer::new(),
        }
    }

    fn tick(&mut self, keys: &[Key]) {
        self.input.update(keys, false);
        self.renderer.clear();
        self.game
            .tick(&self.input, &mut self.renderer, false)
            .unwrap();
    }

    /// Tick until the current screen changes, up to `limit` frames
    fn until_change(&mut self, keys: &[Key], limit: u32) -> ScreenKind {
        let start = self.game.current_state();
        for _ in 0..limit {
            self.tick(keys);
            if self.game.current_state() != start {
                break;
            }
        }
        self.game.current_state()
    }

    fn played(&self) -> &[Clip] {
        &self.game.audio().sink().0
    }
}

fn start_game(run: &mut Run) {
    for _ in 0..6 {
        run.tick(&[]);
    }
    run.tick(&[Key::Enter]);
    run.tick(&[]);
    assert_eq!(run.game.current_state(), ScreenKind::Opening);

    // Holding action fast-forwards the scroll
    assert_eq!(run.until_change(&[Key::Space], 200), ScreenKind::Playing);
}

#[test]
fn test_collecting_every_item_reaches_ending() {
    let mut run = Run::new();
    start_game(&mut run);
    assert_eq!(run.played(), &[Clip::Track(Track::Stage)]);
    assert!(run.renderer.blits(SpriteSheet::Tiles).count() > 0);

    assert_eq!(
        run.until_change(&[Key::Right], 20),
        ScreenKind::Ending(EndingPhase::StaffRoll)
    );
    assert_eq!(run.game.progress().item_count(), 1);
    assert_eq!(
        run.played(),
        &[
            Clip::Track(Track::Stage),
            Clip::Effect(SoundEffect::ItemGet),
            Clip::Track(Track::Ending)
        ]
    );
    assert_eq!(run.game.audio().current(), Some(Track::Ending));

    assert_eq!(
        run.until_change(&[Key::Space], 400),
        ScreenKind::Ending(EndingPhase::Result)
    );
    for _ in 0..10 {
        run.tick(&[]);
    }
    run.tick(&[Key::Enter]);
    assert_eq!(run.game.screen().pending_signal(), Signal::Title);
    run.tick(&[]);
    assert_eq!(run.game.current_state(), ScreenKind::Title);
    assert_eq!(run.game.audio().current(), None);
}

#[test]
fn test_walls_stop_the_probe() {
    let mut run = Run::new();
    start_game(&mut run);

    // The block row sits right under the start point
    for _ in 0..30 {
        run.tick(&[Key::Down]);
    }
    assert_eq!(run.game.current_state(), ScreenKind::Playing);
    assert_eq!(run.game.progress().item_count(), 0);
}

#[test]
fn test_time_counts_only_while_playing() {
    let mut run = Run::new();
    start_game(&mut run);
    let before = run.game.progress().time_frames();
    for _ in 0..60 {
        run.tick(&[]);
    }
    assert_eq!(run.game.progress().time_frames(), before + 60);
}

#[test]
fn test_stage_theme_plays_during_gameplay() {
    let mut run = Run::new();
    for _ in 0..6 {
        run.tick(&[]);
    }
    run.tick(&[Key::Enter]);
    assert_eq!(run.until_change(&[], 3000), ScreenKind::Opening);
    assert_eq!(run.until_change(&[], 3000), ScreenKind::Playing);
    assert_eq!(run.game.audio().current(), Some(Track::Stage));

    for _ in 0..120 {
        run.tick(&[]);
    }
    assert_eq!(run.game.audio().current(), Some(Track::Stage));
    assert_eq!(run.played(), &[Clip::Track(Track::Stage)]);
}
