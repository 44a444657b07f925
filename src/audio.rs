//! Audio collaborator
//!
//! The state controller only ever issues fire-and-forget commands through the
//! [`Audio`] trait. [`MusicDeck`] implements it on top of a device [`Sink`],
//! tracking the playing background track explicitly.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::Settings;

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// In-game theme
    Stage,
    /// Ending and epilogue theme
    Ending,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Stage, Track::Ending];

    /// Asset file backing this track
    pub fn file_name(self) -> &'static str {
        match self {
            Track::Stage => "ino1.ogg",
            Track::Ending => "ino2.ogg",
        }
    }
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    Damage,
    Heal,
    ItemGet,
    ItemGet2,
    /// Played by physics gameplay; the built-in stage never jumps
    Jump,
}

impl SoundEffect {
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Damage => "damage.wav",
            SoundEffect::Heal => "heal.wav",
            SoundEffect::ItemGet => "itemget.wav",
            SoundEffect::ItemGet2 => "itemget2.wav",
            SoundEffect::Jump => "jump.wav",
        }
    }
}

/// Commands the game core issues on state transitions
pub trait Audio {
    /// Stop whatever is playing and start `track` from the beginning at full volume
    fn play_track(&mut self, track: Track) -> Result<()>;
    /// Stop the other tracks and continue `track` where it was paused, at full volume
    fn resume_track(&mut self, track: Track) -> Result<()>;
    /// Pause every background track
    fn pause_all(&mut self) -> Result<()>;
    /// Set the volume of the playing background track (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<()>;
    fn play_effect(&mut self, effect: SoundEffect) -> Result<()>;
}

/// A playable clip on the audio device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Track(Track),
    Effect(SoundEffect),
}

/// Device-level player operations
pub trait Sink {
    fn play(&mut self, clip: Clip) -> Result<()>;
    fn pause(&mut self, clip: Clip) -> Result<()>;
    fn rewind(&mut self, clip: Clip) -> Result<()>;
    fn set_volume(&mut self, clip: Clip, volume: f32) -> Result<()>;
}

/// Background music and effects over a [`Sink`]
#[derive(Debug)]
pub struct MusicDeck<S: Sink> {
    sink: S,
    current: Option<Track>,
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: Sink> MusicDeck<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            current: None,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Track currently playing, if any
    pub fn current(&self) -> Option<Track> {
        self.current
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn music_gain(&self, volume: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            volume.clamp(0.0, 1.0) * self.master_volume * self.music_volume
        }
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl<S: Sink> Audio for MusicDeck<S> {
    fn play_track(&mut self, track: Track) -> Result<()> {
        self.pause_all()?;
        let clip = Clip::Track(track);
        self.sink.set_volume(clip, self.music_gain(1.0))?;
        self.sink.rewind(clip)?;
        self.sink.play(clip)?;
        self.current = Some(track);
        log::debug!("Playing {}", track.file_name());
        Ok(())
    }

    fn resume_track(&mut self, track: Track) -> Result<()> {
        self.pause_all()?;
        let clip = Clip::Track(track);
        self.sink.set_volume(clip, self.music_gain(1.0))?;
        self.sink.play(clip)?;
        self.current = Some(track);
        log::debug!("Resuming {}", track.file_name());
        Ok(())
    }

    fn pause_all(&mut self) -> Result<()> {
        for track in Track::ALL {
            self.sink.pause(Clip::Track(track))?;
        }
        self.current = None;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        let Some(track) = self.current else {
            return Ok(());
        };
        self.sink
            .set_volume(Clip::Track(track), self.music_gain(volume))
    }

    fn play_effect(&mut self, effect: SoundEffect) -> Result<()> {
        let clip = Clip::Effect(effect);
        self.sink.set_volume(clip, self.sfx_gain())?;
        self.sink.rewind(clip)?;
        self.sink.play(clip)
    }
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn play(&mut self, clip: Clip) -> Result<()> {
        log::info!("audio: play {clip:?}");
        Ok(())
    }

    fn pause(&mut self, clip: Clip) -> Result<()> {
        log::trace!("audio: pause {clip:?}");
        Ok(())
    }

    fn rewind(&mut self, clip: Clip) -> Result<()> {
        log::trace!("audio: rewind {clip:?}");
        Ok(())
    }

    fn set_volume(&mut self, clip: Clip, volume: f32) -> Result<()> {
        log::trace!("audio: volume {clip:?} = {volume:.3}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Play(Clip),
        Pause(Clip),
        Rewind(Clip),
        Volume(Clip, f32),
    }

    /// Device operation a [`RecordingSink`] can be told to fail
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fault {
        Play,
        Pause,
        Rewind,
        Volume,
    }

    #[derive(Default)]
    struct RecordingSink {
        ops: Vec<Op>,
        fail: Option<Fault>,
    }

    impl RecordingSink {
        fn failing(fault: Fault) -> Self {
            Self {
                fail: Some(fault),
                ..Default::default()
            }
        }

        fn check(&self, fault: Fault, clip: Clip) -> Result<()> {
            if self.fail != Some(fault) {
                return Ok(());
            }
            let msg = "device lost".to_string();
            Err(match (clip, fault) {
                (Clip::Effect(effect), _) => AudioError::Effect(effect, msg),
                (Clip::Track(t), Fault::Play) => AudioError::Play(t, msg),
                (Clip::Track(t), Fault::Pause) => AudioError::Pause(t, msg),
                (Clip::Track(t), Fault::Rewind) => AudioError::Rewind(t, msg),
                (Clip::Track(t), Fault::Volume) => AudioError::Volume(t, msg),
            })
        }
    }

    impl Sink for RecordingSink {
        fn play(&mut self, clip: Clip) -> Result<()> {
            self.check(Fault::Play, clip)?;
            self.ops.push(Op::Play(clip));
            Ok(())
        }
        fn pause(&mut self, clip: Clip) -> Result<()> {
            self.check(Fault::Pause, clip)?;
            self.ops.push(Op::Pause(clip));
            Ok(())
        }
        fn rewind(&mut self, clip: Clip) -> Result<()> {
            self.check(Fault::Rewind, clip)?;
            self.ops.push(Op::Rewind(clip));
            Ok(())
        }
        fn set_volume(&mut self, clip: Clip, volume: f32) -> Result<()> {
            self.check(Fault::Volume, clip)?;
            self.ops.push(Op::Volume(clip, volume));
            Ok(())
        }
    }

    fn full_volume() -> Settings {
        Settings {
            master_volume: 1.0,
            music_volume: 1.0,
            sfx_volume: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_play_track_pauses_then_restarts() {
        let mut deck = MusicDeck::new(RecordingSink::default(), &full_volume());
        deck.play_track(Track::Ending).unwrap();

        let ending = Clip::Track(Track::Ending);
        assert_eq!(
            deck.sink().ops,
            vec![
                Op::Pause(Clip::Track(Track::Stage)),
                Op::Pause(ending),
                Op::Volume(ending, 1.0),
                Op::Rewind(ending),
                Op::Play(ending),
            ]
        );
        assert_eq!(deck.current(), Some(Track::Ending));
    }

    #[test]
    fn test_set_volume_targets_current_track_only() {
        let mut deck = MusicDeck::new(RecordingSink::default(), &full_volume());
        deck.set_volume(0.5).unwrap();
        assert!(deck.sink().ops.is_empty());

        deck.play_track(Track::Stage).unwrap();
        deck.set_volume(0.25).unwrap();
        assert_eq!(
            deck.sink().ops.last(),
            Some(&Op::Volume(Clip::Track(Track::Stage), 0.25))
        );
    }

    #[test]
    fn test_pause_all_clears_current() {
        let mut deck = MusicDeck::new(RecordingSink::default(), &full_volume());
        deck.play_track(Track::Stage).unwrap();
        deck.pause_all().unwrap();
        assert_eq!(deck.current(), None);
    }

    #[test]
    fn test_settings_scale_volume() {
        let settings = Settings {
            master_volume: 0.5,
            music_volume: 0.5,
            sfx_volume: 1.0,
            ..Default::default()
        };
        let mut deck = MusicDeck::new(RecordingSink::default(), &settings);
        deck.play_track(Track::Stage).unwrap();
        assert!(
            deck.sink()
                .ops
                .contains(&Op::Volume(Clip::Track(Track::Stage), 0.25))
        );

        deck.set_muted(true);
        deck.play_effect(SoundEffect::Jump).unwrap();
        assert!(
            deck.sink()
                .ops
                .contains(&Op::Volume(Clip::Effect(SoundEffect::Jump), 0.0))
        );
    }

    #[test]
    fn test_device_error_propagates() {
        let mut deck = MusicDeck::new(RecordingSink::failing(Fault::Pause), &full_volume());
        let err = deck.play_track(Track::Stage).unwrap_err();
        assert!(matches!(err, AudioError::Pause(Track::Stage, _)));
        assert_eq!(deck.current(), None);

        let mut deck = MusicDeck::new(RecordingSink::failing(Fault::Rewind), &full_volume());
        let err = deck.play_track(Track::Ending).unwrap_err();
        assert!(matches!(err, AudioError::Rewind(Track::Ending, _)));
        assert_eq!(deck.current(), None);

        let mut deck = MusicDeck::new(RecordingSink::failing(Fault::Play), &full_volume());
        let err = deck.resume_track(Track::Stage).unwrap_err();
        assert!(matches!(err, AudioError::Play(Track::Stage, _)));
        assert_eq!(deck.current(), None);
    }

    #[test]
    fn test_fade_and_effect_errors_name_the_clip() {
        let mut deck = MusicDeck::new(RecordingSink::default(), &full_volume());
        deck.play_track(Track::Ending).unwrap();
        deck.sink.fail = Some(Fault::Volume);
        let err = deck.set_volume(0.5).unwrap_err();
        assert!(matches!(err, AudioError::Volume(Track::Ending, _)));

        let err = deck.play_effect(SoundEffect::Damage).unwrap_err();
        assert!(matches!(err, AudioError::Effect(SoundEffect::Damage, _)));
    }

    #[test]
    fn test_resume_track_keeps_position() {
        let mut deck = MusicDeck::new(RecordingSink::default(), &full_volume());
        deck.play_track(Track::Ending).unwrap();
        deck.sink.ops.clear();

        deck.resume_track(Track::Stage).unwrap();
        let stage = Clip::Track(Track::Stage);
        assert_eq!(
            deck.sink().ops,
            vec![
                Op::Pause(stage),
                Op::Pause(Clip::Track(Track::Ending)),
                Op::Volume(stage, 1.0),
                Op::Play(stage),
            ]
        );
        assert!(!deck.sink().ops.contains(&Op::Rewind(stage)));
        assert_eq!(deck.current(), Some(Track::Stage));
    }
}
