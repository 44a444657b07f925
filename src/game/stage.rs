//! Built-in gameplay: a probe walking the tile grid
//!
//! Stands in for full player physics. The probe moves a fixed step per frame
//! in the held directions, is stopped by walls, and collects any gettable
//! item it lands on. The run ends once every counted item is collected.

use glam::IVec2;

use super::{Frame, Gameplay, Signal, View};
use crate::audio::{SoundEffect, Track};
use crate::consts::{CHAR_SIZE, FIELD_HEIGHT, FIELD_WIDTH};
use crate::error::Result;
use crate::field::{TileGrid, TileKind, tile_sprites};
use crate::input::Key;
use crate::render::{Blit, Renderer, SpriteSheet};

/// Pixels moved per frame per held direction
pub const PROBE_STEP: i32 = 2;

#[derive(Debug, Clone)]
pub struct Stage {
    grid: TileGrid,
    /// Probe position in pixels
    pos: IVec2,
    /// Counted items still on the grid
    remaining: usize,
    /// Probe was pushing into a spike last frame
    on_spike: bool,
    /// Stage theme has been started
    music_started: bool,
    signal: Signal,
}

impl Stage {
    /// Decode `level` and place the probe on its start point.
    ///
    /// # Panics
    /// On malformed level data or a level without a start point.
    pub fn new(level: &str) -> Self {
        Self::from_grid(TileGrid::decode(level))
    }

    pub fn from_grid(mut grid: TileGrid) -> Self {
        let pos = grid.take_start_point();
        let remaining = grid
            .items()
            .filter(|(_, _, kind)| kind.counts_for_completion())
            .count();
        log::info!("Stage start at {pos}, {remaining} items to collect");
        Self {
            grid,
            pos,
            remaining,
            on_spike: false,
            music_started: false,
            signal: Signal::None,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn position(&self) -> IVec2 {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn cell_of(pos: IVec2) -> (usize, usize) {
        let c = pos / CHAR_SIZE;
        (c.x as usize, c.y as usize)
    }

    fn clamp_to_field(pos: IVec2) -> IVec2 {
        pos.clamp(
            IVec2::ZERO,
            IVec2::new(
                FIELD_WIDTH as i32 * CHAR_SIZE - 1,
                FIELD_HEIGHT as i32 * CHAR_SIZE - 1,
            ),
        )
    }

    /// Move the probe; returns the effect to play, if any
    fn step(&mut self, frame: &mut Frame) -> Option<SoundEffect> {
        let input = frame.input;
        let mut dir = IVec2::ZERO;
        if input.held(Key::Left) {
            dir.x -= 1;
        }
        if input.held(Key::Right) {
            dir.x += 1;
        }
        if input.held(Key::Up) {
            dir.y -= 1;
        }
        if input.held(Key::Down) {
            dir.y += 1;
        }

        let next = Self::clamp_to_field(self.pos + dir * PROBE_STEP);
        let (nx, ny) = Self::cell_of(next);
        let mut effect = None;
        if self.grid.is_wall(nx, ny) {
            let spike = self.grid.is_spike(nx, ny);
            if spike && !self.on_spike {
                effect = Some(SoundEffect::Damage);
            }
            self.on_spike = spike;
        } else {
            self.pos = next;
            self.on_spike = false;
        }

        let (x, y) = Self::cell_of(self.pos);
        if self
            .grid
            .is_item_gettable(x, y, frame.progress.is_hidden_secret())
        {
            let kind = self.grid.get(x, y);
            self.grid.erase(x, y);
            frame.progress.collect(kind);
            if kind.counts_for_completion() {
                self.remaining = self.remaining.saturating_sub(1);
            }
            log::debug!("Collected {kind:?} at ({x}, {y}), {} left", self.remaining);
            effect = Some(match kind {
                TileKind::ItemLife => SoundEffect::Heal,
                TileKind::ItemOmega => SoundEffect::ItemGet2,
                _ => SoundEffect::ItemGet,
            });
        }
        effect
    }
}

impl Gameplay for Stage {
    fn advance(&mut self, frame: &mut Frame) -> Result<Signal> {
        self.grid.update();
        frame.progress.tick();

        let effect = self.step(frame);
        if self.remaining == 0 && self.signal.is_none() {
            self.signal = Signal::Ending;
            log::info!("All items collected");
        }

        if !self.music_started {
            self.music_started = true;
            frame.audio.resume_track(Track::Stage)?;
        }
        if let Some(effect) = effect {
            frame.audio.play_effect(effect)?;
        }
        Ok(self.signal)
    }

    fn render(&self, view: &View, renderer: &mut dyn Renderer) {
        let hidden = view.progress.is_hidden_secret();
        for sprite in tile_sprites(&self.grid, self.pos, hidden) {
            renderer.draw(Blit::new(
                SpriteSheet::Tiles,
                sprite.dest,
                sprite.src,
                IVec2::splat(CHAR_SIZE),
            ));
        }
    }
}
