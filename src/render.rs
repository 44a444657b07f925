//! Renderer call contract
//!
//! Game states describe what to draw as [`Blit`]s; the renderer owns the
//! textures and never reports anything back.

use glam::IVec2;

/// Texture atlases shipped with the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    /// Full-screen backgrounds
    Background,
    /// Title logo, prompts, scroll texts and epilogue panels
    Message,
    /// Field tiles and items
    Tiles,
}

impl SpriteSheet {
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteSheet::Background => "bg.png",
            SpriteSheet::Message => "msg.png",
            SpriteSheet::Tiles => "ino.png",
        }
    }
}

/// Copy a `size` rectangle at `src` on `sheet` to `dest` on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub sheet: SpriteSheet,
    pub dest: IVec2,
    pub src: IVec2,
    pub size: IVec2,
}

impl Blit {
    pub fn new(sheet: SpriteSheet, dest: IVec2, src: IVec2, size: IVec2) -> Self {
        Self {
            sheet,
            dest,
            src,
            size,
        }
    }
}

/// Draw calls issued by the game states
pub trait Renderer {
    fn draw(&mut self, blit: Blit);

    /// Draw a decimal number, right-aligned at `at`
    fn draw_number(&mut self, value: u32, at: IVec2);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Blit(Blit),
    Number { value: u32, at: IVec2 },
}

/// Renderer that keeps the calls of the current frame, for headless runs
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Blits drawn from `sheet`
    pub fn blits(&self, sheet: SpriteSheet) -> impl Iterator<Item = &Blit> {
        self.calls.iter().filter_map(move |call| match call {
            DrawCall::Blit(b) if b.sheet == sheet => Some(b),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, blit: Blit) {
        self.calls.push(DrawCall::Blit(blit));
    }

    fn draw_number(&mut self, value: u32, at: IVec2) {
        self.calls.push(DrawCall::Number { value, at });
    }
}
