//! Viewport walk and per-cell render parameters
//!
//! Nothing here draws; the gameplay layer turns [`TileSprite`]s into blits.

use glam::IVec2;

use super::grid::TileGrid;
use super::tile::SpriteCell;
use crate::consts::{CHAR_SIZE, FIELD_HEIGHT, FIELD_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frames each animation row stays on screen
pub const ANIMATION_CADENCE: u32 = 10;
/// Number of animation rows on the tile sheet
pub const ANIMATION_ROWS: u32 = 4;

/// Screen placement of the field relative to the tile walk
const GRAPHIC_OFFSET: IVec2 = IVec2::new(-16 - 16 * 2, 8 - 16 * 2);

/// Sheet row used by non-item tiles at clock value `timer`
#[inline]
pub fn animation_row(timer: u32) -> i32 {
    ((timer / ANIMATION_CADENCE) % ANIMATION_ROWS) as i32
}

/// Render parameters for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSprite {
    /// Grid coordinate
    pub cell: (usize, usize),
    /// Top-left screen position in pixels
    pub dest: IVec2,
    /// Top-left position on the tile sheet in pixels
    pub src: IVec2,
}

/// Grid cells overlapping a camera positioned at `view` (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    view: IVec2,
}

impl ViewWindow {
    /// Tiles walked either side of the camera, two tiles of margin included
    pub const HALF_COLS: i32 = SCREEN_WIDTH / CHAR_SIZE / 2 + 2;
    pub const HALF_ROWS: i32 = SCREEN_HEIGHT / CHAR_SIZE / 2 + 2;

    pub fn new(view: IVec2) -> Self {
        Self { view }
    }

    /// In-bounds cells with their screen positions, column-major
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), IVec2)> {
        let base = self.view.div_euclid(IVec2::splat(CHAR_SIZE));
        let scroll = IVec2::splat(CHAR_SIZE) - self.view.rem_euclid(IVec2::splat(CHAR_SIZE));
        let centre = IVec2::new(12, 8);
        let screen_pad = IVec2::new((SCREEN_WIDTH - 320) / 2, (SCREEN_HEIGHT - 240) / 2);

        (-Self::HALF_COLS..Self::HALF_COLS).flat_map(move |xx| {
            (-Self::HALF_ROWS..Self::HALF_ROWS).filter_map(move |yy| {
                let rel = IVec2::new(xx, yy);
                let f = rel + base;
                if f.x < 0 || f.x >= FIELD_WIDTH as i32 || f.y < 0 || f.y >= FIELD_HEIGHT as i32 {
                    return None;
                }
                let dest = (rel + centre) * CHAR_SIZE + scroll + GRAPHIC_OFFSET + screen_pad;
                Some(((f.x as usize, f.y as usize), dest))
            })
        })
    }
}

/// Render parameters for every visible cell around `view`.
///
/// The secret item is left out entirely while `hidden_secret` is set.
pub fn tile_sprites(grid: &TileGrid, view: IVec2, hidden_secret: bool) -> Vec<TileSprite> {
    let anim_row = animation_row(grid.timer());
    ViewWindow::new(view)
        .cells()
        .filter_map(|((x, y), dest)| {
            let kind = grid.get(x, y);
            if hidden_secret && kind.is_secret() {
                return None;
            }
            let (column, row) = match kind.info().sprite {
                SpriteCell::Animated { column } => (column, anim_row),
                SpriteCell::Fixed { column, row } => (column, row),
            };
            Some(TileSprite {
                cell: (x, y),
                dest,
                src: IVec2::new(column, row) * CHAR_SIZE,
            })
        })
        .collect()
}
