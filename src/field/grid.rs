//! Tile grid storage, decoding and queries

use glam::IVec2;

use super::tile::TileKind;
use crate::consts::{CHAR_SIZE, FIELD_HEIGHT, FIELD_WIDTH};
use crate::error::LevelError;

/// Fixed-size level grid plus its animation clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<TileKind>,
    /// Frames since the grid was created. Only read modulo the animation period.
    timer: u32,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: vec![TileKind::None; FIELD_WIDTH * FIELD_HEIGHT],
            timer: 0,
        }
    }

    /// Decode a built-in level.
    ///
    /// # Panics
    /// Level data ships with the game, so an unknown character or a row/column
    /// outside the 128x128 field is an authoring bug and panics.
    pub fn decode(text: &str) -> Self {
        match Self::try_decode(text) {
            Ok(grid) => grid,
            Err(e) => panic!("malformed level data: {e}"),
        }
    }

    /// Decode level text, reporting malformed data instead of panicking.
    ///
    /// One line per row; each character is looked up in [`super::ALPHABET`].
    pub fn try_decode(text: &str) -> Result<Self, LevelError> {
        let mut grid = Self::new();
        let rows: Vec<&str> = text.lines().collect();
        if rows.len() > FIELD_HEIGHT {
            return Err(LevelError::TooManyRows {
                rows: rows.len(),
                max: FIELD_HEIGHT,
            });
        }

        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len > FIELD_WIDTH {
                return Err(LevelError::RowTooLong {
                    row,
                    len,
                    max: FIELD_WIDTH,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind =
                    TileKind::from_code(ch).ok_or(LevelError::UnknownTile { ch, col, row })?;
                grid.cells[row * FIELD_WIDTH + col] = kind;
            }
        }

        log::debug!("Decoded level: {} rows", rows.len());
        Ok(grid)
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        assert!(
            x < FIELD_WIDTH && y < FIELD_HEIGHT,
            "grid coordinate ({x}, {y}) out of bounds"
        );
        y * FIELD_WIDTH + x
    }

    /// Cell at grid coordinate `(x, y)`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> TileKind {
        self.cells[Self::index(x, y)]
    }

    /// Blocks movement from every side
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        let kind = self.get(x, y);
        !matches!(kind, TileKind::None | TileKind::HiddenPath | TileKind::Ledge) && !kind.is_item()
    }

    /// Can be stood on. Unlike [`Self::is_wall`] this includes ledges.
    pub fn is_ridable(&self, x: usize, y: usize) -> bool {
        let kind = self.get(x, y);
        !matches!(kind, TileKind::None | TileKind::HiddenPath) && !kind.is_item()
    }

    pub fn is_spike(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == TileKind::Spike
    }

    pub fn is_item(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_item()
    }

    /// Item that can be picked up right now. The secret item is withheld
    /// while `hidden_secret` is set.
    pub fn is_item_gettable(&self, x: usize, y: usize, hidden_secret: bool) -> bool {
        let kind = self.get(x, y);
        if !kind.is_item() {
            return false;
        }
        !(kind.is_secret() && hidden_secret)
    }

    /// Consume the first start marker in row-major order and return its
    /// position in pixels.
    ///
    /// # Panics
    /// A level without a start marker is an authoring bug.
    pub fn take_start_point(&mut self) -> IVec2 {
        let found = (0..FIELD_HEIGHT)
            .flat_map(|y| (0..FIELD_WIDTH).map(move |x| (x, y)))
            .find(|&(x, y)| self.get(x, y) == TileKind::StartPoint);

        let Some((x, y)) = found else {
            panic!("level has no start point");
        };
        self.erase(x, y);
        let pos = IVec2::new(x as i32 * CHAR_SIZE, y as i32 * CHAR_SIZE);
        log::debug!("Start point consumed at tile ({x}, {y})");
        pos
    }

    /// Clear a cell (item pickup, start marker consumption)
    pub fn erase(&mut self, x: usize, y: usize) {
        self.cells[Self::index(x, y)] = TileKind::None;
    }

    /// Advance the animation clock by one frame
    pub fn update(&mut self) {
        self.timer = self.timer.wrapping_add(1);
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// All item cells as `(x, y, kind)` in row-major order
    pub fn items(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_item())
            .map(|(i, &kind)| (i % FIELD_WIDTH, i / FIELD_WIDTH, kind))
    }
}
