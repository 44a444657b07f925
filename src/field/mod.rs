//! Tile grid engine
//!
//! Decodes textual level data into a fixed 128x128 grid of typed cells and
//! answers the collision/classification queries the player physics needs.
//! Grid coordinates are always in bounds; callers clamp before querying.

pub mod grid;
pub mod tile;
pub mod view;

pub use grid::TileGrid;
pub use tile::{ALPHABET, SpriteCell, TILE_TABLE, TileClass, TileInfo, TileKind};
pub use view::{TileSprite, ViewWindow, animation_row, tile_sprites};
