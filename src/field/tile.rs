//! Tile kinds and their lookup tables
//!
//! The textual level encoding, the item classification and the sprite sheet
//! layout are all driven by [`TILE_TABLE`], one row per [`TileKind`] in
//! ordinal order.

use serde::{Deserialize, Serialize};

/// Level alphabet. A character's position is the ordinal of the tile it encodes.
///
/// Position 9 (the item border sentinel) repeats the space, so it is never
/// produced by decoding: the first space wins and maps to [`TileKind::None`].
pub const ALPHABET: &str = " HUB~<>*I PabcdefghijklmnopqrzL@";

/// Number of tile kinds, sentinel and start marker included
pub const TILE_KIND_COUNT: usize = 32;

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    None = 0,
    /// Drawn but not collidable
    HiddenPath,
    /// Collidable but not drawn
    Invisible,
    Block,
    /// One-way platform, can be jumped through from below
    Ledge,
    ConveyorLeft,
    ConveyorRight,
    Spike,
    Slip,
    /// Start of the item band. Never stored in a grid.
    ItemBorder,
    ItemPowerUp,
    ItemFuji,
    ItemBushi,
    ItemApple,
    ItemV,
    ItemTaka,
    ItemShoulder,
    ItemDagger,
    ItemKatakata,
    ItemNasu,
    ItemBonus,
    ItemNurse,
    ItemNazuna,
    ItemGameHell,
    ItemGundam,
    ItemPoed,
    ItemMilestone,
    ItemOneYen,
    ItemTriangle,
    /// The hidden collectible, excluded from the completion count
    ItemOmega,
    ItemLife,
    /// Authoring marker, consumed once when the level starts
    StartPoint,
}

/// Band a tile kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClass {
    Structural,
    Sentinel,
    Item,
    Marker,
}

/// Where a tile's graphic lives on the tile sheet, in 16px cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteCell {
    /// Fixed column, row chosen by the animation clock
    Animated { column: i32 },
    /// Fixed column and row
    Fixed { column: i32, row: i32 },
}

/// One row of the tile table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInfo {
    pub kind: TileKind,
    /// Level character, `None` for kinds that cannot be authored
    pub code: Option<char>,
    pub class: TileClass,
    pub sprite: SpriteCell,
}

const fn structural(kind: TileKind, code: char) -> TileInfo {
    TileInfo {
        kind,
        code: Some(code),
        class: TileClass::Structural,
        sprite: SpriteCell::Animated {
            column: kind as i32,
        },
    }
}

const fn item(kind: TileKind, code: char, slot: i32) -> TileInfo {
    TileInfo {
        kind,
        code: Some(code),
        class: TileClass::Item,
        sprite: SpriteCell::Fixed {
            column: slot % 16,
            row: 4 + slot / 16,
        },
    }
}

/// Tile table, indexed by ordinal
pub const TILE_TABLE: [TileInfo; TILE_KIND_COUNT] = [
    structural(TileKind::None, ' '),
    structural(TileKind::HiddenPath, 'H'),
    structural(TileKind::Invisible, 'U'),
    structural(TileKind::Block, 'B'),
    structural(TileKind::Ledge, '~'),
    structural(TileKind::ConveyorLeft, '<'),
    structural(TileKind::ConveyorRight, '>'),
    structural(TileKind::Spike, '*'),
    structural(TileKind::Slip, 'I'),
    TileInfo {
        kind: TileKind::ItemBorder,
        code: None,
        class: TileClass::Sentinel,
        sprite: SpriteCell::Animated { column: 9 },
    },
    item(TileKind::ItemPowerUp, 'P', 0),
    item(TileKind::ItemFuji, 'a', 1),
    item(TileKind::ItemBushi, 'b', 2),
    item(TileKind::ItemApple, 'c', 3),
    item(TileKind::ItemV, 'd', 4),
    item(TileKind::ItemTaka, 'e', 5),
    item(TileKind::ItemShoulder, 'f', 6),
    item(TileKind::ItemDagger, 'g', 7),
    item(TileKind::ItemKatakata, 'h', 8),
    item(TileKind::ItemNasu, 'i', 9),
    item(TileKind::ItemBonus, 'j', 10),
    item(TileKind::ItemNurse, 'k', 11),
    item(TileKind::ItemNazuna, 'l', 12),
    item(TileKind::ItemGameHell, 'm', 13),
    item(TileKind::ItemGundam, 'n', 14),
    item(TileKind::ItemPoed, 'o', 15),
    item(TileKind::ItemMilestone, 'p', 16),
    item(TileKind::ItemOneYen, 'q', 17),
    item(TileKind::ItemTriangle, 'r', 18),
    item(TileKind::ItemOmega, 'z', 19),
    item(TileKind::ItemLife, 'L', 20),
    TileInfo {
        kind: TileKind::StartPoint,
        code: Some('@'),
        class: TileClass::Marker,
        sprite: SpriteCell::Animated { column: 31 },
    },
];

impl TileKind {
    /// Every kind in ordinal order
    pub const ALL: [TileKind; TILE_KIND_COUNT] = {
        let mut all = [TileKind::None; TILE_KIND_COUNT];
        let mut i = 0;
        while i < TILE_KIND_COUNT {
            all[i] = TILE_TABLE[i].kind;
            i += 1;
        }
        all
    };

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Decode a level character
    pub fn from_code(ch: char) -> Option<Self> {
        TILE_TABLE
            .iter()
            .find(|info| info.code == Some(ch))
            .map(|info| info.kind)
    }

    #[inline]
    pub fn info(self) -> &'static TileInfo {
        &TILE_TABLE[self as usize]
    }

    /// Level character for this kind, if it can be authored
    pub fn code(self) -> Option<char> {
        self.info().code
    }

    /// Item band by ordinal: at or above [`TileKind::ItemBorder`], start
    /// marker excluded. The sentinel itself is in the band.
    #[inline]
    pub fn is_item(self) -> bool {
        self.ordinal() >= TileKind::ItemBorder.ordinal() && self != TileKind::StartPoint
    }

    /// An item that can actually be picked up, the sentinel excluded
    #[inline]
    pub fn is_collectible(self) -> bool {
        self.info().class == TileClass::Item
    }

    /// The hidden collectible
    #[inline]
    pub fn is_secret(self) -> bool {
        self == TileKind::ItemOmega
    }

    /// Counts toward the number of collected items shown on the result screen
    pub fn counts_for_completion(self) -> bool {
        self.is_collectible() && !matches!(self, TileKind::ItemOmega | TileKind::ItemLife)
    }
}
