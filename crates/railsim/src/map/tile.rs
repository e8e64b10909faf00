use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Index into the flat tile array: `y * size_x + x`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
pub struct TileIndex(pub u32);

impl TileIndex {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Packed per-tile record.
///
/// Only `type_height` and `m1` have a fixed meaning for every tile; the
/// remaining bytes are interpreted according to the tile type (and, for
/// railway tiles, the rail tile type stored in the top bits of `m5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Tile {
    /// High nibble: `TileType`. Low nibble: height.
    pub type_height: u8,
    /// Bits 0..5: owner.
    pub m1: u8,
    pub m2: u16,
    pub m3: u8,
    pub m4: u8,
    pub m5: u8,
}

/// Tile class stored in the high nibble of `Tile::type_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    Clear = 0,
    Railway = 1,
    Road = 2,
    House = 3,
    Trees = 4,
    Station = 5,
    Water = 6,
    Void = 7,
    Industry = 8,
    TunnelBridge = 9,
    Unmovable = 10,
}

impl TileType {
    pub fn from_bits(bits: u8) -> Option<Self> {
        let ty = match bits {
            0 => TileType::Clear,
            1 => TileType::Railway,
            2 => TileType::Road,
            3 => TileType::House,
            4 => TileType::Trees,
            5 => TileType::Station,
            6 => TileType::Water,
            7 => TileType::Void,
            8 => TileType::Industry,
            9 => TileType::TunnelBridge,
            10 => TileType::Unmovable,
            _ => return None,
        };
        Some(ty)
    }
}
