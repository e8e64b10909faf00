use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::bitmath::Bits;
use crate::config::{
    DEFAULT_MAP_SIZE_BITS_X, DEFAULT_MAP_SIZE_BITS_Y, MAX_MAP_SIZE_BITS, MIN_MAP_SIZE_BITS,
};

use super::direction::{DiagDirection, Owner};
use super::tile::{Tile, TileIndex, TileType};

/// The world: a contiguous arena of packed tile records.
///
/// Both edges are powers of two so an index splits into x/y with a shift and
/// a mask. Tiles are addressed by `TileIndex`; there is no per-tile allocation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct TileMap {
    log_x: u32,
    log_y: u32,
    tiles: Vec<Tile>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_SIZE_BITS_X, DEFAULT_MAP_SIZE_BITS_Y)
    }
}

impl TileMap {
    /// Create a map of `2^log_x` by `2^log_y` clear tiles owned by nobody.
    pub fn new(log_x: u32, log_y: u32) -> Self {
        assert!(
            (MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS).contains(&log_x)
                && (MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS).contains(&log_y),
            "map size 2^{log_x} x 2^{log_y} out of range"
        );
        let mut blank = Tile::default();
        blank.m1.sb(0, Owner::FIELD_WIDTH, Owner::NONE.0);
        Self {
            log_x,
            log_y,
            tiles: vec![blank; 1usize << (log_x + log_y)],
        }
    }

    /// True when the dimensions are in range and match the tile count.
    /// Decoded maps are checked with this before use.
    pub fn is_consistent(&self) -> bool {
        let range = MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS;
        range.contains(&self.log_x)
            && range.contains(&self.log_y)
            && self.tiles.len() == 1usize << (self.log_x + self.log_y)
    }

    #[inline]
    pub fn size_x(&self) -> u32 {
        1 << self.log_x
    }

    #[inline]
    pub fn size_y(&self) -> u32 {
        1 << self.log_y
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn tile_xy(&self, x: u32, y: u32) -> TileIndex {
        assert!(
            x < self.size_x() && y < self.size_y(),
            "tile ({x}, {y}) outside map"
        );
        TileIndex((y << self.log_x) + x)
    }

    #[inline]
    pub fn tile_x(&self, t: TileIndex) -> u32 {
        t.0 & (self.size_x() - 1)
    }

    #[inline]
    pub fn tile_y(&self, t: TileIndex) -> u32 {
        t.0 >> self.log_x
    }

    #[inline]
    pub fn is_valid_tile(&self, t: TileIndex) -> bool {
        t.as_usize() < self.tiles.len()
    }

    #[inline]
    pub fn tile(&self, t: TileIndex) -> &Tile {
        assert!(self.is_valid_tile(t), "{t:?} outside map");
        &self.tiles[t.as_usize()]
    }

    #[inline]
    pub fn tile_mut(&mut self, t: TileIndex) -> &mut Tile {
        assert!(self.is_valid_tile(t), "{t:?} outside map");
        &mut self.tiles[t.as_usize()]
    }

    pub fn indices(&self) -> impl Iterator<Item = TileIndex> {
        (0..self.tiles.len() as u32).map(TileIndex)
    }

    /// Neighbour across `dir`, or `None` at the map edge.
    pub fn add_diag_dir(&self, t: TileIndex, dir: DiagDirection) -> Option<TileIndex> {
        let (dx, dy) = dir.offset();
        let x = self.tile_x(t).checked_add_signed(dx)?;
        let y = self.tile_y(t).checked_add_signed(dy)?;
        (x < self.size_x() && y < self.size_y()).then(|| self.tile_xy(x, y))
    }

    // -----------------------------------------------------------------------
    // Common fields
    // -----------------------------------------------------------------------

    pub fn tile_type(&self, t: TileIndex) -> TileType {
        let bits = self.tile(t).type_height.gb(4, 4);
        TileType::from_bits(bits)
            .unwrap_or_else(|| panic!("{t:?} has corrupt tile type {bits}"))
    }

    pub fn set_tile_type(&mut self, t: TileIndex, ty: TileType) {
        self.tile_mut(t).type_height.sb(4, 4, ty as u8);
    }

    #[inline]
    pub fn is_tile_type(&self, t: TileIndex, ty: TileType) -> bool {
        self.tile(t).type_height.gb(4, 4) == ty as u8
    }

    pub fn tile_height(&self, t: TileIndex) -> u8 {
        self.tile(t).type_height.gb(0, 4)
    }

    pub fn set_tile_height(&mut self, t: TileIndex, height: u8) {
        assert!(height < 16, "tile height {height} does not fit in 4 bits");
        self.tile_mut(t).type_height.sb(0, 4, height);
    }

    pub fn tile_owner(&self, t: TileIndex) -> Owner {
        assert!(
            !self.is_tile_type(t, TileType::House) && !self.is_tile_type(t, TileType::Industry),
            "{t:?}: houses and industries store no owner"
        );
        Owner(self.tile(t).m1.gb(0, Owner::FIELD_WIDTH))
    }

    pub fn set_tile_owner(&mut self, t: TileIndex, owner: Owner) {
        assert!(
            !self.is_tile_type(t, TileType::House) && !self.is_tile_type(t, TileType::Industry),
            "{t:?}: houses and industries store no owner"
        );
        assert!(
            owner.0 < 1 << Owner::FIELD_WIDTH,
            "{owner:?} does not fit in {} bits",
            Owner::FIELD_WIDTH
        );
        self.tile_mut(t).m1.sb(0, Owner::FIELD_WIDTH, owner.0);
    }

    /// Reset a tile to clear land owned by nobody, keeping its height.
    pub fn make_clear(&mut self, t: TileIndex) {
        let height = self.tile_height(t);
        *self.tile_mut(t) = Tile::default();
        self.set_tile_height(t, height);
        self.set_tile_owner(t, Owner::NONE);
    }
}
