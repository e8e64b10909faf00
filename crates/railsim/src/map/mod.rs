//! Tile arena and the fields every tile shares.
//!
//! ## Data model
//! - `Tile`: a packed record (`type_height`, `m1`..`m5`) whose meaning beyond
//!   the type nibble and owner depends on the tile type
//! - `TileIndex`: a plain index into the arena, never a pointer
//! - `TileMap`: resource owning all tiles of the world
//!
//! Type-specific layouts live with their features (see `crate::rail`).
//! The `TileMap` resource is persisted via the `Saveable` extension map.

mod direction;
mod tile;
mod tile_map;


use bevy::prelude::*;

pub use direction::{Axis, DiagDirection, Owner};
pub use tile::{Tile, TileIndex, TileType};
pub use tile_map::TileMap;

use crate::map_config::MapConfig;
use crate::Saveable;

impl Saveable for TileMap {
    const SAVE_KEY: &'static str = "tile_map";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let map: TileMap = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        if map.is_consistent() {
            map
        } else {
            warn!(
                "Saveable {}: map dimensions do not match tile count, falling back to default",
                Self::SAVE_KEY
            );
            TileMap::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapConfig>();
        let config = app.world().resource::<MapConfig>().clone();
        info!(
            "Creating {}x{} tile map",
            1u32 << config.map_bits_x,
            1u32 << config.map_bits_y
        );
        app.insert_resource(TileMap::new(config.map_bits_x, config.map_bits_y));

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<TileMap>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<MapConfig>();
    }
}
