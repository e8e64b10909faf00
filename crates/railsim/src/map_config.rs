//! Map creation options.
//!
//! `MapConfig` holds the map dimensions and the game seed. Insert it before
//! adding `RailSimPlugin` to override the defaults; the map and random
//! plugins read it while building.

use bevy::prelude::*;

use crate::config::{DEFAULT_MAP_SIZE_BITS_X, DEFAULT_MAP_SIZE_BITS_Y, DEFAULT_SEED};
use crate::Saveable;

#[derive(Resource, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, bitcode::Encode, bitcode::Decode)]
pub struct MapConfig {
    /// Map width as a power of two.
    pub map_bits_x: u32,
    /// Map height as a power of two.
    pub map_bits_y: u32,
    /// Seed for both random generators.
    pub seed: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_bits_x: DEFAULT_MAP_SIZE_BITS_X,
            map_bits_y: DEFAULT_MAP_SIZE_BITS_Y,
            seed: DEFAULT_SEED,
        }
    }
}

impl Saveable for MapConfig {
    const SAVE_KEY: &'static str = "map_config";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
