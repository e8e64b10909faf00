use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod bitmath;
pub mod config;
pub mod map;
pub mod map_config;
pub mod rail;
pub mod random;
pub mod vehicle;

// ---------------------------------------------------------------------------
// Saveable trait + registry for the extension map save pattern
// ---------------------------------------------------------------------------

/// Trait for resources that can be saved/loaded via the extension map.
///
/// Each implementing resource provides its own serialization logic; a feature
/// plugin registers its resources with `SaveableRegistry::register` in `build()`.
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Unique key for this resource in the extension map.
    /// Must be stable across versions (used for deserialization lookup).
    const SAVE_KEY: &'static str;

    /// Serialize this resource to bytes.
    /// Return `None` to skip saving (e.g. when the resource is at its default state).
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Deserialize from bytes, returning the restored resource.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// Decode bytes via `bitcode::decode`, logging a warning and returning `Default` on failure.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset operations for a single registered resource.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

/// Registry of all saveable resources, populated during plugin setup.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Add `T` to the extension map under `T::SAVE_KEY`.
    ///
    /// Keys are unique; a second registration under the same key is dropped
    /// with a warning, and is a debug-build panic.
    pub fn register<T: Saveable>(&mut self) {
        let key = T::SAVE_KEY.to_string();
        if self.entries.iter().any(|e| e.key == key) {
            warn!("Save key '{key}' already taken; keeping the first registration");
            debug_assert!(false, "save key '{key}' registered twice");
            return;
        }
        self.entries.push(SaveableEntry {
            key,
            save_fn: Box::new(|world: &World| {
                world.get_resource::<T>().and_then(|r| r.save_to_bytes())
            }),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                let value = T::load_from_bytes(bytes);
                world.insert_resource(value);
            }),
            reset_fn: Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        });
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Save all registered resources into an extension map.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Load registered resources from an extension map.
    /// Resources whose key is absent are left unchanged.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    /// Reset all registered resources to their defaults (used by new-game).
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Map, rail and randomness resources.
///
/// Insert a `MapConfig` before adding this plugin to choose the map size and
/// seed.
pub struct RailSimPlugin;

impl Plugin for RailSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((map::MapPlugin, random::RandomPlugin));
    }
}

#[cfg(test)]
mod saveable_tests {
    use super::*;
    use crate::map::TileMap;
    use crate::map_config::MapConfig;
    use crate::random::{InteractiveRandom, SimRandom};

    /// Skips saving while at its default state.
    #[derive(Resource, Default, Debug, PartialEq)]
    struct SpeedLimit {
        kmh: u16,
    }

    impl Saveable for SpeedLimit {
        const SAVE_KEY: &'static str = "speed_limit";

        fn save_to_bytes(&self) -> Option<Vec<u8>> {
            if self.kmh == 0 {
                None
            } else {
                Some(self.kmh.to_le_bytes().to_vec())
            }
        }

        fn load_from_bytes(bytes: &[u8]) -> Self {
            let kmh = u16::from_le_bytes(bytes.try_into().unwrap_or([0; 2]));
            SpeedLimit { kmh }
        }
    }

    #[test]
    fn test_registry_save_skips_default() {
        let mut world = World::new();
        world.insert_resource(SpeedLimit::default());

        let mut registry = SaveableRegistry::default();
        registry.register::<SpeedLimit>();

        assert!(registry.save_all(&world).is_empty());

        world.insert_resource(SpeedLimit { kmh: 160 });
        let extensions = registry.save_all(&world);
        assert_eq!(extensions["speed_limit"], 160u16.to_le_bytes().to_vec());
    }

    #[test]
    fn test_registry_load_ignores_unknown_keys() {
        let mut world = World::new();
        world.insert_resource(SpeedLimit { kmh: 80 });

        let mut registry = SaveableRegistry::default();
        registry.register::<SpeedLimit>();

        let mut extensions = BTreeMap::new();
        extensions.insert("unknown_feature".to_string(), vec![0xFF, 0xFF]);
        registry.load_all(&mut world, &extensions);

        assert_eq!(world.resource::<SpeedLimit>().kmh, 80);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_registry_duplicate_key_panics_in_debug() {
        let mut registry = SaveableRegistry::default();
        registry.register::<SpeedLimit>();
        registry.register::<SpeedLimit>();
    }

    #[test]
    fn test_plugin_registers_all_resources() {
        let mut app = App::new();
        app.add_plugins(RailSimPlugin);

        let registry = app.world().resource::<SaveableRegistry>();
        let keys: Vec<&str> = registry.keys().collect();
        for key in ["tile_map", "map_config", "sim_random", "interactive_random"] {
            assert!(keys.contains(&key), "{key} not registered");
        }
        assert!(app.world().get_resource::<TileMap>().is_some());
    }

    #[test]
    fn test_plugin_uses_map_config() {
        let mut app = App::new();
        app.insert_resource(MapConfig {
            map_bits_x: 7,
            map_bits_y: 6,
            seed: 555,
        });
        app.add_plugins(RailSimPlugin);

        let world = app.world();
        let map = world.resource::<TileMap>();
        assert_eq!((map.size_x(), map.size_y()), (128, 64));
        assert_eq!(world.resource::<SimRandom>().0.state(), [555, 555]);
        let derived = 555u32.wrapping_mul(crate::config::INTERACTIVE_SEED_MULTIPLIER);
        assert_eq!(
            world.resource::<InteractiveRandom>().0.state(),
            [derived, derived]
        );
    }

    #[test]
    fn test_save_reset_load_world() {
        let mut app = App::new();
        app.add_plugins(RailSimPlugin);

        let t = {
            let mut map = app.world_mut().resource_mut::<TileMap>();
            let t = map.tile_xy(3, 4);
            map.make_rail_normal(
                t,
                crate::map::Owner(1),
                crate::rail::TrackBits::CROSS,
                crate::rail::RailType::Electric,
            );
            t
        };
        app.world_mut().resource_mut::<SimRandom>().random();

        let world = app.world_mut();
        let registry = world
            .remove_resource::<SaveableRegistry>()
            .expect("plugin inserts the registry");
        let saved = registry.save_all(world);
        let rng_before = world.resource::<SimRandom>().clone();

        registry.reset_all(world);
        assert!(world.resource::<TileMap>().rail_tile(t).is_none());

        registry.load_all(world, &saved);
        let map = world.resource::<TileMap>();
        assert_eq!(map.track_bits(t), crate::rail::TrackBits::CROSS);
        assert_eq!(*world.resource::<SimRandom>(), rng_before);
    }
}
