//! Deterministic game randomness plus a best-effort secure byte source.
//!
//! Two independent generators exist so that UI effects never disturb the
//! gameplay sequence:
//! - `SimRandom`: everything that affects game state; must stay in sync
//!   between all players of a networked game
//! - `InteractiveRandom`: local-only randomness (UI, sounds, fallback entropy)
//!
//! Systems take `ResMut<SimRandom>` / `ResMut<InteractiveRandom>` instead of
//! reaching for a global. Both resources are persisted via the `Saveable`
//! extension map.

mod entropy;
mod randomizer;


use bevy::prelude::*;

pub use entropy::{
    fallback_used, random_bytes_with_fallback, random_bytes_with_fallback_from, Entropy,
    EntropySource, NoEntropy, OsEntropy,
};
pub use randomizer::Randomizer;

use crate::config::INTERACTIVE_SEED_MULTIPLIER;
use crate::map_config::MapConfig;
use crate::Saveable;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Gameplay generator.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SimRandom(pub Randomizer);

impl SimRandom {
    /// Next gameplay random value. With the `random_debug` feature every draw
    /// is logged with its call site.
    #[track_caller]
    #[inline]
    pub fn random(&mut self) -> u32 {
        let value = self.0.next();
        #[cfg(feature = "random_debug")]
        log_draw(value);
        value
    }

    /// Next gameplay random value in `[0, limit)`.
    #[track_caller]
    #[inline]
    pub fn random_range(&mut self, limit: u32) -> u32 {
        randomizer::scale(self.random(), limit)
    }
}

#[cfg(feature = "random_debug")]
#[track_caller]
fn log_draw(value: u32) {
    let caller = std::panic::Location::caller();
    trace!(
        "random {:08x}; {}:{}",
        value,
        caller.file(),
        caller.line()
    );
}

/// Local-only generator; may diverge freely between players.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractiveRandom(pub Randomizer);

impl InteractiveRandom {
    #[inline]
    pub fn random(&mut self) -> u32 {
        self.0.next()
    }

    #[inline]
    pub fn random_range(&mut self, limit: u32) -> u32 {
        self.0.next_range(limit)
    }
}

/// Reseed both generators. The interactive one gets a derived seed so the
/// two sequences do not mirror each other.
pub fn set_random_seed(seed: u32, sim: &mut SimRandom, interactive: &mut InteractiveRandom) {
    sim.0.set_seed(seed);
    interactive
        .0
        .set_seed(seed.wrapping_mul(INTERACTIVE_SEED_MULTIPLIER));
}

// ---------------------------------------------------------------------------
// Saveable implementations
// ---------------------------------------------------------------------------

impl Saveable for SimRandom {
    const SAVE_KEY: &'static str = "sim_random";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(&self.0))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        Self(crate::decode_or_warn(Self::SAVE_KEY, bytes))
    }
}

impl Saveable for InteractiveRandom {
    const SAVE_KEY: &'static str = "interactive_random";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(&self.0))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        Self(crate::decode_or_warn(Self::SAVE_KEY, bytes))
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct RandomPlugin;

impl Plugin for RandomPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapConfig>();
        app.init_resource::<Entropy>();

        let seed = app.world().resource::<MapConfig>().seed;
        let mut sim = SimRandom::default();
        let mut interactive = InteractiveRandom::default();
        set_random_seed(seed, &mut sim, &mut interactive);
        debug!("Seeding random generators with {:#010x}", seed);
        app.insert_resource(sim).insert_resource(interactive);

        app.init_resource::<crate::SaveableRegistry>();
        let mut registry = app.world_mut().resource_mut::<crate::SaveableRegistry>();
        registry.register::<SimRandom>();
        registry.register::<InteractiveRandom>();
    }
}
