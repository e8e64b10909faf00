/// Smallest supported map edge, as a power of two (64 tiles).
pub const MIN_MAP_SIZE_BITS: u32 = 6;
/// Largest supported map edge, as a power of two (2048 tiles).
pub const MAX_MAP_SIZE_BITS: u32 = 11;
pub const DEFAULT_MAP_SIZE_BITS_X: u32 = 8;
pub const DEFAULT_MAP_SIZE_BITS_Y: u32 = 8;

/// Seed used by `MapConfig::default()`.
pub const DEFAULT_SEED: u32 = 0;

/// Multiplier applied to the gameplay seed to derive the interactive seed.
pub const INTERACTIVE_SEED_MULTIPLIER: u32 = 0x1234567;

/// Road vehicle `state` value meaning "inside a depot".
pub const ROAD_VEH_STATE_IN_DEPOT: u8 = 254;
