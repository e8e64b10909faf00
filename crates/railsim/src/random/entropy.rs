//! Fill buffers with unpredictable bytes, degrading instead of failing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use bevy::prelude::*;
use xxhash_rust::xxh64::xxh64;

use super::InteractiveRandom;

/// A source of cryptographically strong bytes.
pub trait EntropySource: Send + Sync {
    /// Fill all of `buf`. Returns `false` if the source is unavailable or
    /// produced fewer bytes than requested.
    fn fill(&self, buf: &mut [u8]) -> bool;
}

/// The operating system's secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> bool {
        getrandom::getrandom(buf).is_ok()
    }
}

/// A source that is never available; forces the fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntropy;

impl EntropySource for NoEntropy {
    fn fill(&self, _buf: &mut [u8]) -> bool {
        false
    }
}

/// Entropy source chosen at startup. Defaults to `OsEntropy`.
#[derive(Resource)]
pub struct Entropy {
    source: Box<dyn EntropySource>,
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new(OsEntropy)
    }
}

impl Entropy {
    pub fn new(source: impl EntropySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn fill(&self, buf: &mut [u8], interactive: &mut InteractiveRandom) {
        random_bytes_with_fallback_from(self.source.as_ref(), buf, interactive);
    }
}

static WARNED_ONCE: AtomicBool = AtomicBool::new(false);

/// Fill `buf` from the OS generator, falling back to hashed timestamps mixed
/// with `interactive` when it is unavailable. Always fills the whole buffer.
pub fn random_bytes_with_fallback(buf: &mut [u8], interactive: &mut InteractiveRandom) {
    random_bytes_with_fallback_from(&OsEntropy, buf, interactive);
}

/// As `random_bytes_with_fallback`, with an explicit primary source.
pub fn random_bytes_with_fallback_from(
    source: &dyn EntropySource,
    buf: &mut [u8],
    interactive: &mut InteractiveRandom,
) {
    if source.fill(buf) {
        return;
    }

    if first_fallback() {
        warn!("Cryptographically-strong random generator unavailable; using fallback");
    } else {
        debug!("Cryptographically-strong random generator unavailable; using fallback");
    }

    for byte in buf.iter_mut() {
        let mixed = monotonic_nanos() ^ interactive.random() as u64;
        *byte = xxh64(&mixed.to_le_bytes(), 0) as u8;
    }
}

/// Marks the fallback as taken; true only for the first caller in the process.
pub(crate) fn first_fallback() -> bool {
    !WARNED_ONCE.swap(true, Ordering::Relaxed)
}

/// Returns true once the fallback path has been taken in this process.
pub fn fallback_used() -> bool {
    WARNED_ONCE.load(Ordering::Relaxed)
}

fn monotonic_nanos() -> u64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}
