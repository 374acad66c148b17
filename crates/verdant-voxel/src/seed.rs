//! Deterministic per-plant RNG derivation.
//!
//! Synthesis never touches a process-wide generator. Callers derive a
//! [`ChaCha8Rng`] from the garden seed and a stable plant key, so the same
//! garden seed always grows the same plants on every platform.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a u64 seed for one plant from the garden seed and a stable key
/// (typically the plant's catalog name).
///
/// Uses SipHash (via std's `DefaultHasher`) to mix both inputs.
pub fn derive_plant_seed<K: Hash + ?Sized>(world_seed: u64, key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Derive the generator a plant's shape is synthesized from.
///
/// The returned RNG produces an identical sequence for the same
/// `(world_seed, key)` pair.
pub fn plant_rng<K: Hash + ?Sized>(world_seed: u64, key: &K) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_plant_seed(world_seed, key))
}
