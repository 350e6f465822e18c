//! # Per-Key Locks
//!
//! Striped mutexes serializing operations on the same key while leaving
//! different keys independent.

use parking_lot::{Mutex, MutexGuard};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Default number of stripes.
const DEFAULT_STRIPES: usize = 64;

/// Fixed set of mutexes indexed by key hash.
///
/// Two keys may share a stripe; that only costs throughput, never
/// correctness. Memory stays bounded regardless of how many keys are seen.
pub struct KeyLocks {
    stripes: Vec<Mutex<()>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::with_stripes(DEFAULT_STRIPES)
    }

    pub fn with_stripes(count: usize) -> Self {
        let count = count.max(1);
        Self {
            stripes: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    /// Block until the stripe owning `key` is free, then hold it.
    pub fn lock<K: Hash + ?Sized>(&self, key: &K) -> MutexGuard<'_, ()> {
        self.stripes[self.stripe_of(key)].lock()
    }

    fn stripe_of<K: Hash + ?Sized>(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.stripes.len() as u64) as usize
    }
}

impl Default for KeyLocks {
    fn default() -> Self {
        Self::new()
    }
}
