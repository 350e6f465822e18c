//! # Adapters
//!
//! In-process implementations of [`crate::KeyValueStore`].
//!
//! - `memory`: ordered in-memory store
//! - `faulty`: wrapper that injects I/O failures on demand

mod faulty;
mod memory;

pub use faulty::FaultyKVStore;
pub use memory::InMemoryKVStore;
