//! # Shared Store
//!
//! The durable ordered-map contract backing the ledger, the request pool and
//! the signature exclusion set.
//!
//! ## Contract
//!
//! | Operation | Guarantee |
//! |-----------|-----------|
//! | `get` | Absent keys are `Ok(None)`, never an error |
//! | `put` / `delete` | Atomic per key; readers never see a half-written value |
//! | `atomic_batch_write` | All operations apply, or none do |
//! | `prefix_scan` | Entries returned in ascending key order |
//!
//! ## Keyspaces
//!
//! Each subsystem is handed exactly one [`Keyspace`] and only ever builds
//! keys through it, so namespaces never overlap:
//!
//! ```text
//! b:{height_be}   ledger blocks
//! m:{name}        ledger metadata (tip height counter)
//! p:{address}     request pool entries
//! s:{signature}   consumed signatures
//! ```
//!
//! Production: `RocksDbStore` (node-runtime, `rocksdb` feature)
//! Testing: [`InMemoryKVStore`], [`FaultyKVStore`]

pub mod adapters;
pub mod errors;
pub mod keyspace;
pub mod locks;
pub mod ports;

pub use adapters::{FaultyKVStore, InMemoryKVStore};
pub use errors::KVStoreError;
pub use keyspace::Keyspace;
pub use locks::KeyLocks;
pub use ports::{BatchOperation, KeyValueStore, ScanResult};
