//! # Storage Backends
//!
//! Selects the `KeyValueStore` the node runs on.
//!
//! ## Usage
//!
//! Enable the `rocksdb` feature for the durable backend:
//!
//! ```toml
//! node-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! Every subsystem shares the one store; keyspace prefixes keep them apart.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore};

use crate::container::config::{StorageBackend, StorageConfig};
use shared_store::{InMemoryKVStore, KVStoreError, KeyValueStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// The store handle shared by all subsystems.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Directory under the data dir holding the RocksDB files.
pub const ROCKSDB_DIR: &str = "chain";

#[derive(Debug, Error)]
pub enum StoreOpenError {
    #[error("Storage backend '{0}' is not compiled into this binary")]
    BackendUnavailable(StorageBackend),

    #[error("Failed to open store")]
    Store(#[from] KVStoreError),
}

/// Open the configured backend.
pub fn open_store(config: &StorageConfig) -> Result<SharedStore, StoreOpenError> {
    match config.backend {
        StorageBackend::Memory => {
            warn!("[runtime] Using in-memory store; chain data is lost on exit");
            Ok(Arc::new(InMemoryKVStore::new()))
        }
        StorageBackend::RocksDb => open_rocksdb(config),
    }
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &StorageConfig) -> Result<SharedStore, StoreOpenError> {
    let path = config.data_dir.join(ROCKSDB_DIR);
    info!(path = %path.display(), "[runtime] Opening RocksDB store");
    let store = RocksDbStore::open(RocksDbConfig::new(path.to_string_lossy()))?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(config: &StorageConfig) -> Result<SharedStore, StoreOpenError> {
    info!(data_dir = %config.data_dir.display(), "[runtime] RocksDB requested");
    Err(StoreOpenError::BackendUnavailable(config.backend))
}
