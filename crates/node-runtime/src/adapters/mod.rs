//! # Adapters
//!
//! Process-level implementations the node wires into the subsystems.
//!
//! - `storage` - store selection and the RocksDB backend
//! - `lock` - exclusive ownership of the data directory

pub mod lock;
pub mod storage;

pub use lock::{DataDirLock, LockError};
pub use storage::open_store;
