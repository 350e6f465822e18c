//! # Domain Layer
//!
//! Pure ledger types. Nothing here touches the store.
//!
//! - `block` - PendingBlock / Block and the content hash
//! - `metadata` - Persisted tip counter
//! - `config` - LedgerConfig
//! - `errors` - LedgerError

pub mod block;
pub mod config;
pub mod errors;
pub mod metadata;
