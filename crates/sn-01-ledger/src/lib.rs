//! # Ledger (sn-01)
//!
//! The ledger owns the chain: an append-only sequence of blocks, each linked
//! to its predecessor by hash and persisted in the shared key-value store.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Genesis First | `bootstrap()` seals height 0 before any append |
//! | 2 | Sequential Heights | Heights are assigned under the append lock, never by callers |
//! | 3 | Hash Linkage | `block[h].previous_block_hash == block[h-1].hash` |
//! | 4 | Content Hash | `block.hash == SHA-256(canonical(block with empty hash))` |
//! | 5 | Atomic Append | Block and tip counter land in one batch write |
//! | 6 | Immutability | Sealed blocks are never rewritten |
//!
//! ## Block Lifecycle
//!
//! ```text
//! PendingBlock ──seal()──→ Block ──atomic batch──→ b:{height}
//!  (no hash)            (hash set)                 m:tip updated
//! ```
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Block, chain metadata, config, errors
//! - `ports/` - `LedgerApi` (inbound)
//! - `service/` - `LedgerService` implementing the API over a `KeyValueStore`
//!
//! ## Usage
//!
//! ```ignore
//! use sn_01_ledger::{LedgerApi, LedgerConfig, LedgerDependencies, LedgerService};
//!
//! let ledger = LedgerService::open(deps, LedgerConfig::default())?;
//! let block = ledger.add_block(serde_json::json!("hello"))?;
//! assert!(ledger.validate_chain()?.is_empty());
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::block::{Block, PendingBlock, EMPTY_HASH};
pub use domain::config::LedgerConfig;
pub use domain::errors::LedgerError;
pub use domain::metadata::ChainMetadata;
pub use ports::inbound::LedgerApi;
pub use service::{LedgerDependencies, LedgerService};
