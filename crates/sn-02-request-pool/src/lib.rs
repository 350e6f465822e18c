//! # Request Pool (sn-02)
//!
//! Tracks wallet addresses that have asked to register, each with the time
//! of the request and, once supplied, the signature proving ownership.
//! Entries are live for a fixed validation window and then expire.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | One Entry Per Address | Key is the address; creation is idempotent |
//! | 2 | Fixed Timestamp | Set at insertion, never updated |
//! | 3 | No Stale Reads | Every operation sweeps first and re-checks the entry it returns |
//! | 4 | Per-Key Serialization | Striped lock per address |
//!
//! ## Entry Lifecycle
//!
//! ```text
//! add_entry ──→ [Pending] ──update_signature──→ [Signed]
//!                   │                              │
//!                   └──── window elapsed ──────────┴──→ swept
//!                                                  │
//!                                   remove_entry ──┘ (block appended)
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::RequestPoolConfig;
pub use domain::entry::PoolEntry;
pub use domain::errors::PoolError;
pub use ports::inbound::RequestPoolApi;
pub use service::{RequestPoolDependencies, RequestPoolService};
