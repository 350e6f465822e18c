//! # Ports
//!
//! - `inbound` - `LedgerApi`, the surface other subsystems call
//!
//! The ledger's only driven dependencies are the shared `KeyValueStore`
//! and `TimeSource` ports.

pub mod inbound;
