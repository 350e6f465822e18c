//! # Subsystem Container
//!
//! Central container holding the subsystem instances with proper lifetime
//! management and dependency injection.
//!
//! - Subsystems are built in dependency order (store, ledger, pool and
//!   exclusion set, registry)
//! - All of them share one `KeyValueStore`; keyspace prefixes keep them apart
//! - The registry reaches the others only through their inbound ports

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig};
pub use subsystems::{StartupError, SubsystemContainer};
