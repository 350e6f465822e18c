//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the Request Pool subsystem.

use crate::domain::entry::PoolEntry;
use crate::domain::errors::PoolError;

/// Primary API for the Request Pool subsystem.
///
/// Every operation sweeps expired entries before doing its own work, so no
/// expired entry is ever returned.
pub trait RequestPoolApi: Send + Sync {
    /// The live entry for `address`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no entry, or it has expired
    fn get_entry(&self, address: &str) -> Result<PoolEntry, PoolError>;

    /// Create an entry stamped `now`, or return the live one unchanged.
    fn add_entry(&self, address: &str) -> Result<PoolEntry, PoolError>;

    /// Attach `signature` to the live entry for `address`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no entry, or it has expired
    fn update_signature(&self, address: &str, signature: &str) -> Result<PoolEntry, PoolError>;

    /// Delete the entry. Succeeds if absent.
    fn remove_entry(&self, address: &str) -> Result<(), PoolError>;

    /// Seconds left in `entry`'s window. Zero or below means expired.
    fn remaining_window(&self, entry: &PoolEntry) -> i64;

    /// Delete every expired entry, returning how many were removed.
    fn sweep_expired(&self) -> Result<usize, PoolError>;

    /// Configured window length in seconds.
    fn validation_window_secs(&self) -> u64;
}
