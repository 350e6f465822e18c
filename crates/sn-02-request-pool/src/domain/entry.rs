//! Pool entries, stored under `p:{address}`.

use crate::domain::errors::PoolError;
use serde::{Deserialize, Serialize};
use shared_types::{Signature, Timestamp};

/// A pending validation request for one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// When the request was created. Never updated.
    pub timestamp: Timestamp,
    /// Ownership proof, absent until submitted.
    pub signature: Option<Signature>,
}

impl PoolEntry {
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<Signature>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Seconds left in the window at `now`. Zero or below means expired.
    pub fn remaining_window(&self, now: Timestamp, window_secs: u64) -> i64 {
        let elapsed = now.saturating_sub(self.timestamp);
        clamp_i64(window_secs).saturating_sub(clamp_i64(elapsed))
    }

    pub fn is_expired(&self, now: Timestamp, window_secs: u64) -> bool {
        self.remaining_window(now, window_secs) <= 0
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PoolError> {
        bincode::serialize(self).map_err(|e| PoolError::Serialization {
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PoolError> {
        bincode::deserialize(bytes).map_err(|e| PoolError::Serialization {
            message: e.to_string(),
        })
    }
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
