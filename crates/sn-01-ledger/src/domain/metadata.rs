//! Persisted chain bookkeeping, stored under `m:tip`.

use crate::domain::errors::LedgerError;
use serde::{Deserialize, Serialize};

/// Metadata key suffix within the `m:` keyspace.
pub const TIP_KEY: &[u8] = b"tip";

/// Tip counter written in the same batch as every block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMetadata {
    pub tip_height: u64,
    pub genesis_hash: String,
}

impl ChainMetadata {
    pub fn new(tip_height: u64, genesis_hash: impl Into<String>) -> Self {
        Self {
            tip_height,
            genesis_hash: genesis_hash.into(),
        }
    }

    /// Metadata after sealing a block at `height`.
    pub fn advanced_to(&self, height: u64) -> Self {
        Self {
            tip_height: height,
            genesis_hash: self.genesis_hash.clone(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Serialization {
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        bincode::deserialize(bytes).map_err(|e| LedgerError::Serialization {
            message: e.to_string(),
        })
    }
}
