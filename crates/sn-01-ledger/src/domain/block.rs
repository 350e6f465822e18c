//! # Blocks
//!
//! A block goes through exactly one transition:
//!
//! ```text
//! PendingBlock (hash unset) ──seal()──→ Block (hash set, immutable)
//! ```
//!
//! The content hash is SHA-256 over the canonical JSON encoding of the block
//! with its `hash` field set to the empty string. Field order is fixed by the
//! struct declaration, and `serde_json` maps are ordered by key, so the same
//! block always produces the same bytes.

use crate::domain::errors::LedgerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use shared_types::Timestamp;

/// Hash placeholder used during hashing and as the genesis predecessor.
pub const EMPTY_HASH: &str = "";

/// Fields of a block before its hash is known.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBlock {
    pub height: u64,
    pub body: Value,
    pub time: Timestamp,
    pub previous_block_hash: String,
}

impl PendingBlock {
    pub fn new(height: u64, body: Value, time: Timestamp, previous_block_hash: String) -> Self {
        Self {
            height,
            body,
            time,
            previous_block_hash,
        }
    }

    /// The genesis block: height 0, no predecessor.
    pub fn genesis(body: Value, time: Timestamp) -> Self {
        Self::new(0, body, time, EMPTY_HASH.to_string())
    }

    /// Compute the content hash and produce the sealed block.
    pub fn seal(self) -> Result<Block, LedgerError> {
        let mut block = Block {
            hash: EMPTY_HASH.to_string(),
            height: self.height,
            body: self.body,
            time: self.time,
            previous_block_hash: self.previous_block_hash,
        };
        block.hash = block.compute_hash()?;
        Ok(block)
    }
}

/// A sealed chain link.
///
/// Fields are private: once sealed, a block is only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    hash: String,
    height: u64,
    body: Value,
    time: Timestamp,
    previous_block_hash: String,
}

impl Block {
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn time(&self) -> Timestamp {
        self.time
    }

    pub fn previous_block_hash(&self) -> &str {
        &self.previous_block_hash
    }

    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }

    /// Recompute the content hash, ignoring the stored `hash` field.
    pub fn compute_hash(&self) -> Result<String, LedgerError> {
        let unsealed = Block {
            hash: EMPTY_HASH.to_string(),
            ..self.clone()
        };
        let bytes = unsealed.to_bytes()?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// True when the stored hash matches the content.
    pub fn has_valid_hash(&self) -> Result<bool, LedgerError> {
        Ok(self.compute_hash()? == self.hash)
    }

    /// Canonical encoding; also the on-disk representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        serde_json::to_vec(self).map_err(|e| LedgerError::Serialization {
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| LedgerError::Serialization {
            message: e.to_string(),
        })
    }
}
