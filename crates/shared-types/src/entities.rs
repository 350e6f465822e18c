//! # Core Entities
//!
//! Identifier types exchanged between the ledger, the request pool and the
//! signature exclusion set.

use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Opaque wallet address supplied by the caller.
pub type WalletAddress = String;

/// Opaque message signature supplied by the caller.
pub type Signature = String;

/// Outcome of an external signature check, as reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureStatus {
    Valid,
    Invalid,
}

impl SignatureStatus {
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            SignatureStatus::Valid
        } else {
            SignatureStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SignatureStatus::Valid)
    }
}
