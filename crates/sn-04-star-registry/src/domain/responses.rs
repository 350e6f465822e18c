//! Results handed back to the caller of each registry operation.

use serde::{Deserialize, Serialize};
use shared_types::{SignatureStatus, Timestamp, WalletAddress};

/// Suffix of the message an address must sign.
pub const MESSAGE_SUFFIX: &str = "starRegistry";

/// The message a wallet signs to prove ownership of `address`.
pub fn challenge_message(address: &str, request_timestamp: Timestamp) -> String {
    format!("{address}:{request_timestamp}:{MESSAGE_SUFFIX}")
}

/// Returned by `request_validation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationChallenge {
    pub address: WalletAddress,
    pub request_timestamp: Timestamp,
    pub message: String,
    /// Seconds left before the request expires.
    pub validation_window: i64,
}

impl ValidationChallenge {
    pub fn new(address: &str, request_timestamp: Timestamp, validation_window: i64) -> Self {
        Self {
            address: address.to_string(),
            request_timestamp,
            message: challenge_message(address, request_timestamp),
            validation_window,
        }
    }
}

/// Returned by `validate_signature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureValidation {
    /// The address may now register a star.
    pub register_star: bool,
    pub status: ValidationChallenge,
    pub message_signature: SignatureStatus,
}

/// Outcome of a reconcile pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Registration blocks examined.
    pub registrations: usize,
    /// Signatures found unrecorded and now marked used.
    pub signatures_marked: usize,
    /// Pool entries still holding a consumed signature, now removed.
    pub entries_evicted: usize,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.signatures_marked == 0 && self.entries_evicted == 0
    }
}
