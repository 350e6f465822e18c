//! Request pool error types.

use shared_store::KVStoreError;
use thiserror::Error;

/// Request pool errors.
#[derive(Debug, Error)]
pub enum PoolError {
    /// No live entry for this address (never requested, removed or expired).
    #[error("No pending request for address {address}")]
    NotFound { address: String },

    /// Addresses are keys; an empty one cannot be stored.
    #[error("Wallet address must not be empty")]
    EmptyAddress,

    #[error(transparent)]
    Storage(#[from] KVStoreError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PoolError {
    pub(crate) fn not_found(address: &str) -> Self {
        PoolError::NotFound {
            address: address.to_string(),
        }
    }
}
