//! Star registry error types.

use sn_01_ledger::LedgerError;
use sn_02_request_pool::PoolError;
use sn_03_signature_exclusion::ExclusionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// No live validation request for this address.
    #[error("No pending validation request for {address}")]
    NotFound { address: String },

    /// The address has a request but has not proven ownership.
    #[error("Address {address} has not submitted a valid signature")]
    NotValidated { address: String },

    #[error("Signature has already been used")]
    SignatureAlreadyUsed,

    #[error("Invalid star: {reason}")]
    InvalidStar { reason: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Exclusion(#[from] ExclusionError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RegistryError {
    pub(crate) fn invalid_star(reason: impl Into<String>) -> Self {
        RegistryError::InvalidStar {
            reason: reason.into(),
        }
    }
}
