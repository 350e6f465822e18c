use shared_store::KVStoreError;
use thiserror::Error;

/// Ledger errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No block has been sealed at this height.
    #[error("Block not found at height {height}")]
    HeightNotFound { height: u64 },

    /// The chain has not been bootstrapped.
    #[error("Ledger has no chain; bootstrap has not run")]
    EmptyChain,

    /// The store contradicts the chain's own bookkeeping. Not retried.
    #[error("Structural inconsistency at height {height}: {reason}")]
    StructuralInconsistency { height: u64, reason: String },

    /// Range request exceeds the allowed limit.
    #[error("Range limit {requested} exceeds maximum {max}")]
    LimitExceeded { requested: u64, max: u64 },

    /// Underlying store failure.
    #[error(transparent)]
    Storage(#[from] KVStoreError),

    /// A persisted value could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LedgerError {
    pub(crate) fn inconsistent(height: u64, reason: impl Into<String>) -> Self {
        LedgerError::StructuralInconsistency {
            height,
            reason: reason.into(),
        }
    }
}
