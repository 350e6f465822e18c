use shared_store::KVStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExclusionError {
    /// The signature is already recorded; the existing record is kept.
    #[error("Signature already used by {address}")]
    AlreadyUsed { address: String },

    #[error("Signature must not be empty")]
    EmptySignature,

    #[error(transparent)]
    Storage(#[from] KVStoreError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}
