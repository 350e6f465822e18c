//! Key-value store errors.

use thiserror::Error;

/// Failure reported by a [`crate::KeyValueStore`] backend.
///
/// Absence of a key is not an error; `get` returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl KVStoreError {
    pub fn io(message: impl Into<String>) -> Self {
        KVStoreError::IOError {
            message: message.into(),
        }
    }
}
