//! # Inbound Ports (Driving Ports)

use crate::domain::errors::ExclusionError;
use shared_types::WalletAddress;

/// Primary API for the Signature Exclusion subsystem.
pub trait SignatureExclusionApi: Send + Sync {
    /// `true` if `signature` has never been recorded.
    ///
    /// A failed lookup is an error, never "unused".
    fn is_unused(&self, signature: &str) -> Result<bool, ExclusionError>;

    /// Record `signature` as consumed by `address`.
    ///
    /// Only a successful return means the signature is consumed.
    ///
    /// ## Errors
    ///
    /// - `AlreadyUsed`: a record exists; it is not overwritten
    /// - `Storage`: the write failed
    fn mark_used(&self, signature: &str, address: &str) -> Result<(), ExclusionError>;

    /// The address recorded for `signature`, if any.
    fn consumed_by(&self, signature: &str) -> Result<Option<WalletAddress>, ExclusionError>;
}
