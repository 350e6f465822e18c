//! # Inbound Ports (Driving Ports)
//!
//! The method surface an HTTP layer calls.

use crate::domain::errors::RegistryError;
use crate::domain::responses::{ReconcileReport, SignatureValidation, ValidationChallenge};
use crate::domain::star::Star;
use sn_01_ledger::Block;

pub trait StarRegistryApi: Send + Sync {
    /// Open (or return the open) validation request for `address`.
    fn request_validation(&self, address: &str) -> Result<ValidationChallenge, RegistryError>;

    /// Check `signature` against the challenge issued to `address`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no live request for `address`
    /// - `SignatureAlreadyUsed`: the signature authorized an earlier block
    fn validate_signature(
        &self,
        address: &str,
        signature: &str,
    ) -> Result<SignatureValidation, RegistryError>;

    /// Append a registration block for a validated address.
    ///
    /// ## Errors
    ///
    /// - `NotValidated`: no live request with an attached signature
    /// - `SignatureAlreadyUsed`: the signature authorized an earlier block
    /// - `InvalidStar`: coordinates missing or story not short ASCII text
    fn register_star(&self, address: &str, star: Star) -> Result<Block, RegistryError>;

    /// Record every on-chain signature in the exclusion set and evict the
    /// pool entries still holding them.
    fn reconcile(&self) -> Result<ReconcileReport, RegistryError>;

    /// Registration blocks for `address`, in height order.
    fn stars_by_address(&self, address: &str) -> Result<Vec<Block>, RegistryError>;

    /// The registration block with this hash. Genesis is never returned.
    fn star_by_hash(&self, hash: &str) -> Result<Option<Block>, RegistryError>;
}
