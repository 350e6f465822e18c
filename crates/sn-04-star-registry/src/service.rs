//! # Star Registry Service
//!
//! Orchestration only: every durable write goes through one of the three
//! subsystem APIs, each of which serializes its own keys. The registry adds
//! two lock sets on top:
//!
//! - per address, so one address never runs two registrations at once
//! - per signature, held from the unused check through the append and
//!   `mark_used`, so one signature never authorizes two blocks
//!
//! Lock order is address, then signature.

use crate::domain::config::RegistryConfig;
use crate::domain::errors::RegistryError;
use crate::domain::responses::{ReconcileReport, SignatureValidation, ValidationChallenge};
use crate::domain::star::{Star, StarRegistration};
use crate::ports::inbound::StarRegistryApi;
use crate::ports::outbound::SignatureVerifier;
use shared_store::KeyLocks;
use shared_types::SignatureStatus;
use sn_01_ledger::{Block, LedgerApi};
use sn_02_request_pool::{PoolEntry, PoolError, RequestPoolApi};
use sn_03_signature_exclusion::{ExclusionError, SignatureExclusionApi};
use std::sync::Arc;
use tracing::{info, warn};

/// Dependencies for StarRegistry
pub struct StarRegistryDependencies {
    pub ledger: Arc<dyn LedgerApi>,
    pub pool: Arc<dyn RequestPoolApi>,
    pub exclusions: Arc<dyn SignatureExclusionApi>,
    pub verifier: Arc<dyn SignatureVerifier>,
}

pub struct StarRegistry {
    ledger: Arc<dyn LedgerApi>,
    pool: Arc<dyn RequestPoolApi>,
    exclusions: Arc<dyn SignatureExclusionApi>,
    verifier: Arc<dyn SignatureVerifier>,
    config: RegistryConfig,
    address_locks: KeyLocks,
    signature_locks: KeyLocks,
}

impl StarRegistry {
    pub fn new(deps: StarRegistryDependencies, config: RegistryConfig) -> Self {
        Self {
            ledger: deps.ledger,
            pool: deps.pool,
            exclusions: deps.exclusions,
            verifier: deps.verifier,
            config,
            address_locks: KeyLocks::new(),
            signature_locks: KeyLocks::new(),
        }
    }

    fn live_entry(&self, address: &str) -> Result<PoolEntry, RegistryError> {
        self.pool.get_entry(address).map_err(|e| match e {
            PoolError::NotFound { address } => RegistryError::NotFound { address },
            other => other.into(),
        })
    }

    fn challenge_for(&self, address: &str, entry: &PoolEntry) -> ValidationChallenge {
        ValidationChallenge::new(address, entry.timestamp, self.pool.remaining_window(entry))
    }

    fn ensure_unused(&self, signature: &str) -> Result<(), RegistryError> {
        if self.exclusions.is_unused(signature)? {
            Ok(())
        } else {
            Err(RegistryError::SignatureAlreadyUsed)
        }
    }
}

impl StarRegistryApi for StarRegistry {
    fn request_validation(&self, address: &str) -> Result<ValidationChallenge, RegistryError> {
        let entry = self.pool.add_entry(address)?;
        Ok(self.challenge_for(address, &entry))
    }

    fn validate_signature(
        &self,
        address: &str,
        signature: &str,
    ) -> Result<SignatureValidation, RegistryError> {
        let entry = self.live_entry(address)?;
        self.ensure_unused(signature)?;

        let challenge = self.challenge_for(address, &entry);
        let verified = self.verifier.verify(&challenge.message, address, signature);
        if verified {
            self.pool.update_signature(address, signature)?;
        } else {
            warn!(address, "[sn-04] Signature rejected");
        }

        Ok(SignatureValidation {
            register_star: verified,
            status: challenge,
            message_signature: SignatureStatus::from_verified(verified),
        })
    }

    fn register_star(&self, address: &str, star: Star) -> Result<Block, RegistryError> {
        star.validate(self.config.max_story_bytes)?;

        let _guard = self.address_locks.lock(address);

        let entry = self.pool.get_entry(address).map_err(|e| match e {
            PoolError::NotFound { address } => RegistryError::NotValidated { address },
            other => other.into(),
        })?;
        let signature = entry.signature.ok_or_else(|| RegistryError::NotValidated {
            address: address.to_string(),
        })?;

        let _signature_guard = self.signature_locks.lock(signature.as_str());
        self.ensure_unused(&signature)?;

        let registration = StarRegistration {
            address: address.to_string(),
            signature,
            star: star.with_encoded_story(),
        };
        let block = self.ledger.add_block(registration.to_body()?)?;
        info!(address, height = block.height(), "[sn-04] ⭐ Star registered");

        // The block is committed; failures below are repaired by reconcile().
        if let Err(e) = self.pool.remove_entry(address) {
            warn!(address, error = %e, "[sn-04] Failed to evict pool entry after registration");
        }
        if let Err(e) = self.exclusions.mark_used(&registration.signature, address) {
            warn!(address, error = %e, "[sn-04] Failed to mark signature used after registration");
        }

        Ok(block)
    }

    fn reconcile(&self) -> Result<ReconcileReport, RegistryError> {
        let blocks = self.ledger.find_blocks(&|block| !block.is_genesis())?;
        let mut report = ReconcileReport::default();

        for registration in blocks.iter().filter_map(StarRegistration::from_block) {
            report.registrations += 1;
            let StarRegistration {
                address, signature, ..
            } = &registration;

            {
                let _signature_guard = self.signature_locks.lock(signature.as_str());
                if self.exclusions.is_unused(signature)? {
                    match self.exclusions.mark_used(signature, address) {
                        Ok(()) => report.signatures_marked += 1,
                        Err(ExclusionError::AlreadyUsed { .. }) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
            }

            let _guard = self.address_locks.lock(address.as_str());
            match self.pool.get_entry(address) {
                Ok(entry) if entry.signature.as_deref() == Some(signature.as_str()) => {
                    self.pool.remove_entry(address)?;
                    report.entries_evicted += 1;
                }
                Ok(_) | Err(PoolError::NotFound { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }

        if report.is_clean() {
            info!(registrations = report.registrations, "[sn-04] Reconcile found nothing to repair");
        } else {
            warn!(
                registrations = report.registrations,
                signatures_marked = report.signatures_marked,
                entries_evicted = report.entries_evicted,
                "[sn-04] Reconcile repaired bookkeeping"
            );
        }
        Ok(report)
    }

    fn stars_by_address(&self, address: &str) -> Result<Vec<Block>, RegistryError> {
        Ok(self.ledger.find_blocks(&|block| {
            StarRegistration::from_block(block).is_some_and(|r| r.address == address)
        })?)
    }

    fn star_by_hash(&self, hash: &str) -> Result<Option<Block>, RegistryError> {
        Ok(self
            .ledger
            .find_block_by_hash(hash)?
            .filter(|block| !block.is_genesis()))
    }
}
