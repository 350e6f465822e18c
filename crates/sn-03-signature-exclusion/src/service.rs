//! # Signature Exclusion Service
//!
//! `s:{signature}` -> address (UTF-8).

use crate::domain::errors::ExclusionError;
use crate::ports::inbound::SignatureExclusionApi;
use shared_store::{KeyLocks, KeyValueStore, Keyspace};
use shared_types::WalletAddress;
use tracing::{info, warn};

pub struct SignatureExclusionService<KV: KeyValueStore> {
    kv_store: KV,
    key_locks: KeyLocks,
}

impl<KV: KeyValueStore> SignatureExclusionService<KV> {
    pub fn new(kv_store: KV) -> Self {
        Self {
            kv_store,
            key_locks: KeyLocks::new(),
        }
    }

    fn signature_key(signature: &str) -> Result<Vec<u8>, ExclusionError> {
        if signature.is_empty() {
            return Err(ExclusionError::EmptySignature);
        }
        Ok(Keyspace::SIGNATURE_EXCLUSION.key(signature.as_bytes()))
    }
}

impl<KV: KeyValueStore> SignatureExclusionApi for SignatureExclusionService<KV> {
    fn is_unused(&self, signature: &str) -> Result<bool, ExclusionError> {
        let key = Self::signature_key(signature)?;
        Ok(!self.kv_store.exists(&key)?)
    }

    fn mark_used(&self, signature: &str, address: &str) -> Result<(), ExclusionError> {
        let key = Self::signature_key(signature)?;
        let _guard = self.key_locks.lock(signature);

        if let Some(existing) = self.consumed_by(signature)? {
            warn!(%existing, address, "[sn-03] Signature already consumed");
            return Err(ExclusionError::AlreadyUsed { address: existing });
        }

        self.kv_store.put(&key, address.as_bytes())?;
        info!(address, "[sn-03] Signature consumed");
        Ok(())
    }

    fn consumed_by(&self, signature: &str) -> Result<Option<WalletAddress>, ExclusionError> {
        let key = Self::signature_key(signature)?;
        self.kv_store
            .get(&key)?
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| ExclusionError::Serialization {
                    message: e.to_string(),
                })
            })
            .transpose()
    }
}
