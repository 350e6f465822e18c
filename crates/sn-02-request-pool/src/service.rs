//! # Request Pool Service
//!
//! Implements `RequestPoolApi` over the `p:` keyspace.
//!
//! Lock discipline: the sweep takes and releases one stripe at a time, and
//! every operation sweeps *before* taking its own address lock, so no thread
//! ever holds two stripes.

use crate::domain::config::RequestPoolConfig;
use crate::domain::entry::PoolEntry;
use crate::domain::errors::PoolError;
use crate::ports::inbound::RequestPoolApi;
use shared_store::{KeyLocks, KeyValueStore, Keyspace};
use shared_types::TimeSource;
use tracing::{debug, info, warn};

/// The Request Pool Service.
pub struct RequestPoolService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    kv_store: KV,
    time_source: TS,
    config: RequestPoolConfig,
    /// Per-address serialization, keyed by address bytes.
    key_locks: KeyLocks,
}

/// Dependencies for RequestPoolService
pub struct RequestPoolDependencies<KV, TS> {
    pub kv_store: KV,
    pub time_source: TS,
}

impl<KV, TS> RequestPoolService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    pub fn new(deps: RequestPoolDependencies<KV, TS>, config: RequestPoolConfig) -> Self {
        Self {
            kv_store: deps.kv_store,
            time_source: deps.time_source,
            config,
            key_locks: KeyLocks::new(),
        }
    }

    pub fn config(&self) -> &RequestPoolConfig {
        &self.config
    }

    fn entry_key(address: &str) -> Result<Vec<u8>, PoolError> {
        if address.is_empty() {
            return Err(PoolError::EmptyAddress);
        }
        Ok(Keyspace::REQUEST_POOL.key(address.as_bytes()))
    }

    fn read_entry(&self, key: &[u8]) -> Result<Option<PoolEntry>, PoolError> {
        self.kv_store
            .get(key)?
            .map(|bytes| PoolEntry::from_bytes(&bytes))
            .transpose()
    }

    fn write_entry(&self, key: &[u8], entry: &PoolEntry) -> Result<(), PoolError> {
        self.kv_store.put(key, &entry.to_bytes()?)?;
        Ok(())
    }

    /// The entry under `key` if still live; an expired one is deleted.
    /// Caller holds the address lock.
    fn live_entry(&self, key: &[u8]) -> Result<Option<PoolEntry>, PoolError> {
        match self.read_entry(key)? {
            Some(entry) if entry.is_expired(self.time_source.now(), self.config.validation_window_secs) => {
                self.kv_store.delete(key)?;
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

impl<KV, TS> RequestPoolApi for RequestPoolService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    fn get_entry(&self, address: &str) -> Result<PoolEntry, PoolError> {
        let key = Self::entry_key(address)?;
        self.sweep_expired()?;

        let _guard = self.key_locks.lock(address.as_bytes());
        self.live_entry(&key)?
            .ok_or_else(|| PoolError::not_found(address))
    }

    fn add_entry(&self, address: &str) -> Result<PoolEntry, PoolError> {
        let key = Self::entry_key(address)?;
        self.sweep_expired()?;

        let _guard = self.key_locks.lock(address.as_bytes());
        if let Some(existing) = self.live_entry(&key)? {
            debug!(address, "[sn-02] Request already pending");
            return Ok(existing);
        }

        let entry = PoolEntry::new(self.time_source.now());
        self.write_entry(&key, &entry)?;
        debug!(address, timestamp = entry.timestamp, "[sn-02] Request added");
        Ok(entry)
    }

    fn update_signature(&self, address: &str, signature: &str) -> Result<PoolEntry, PoolError> {
        let key = Self::entry_key(address)?;
        self.sweep_expired()?;

        let _guard = self.key_locks.lock(address.as_bytes());
        let entry = self
            .live_entry(&key)?
            .ok_or_else(|| PoolError::not_found(address))?
            .with_signature(signature);
        self.write_entry(&key, &entry)?;
        debug!(address, "[sn-02] Signature attached");
        Ok(entry)
    }

    fn remove_entry(&self, address: &str) -> Result<(), PoolError> {
        let key = Self::entry_key(address)?;
        self.sweep_expired()?;

        let _guard = self.key_locks.lock(address.as_bytes());
        self.kv_store.delete(&key)?;
        debug!(address, "[sn-02] Request removed");
        Ok(())
    }

    fn remaining_window(&self, entry: &PoolEntry) -> i64 {
        entry.remaining_window(self.time_source.now(), self.config.validation_window_secs)
    }

    fn sweep_expired(&self) -> Result<usize, PoolError> {
        let now = self.time_source.now();
        let window = self.config.validation_window_secs;
        let mut removed = 0;
        // Undecodable entries count as stale.
        let stale = |bytes: &[u8]| match PoolEntry::from_bytes(bytes) {
            Ok(entry) => entry.is_expired(now, window),
            Err(_) => true,
        };

        for (key, value) in self.kv_store.prefix_scan(Keyspace::REQUEST_POOL.as_bytes())? {
            if !stale(&value) {
                continue;
            }
            let Some(address) = Keyspace::REQUEST_POOL.strip(&key) else {
                continue;
            };

            let _guard = self.key_locks.lock(address);
            // The entry may have been replaced since the scan.
            let Some(current) = self.kv_store.get(&key)? else {
                continue;
            };
            if !stale(&current) {
                continue;
            }
            if let Err(e) = PoolEntry::from_bytes(&current) {
                warn!(key = ?String::from_utf8_lossy(&key), error = %e, "[sn-02] Dropping undecodable entry");
            }
            self.kv_store.delete(&key)?;
            removed += 1;
        }

        if removed > 0 {
            info!(removed, "[sn-02] Swept expired requests");
        }
        Ok(removed)
    }

    fn validation_window_secs(&self) -> u64 {
        self.config.validation_window_secs
    }
}
