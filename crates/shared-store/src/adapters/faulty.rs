use crate::errors::KVStoreError;
use crate::keyspace::Keyspace;
use crate::ports::{BatchOperation, KeyValueStore, ScanResult};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Controllable store wrapper for failure-path tests.
///
/// Forwards to `inner` until told to fail. Failures can be scoped to a
/// single keyspace so one subsystem's writes break while the rest of the
/// store keeps working.
pub struct FaultyKVStore<S> {
    inner: S,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    scope: RwLock<Option<Keyspace>>,
}

impl<S: KeyValueStore> FaultyKVStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            scope: RwLock::new(None),
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Restrict injected failures to keys inside `keyspace`.
    pub fn scope_to(&self, keyspace: Keyspace) {
        *self.scope.write() = Some(keyspace);
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn in_scope(&self, key: &[u8]) -> bool {
        match *self.scope.read() {
            Some(keyspace) => keyspace.strip(key).is_some(),
            None => true,
        }
    }

    fn check_read(&self, key: &[u8]) -> Result<(), KVStoreError> {
        if self.fail_reads.load(Ordering::SeqCst) && self.in_scope(key) {
            return Err(KVStoreError::io("injected read failure"));
        }
        Ok(())
    }

    fn check_write(&self, key: &[u8]) -> Result<(), KVStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) && self.in_scope(key) {
            return Err(KVStoreError::io("injected write failure"));
        }
        Ok(())
    }
}

impl<S: KeyValueStore> KeyValueStore for FaultyKVStore<S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.check_read(key)?;
        self.inner.get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.check_write(key)?;
        self.inner.put(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), KVStoreError> {
        self.check_write(key)?;
        self.inner.delete(key)
    }

    fn atomic_batch_write(&self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        for op in &operations {
            self.check_write(op.key())?;
        }
        self.inner.atomic_batch_write(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.check_read(key)?;
        self.inner.exists(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        self.check_read(prefix)?;
        self.inner.prefix_scan(prefix)
    }
}
