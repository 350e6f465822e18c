//! # Keyspaces
//!
//! Byte-prefix namespaces partitioning the shared store between subsystems.

/// A namespace within the shared store.
///
/// All keys are prefixed to namespace different data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyspace {
    prefix: &'static [u8],
}

impl Keyspace {
    /// Ledger blocks: `b:{height_be}` -> serialized Block
    pub const LEDGER_BLOCKS: Keyspace = Keyspace::new(b"b:");
    /// Ledger metadata: `m:{name}` -> value
    pub const LEDGER_META: Keyspace = Keyspace::new(b"m:");
    /// Request pool: `p:{address}` -> pool entry
    pub const REQUEST_POOL: Keyspace = Keyspace::new(b"p:");
    /// Consumed signatures: `s:{signature}` -> address
    pub const SIGNATURE_EXCLUSION: Keyspace = Keyspace::new(b"s:");

    /// Every keyspace in use.
    pub const ALL: [Keyspace; 4] = [
        Keyspace::LEDGER_BLOCKS,
        Keyspace::LEDGER_META,
        Keyspace::REQUEST_POOL,
        Keyspace::SIGNATURE_EXCLUSION,
    ];

    pub const fn new(prefix: &'static [u8]) -> Self {
        Self { prefix }
    }

    /// Get the byte prefix for this keyspace.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.prefix
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.prefix.len() + suffix.len());
        key.extend_from_slice(self.prefix);
        key.extend_from_slice(suffix);
        key
    }

    /// Build a key from a big-endian height, so scans come back in height order.
    pub fn height_key(&self, height: u64) -> Vec<u8> {
        self.key(&height.to_be_bytes())
    }

    /// Strip this keyspace's prefix, returning `None` for foreign keys.
    pub fn strip<'a>(&self, key: &'a [u8]) -> Option<&'a [u8]> {
        key.strip_prefix(self.prefix)
    }

    /// Decode a key produced by [`Keyspace::height_key`].
    pub fn decode_height(&self, key: &[u8]) -> Option<u64> {
        let suffix: [u8; 8] = self.strip(key)?.try_into().ok()?;
        Some(u64::from_be_bytes(suffix))
    }
}
