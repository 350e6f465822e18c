//! # Ledger Service - Tip Recovery
//!
//! Stores written without a tip counter hold only `b:` records. The tip is
//! re-derived from the block keys, which must run contiguously from 0.

use super::*;
use shared_store::ScanResult;
use tracing::warn;

impl<KV, TS> LedgerService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    /// Rebuild `m:tip` from stored blocks. Caller holds the append lock.
    pub(crate) fn rebuild_metadata(&self, stored: ScanResult) -> Result<(), LedgerError> {
        let mut heights = Vec::with_capacity(stored.len());
        for (key, _) in &stored {
            let height = Keyspace::LEDGER_BLOCKS
                .decode_height(key)
                .ok_or_else(|| LedgerError::inconsistent(0, "malformed block key"))?;
            heights.push(height);
        }

        for (expected, height) in (0u64..).zip(heights.iter().copied()) {
            if height != expected {
                return Err(LedgerError::inconsistent(
                    expected,
                    format!("missing block, next stored height is {height}"),
                ));
            }
        }

        // Keys are ordered and contiguous from 0, so the first is genesis.
        let genesis = match stored.first() {
            Some((_, value)) => Block::from_bytes(value)?,
            None => return Err(LedgerError::inconsistent(0, "no blocks to recover from")),
        };
        let tip = (heights.len() as u64).saturating_sub(1);
        let meta = ChainMetadata::new(tip, genesis.hash());

        self.kv_store
            .put(&Keyspace::LEDGER_META.key(TIP_KEY), &meta.to_bytes()?)?;

        warn!(tip, "[sn-01] Tip counter missing; rebuilt from stored blocks");
        Ok(())
    }
}
