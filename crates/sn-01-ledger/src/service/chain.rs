//! # Ledger Service - Chain Operations
//!
//! `LedgerApi` implementation: bootstrap, append and reads.

use super::*;
use crate::domain::block::PendingBlock;
use serde_json::Value;
use shared_store::BatchOperation;
use tracing::{debug, info, warn};

impl<KV, TS> LedgerApi for LedgerService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    fn bootstrap(&self) -> Result<(), LedgerError> {
        let _guard = self.append_lock.lock();

        if let Some(meta) = self.read_metadata()? {
            debug!(tip = meta.tip_height, "[sn-01] Chain already bootstrapped");
            return Ok(());
        }

        let stored = self.kv_store.prefix_scan(Keyspace::LEDGER_BLOCKS.as_bytes())?;
        if !stored.is_empty() {
            return self.rebuild_metadata(stored);
        }

        let body = Value::String(self.config.genesis_body.clone());
        let genesis = PendingBlock::genesis(body, self.time_source.now()).seal()?;
        let meta = ChainMetadata::new(0, genesis.hash());

        self.kv_store.atomic_batch_write(vec![
            BatchOperation::put(Keyspace::LEDGER_BLOCKS.height_key(0), genesis.to_bytes()?),
            BatchOperation::put(Keyspace::LEDGER_META.key(TIP_KEY), meta.to_bytes()?),
        ])?;

        info!(hash = %genesis.hash(), "[sn-01] 🌱 Genesis block sealed");
        Ok(())
    }

    fn height(&self) -> Result<u64, LedgerError> {
        self.read_metadata()?
            .map(|meta| meta.tip_height)
            .ok_or(LedgerError::EmptyChain)
    }

    fn get_block(&self, height: u64) -> Result<Block, LedgerError> {
        self.load_block(height)?
            .ok_or(LedgerError::HeightNotFound { height })
    }

    fn add_block(&self, body: Value) -> Result<Block, LedgerError> {
        let _guard = self.append_lock.lock();

        let meta = self.read_metadata()?.ok_or(LedgerError::EmptyChain)?;
        let tip = meta.tip_height;

        // Fetched fresh on every append; nothing about the tip is cached.
        let previous = self
            .load_block(tip)?
            .ok_or_else(|| LedgerError::inconsistent(tip, "tip block missing from store"))?;
        let next = tip
            .checked_add(1)
            .ok_or_else(|| LedgerError::inconsistent(tip, "height overflow"))?;

        let block = PendingBlock::new(
            next,
            body,
            self.time_source.now(),
            previous.hash().to_string(),
        )
        .seal()?;

        self.kv_store.atomic_batch_write(vec![
            BatchOperation::put(Keyspace::LEDGER_BLOCKS.height_key(next), block.to_bytes()?),
            BatchOperation::put(
                Keyspace::LEDGER_META.key(TIP_KEY),
                meta.advanced_to(next).to_bytes()?,
            ),
        ])?;

        info!(height = next, hash = %block.hash(), "[sn-01] Block sealed");
        Ok(block)
    }

    fn validate_block(&self, height: u64) -> Result<bool, LedgerError> {
        self.check_block(height)
    }

    fn validate_link(&self, height: u64) -> Result<bool, LedgerError> {
        self.check_link(height)
    }

    fn validate_chain(&self) -> Result<Vec<u64>, LedgerError> {
        self.check_chain()
    }

    fn read_block_range(&self, start: u64, limit: u64) -> Result<Vec<Block>, LedgerError> {
        if limit > self.config.max_range_limit {
            return Err(LedgerError::LimitExceeded {
                requested: limit,
                max: self.config.max_range_limit,
            });
        }

        let tip = self.height()?;
        if start > tip {
            return Err(LedgerError::HeightNotFound { height: start });
        }
        if limit == 0 {
            return Ok(Vec::new());
        }

        let end = tip.min(start.saturating_add(limit - 1));
        (start..=end).map(|height| self.get_block(height)).collect()
    }

    fn find_block_by_hash(&self, hash: &str) -> Result<Option<Block>, LedgerError> {
        Ok(self
            .find_blocks(&|block| block.hash() == hash)?
            .into_iter()
            .next())
    }

    fn find_blocks(&self, predicate: &dyn Fn(&Block) -> bool) -> Result<Vec<Block>, LedgerError> {
        let mut found = Vec::new();
        for (key, value) in self.kv_store.prefix_scan(Keyspace::LEDGER_BLOCKS.as_bytes())? {
            let block = match Block::from_bytes(&value) {
                Ok(block) => block,
                Err(e) => {
                    // validate_chain reports these; a search just skips them.
                    let height = Keyspace::LEDGER_BLOCKS.decode_height(&key);
                    warn!(?height, error = %e, "[sn-01] Skipping undecodable block");
                    continue;
                }
            };
            if predicate(&block) {
                found.push(block);
            }
        }
        Ok(found)
    }
}
