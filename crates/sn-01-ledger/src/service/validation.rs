//! # Ledger Service - Validation
//!
//! Block and link checks are pure reads, so the full-chain scan fans out
//! across the rayon pool and joins before reporting.

use super::*;
use rayon::prelude::*;
use tracing::{info, warn};

impl<KV, TS> LedgerService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    pub(crate) fn check_block(&self, height: u64) -> Result<bool, LedgerError> {
        match self.load_block_lenient(height)? {
            Some(block) => Ok(block.height() == height && block.has_valid_hash()?),
            None => Ok(false),
        }
    }

    pub(crate) fn check_link(&self, height: u64) -> Result<bool, LedgerError> {
        let Some(next_height) = height.checked_add(1) else {
            return Ok(false);
        };
        let (Some(block), Some(next)) = (
            self.load_block_lenient(height)?,
            self.load_block_lenient(next_height)?,
        ) else {
            return Ok(false);
        };
        Ok(block.hash() == next.previous_block_hash())
    }

    /// Every height in `[0, tip]` gets a block check; every height below
    /// the tip also gets a link check.
    pub(crate) fn check_chain(&self) -> Result<Vec<u64>, LedgerError> {
        let tip = self.height()?;

        let results: Vec<Option<u64>> = (0..=tip)
            .into_par_iter()
            .map(|height| -> Result<Option<u64>, LedgerError> {
                let block_ok = self.check_block(height)?;
                let link_ok = height == tip || self.check_link(height)?;
                Ok((!(block_ok && link_ok)).then_some(height))
            })
            .collect::<Result<_, _>>()?;

        let mut failing: Vec<u64> = results.into_iter().flatten().collect();
        failing.sort_unstable();

        if failing.is_empty() {
            info!(tip, "[sn-01] Chain validated");
        } else {
            warn!(tip, failures = failing.len(), ?failing, "[sn-01] Chain validation failed");
        }
        Ok(failing)
    }
}
