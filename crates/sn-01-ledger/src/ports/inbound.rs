//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the Ledger subsystem.

use crate::domain::block::Block;
use crate::domain::errors::LedgerError;
use serde_json::Value;

/// Primary API for the Ledger subsystem.
///
/// Object safe, so orchestrators can hold an `Arc<dyn LedgerApi>`.
/// Every method takes `&self`; the append path serializes internally.
pub trait LedgerApi: Send + Sync {
    /// Ensure the genesis block exists. Idempotent.
    fn bootstrap(&self) -> Result<(), LedgerError>;

    /// Height of the most recently sealed block.
    ///
    /// ## Errors
    ///
    /// - `EmptyChain`: bootstrap has not run
    fn height(&self) -> Result<u64, LedgerError>;

    /// Read the block at `height`.
    ///
    /// ## Errors
    ///
    /// - `HeightNotFound`: `height` is above the tip
    /// - `Serialization`: stored bytes are not a block
    fn get_block(&self, height: u64) -> Result<Block, LedgerError>;

    /// Seal `body` into a new block at `height() + 1`.
    ///
    /// ## Atomicity
    ///
    /// The block and the new tip counter are written in one batch; on any
    /// error nothing is persisted.
    ///
    /// ## Errors
    ///
    /// - `EmptyChain`: bootstrap has not run
    /// - `StructuralInconsistency`: the tip block cannot be fetched
    fn add_block(&self, body: Value) -> Result<Block, LedgerError>;

    /// Recompute the stored block's hash and compare.
    ///
    /// Returns `false` for a missing or undecodable block.
    fn validate_block(&self, height: u64) -> Result<bool, LedgerError>;

    /// Check `block[height].hash == block[height + 1].previous_block_hash`.
    ///
    /// Returns `false` if either block is missing.
    fn validate_link(&self, height: u64) -> Result<bool, LedgerError>;

    /// Check every block and every link up to the tip.
    ///
    /// Returns failing heights in ascending order; empty means valid.
    fn validate_chain(&self) -> Result<Vec<u64>, LedgerError>;

    /// Read up to `limit` consecutive blocks starting at `start`.
    ///
    /// ## Errors
    ///
    /// - `HeightNotFound`: `start` is above the tip
    /// - `LimitExceeded`: `limit` is above the configured maximum
    fn read_block_range(&self, start: u64, limit: u64) -> Result<Vec<Block>, LedgerError>;

    /// Linear scan for the block carrying `hash`.
    fn find_block_by_hash(&self, hash: &str) -> Result<Option<Block>, LedgerError>;

    /// Every sealed block matching `predicate`, in height order.
    ///
    /// Undecodable records are skipped; `validate_chain` reports them.
    fn find_blocks(&self, predicate: &dyn Fn(&Block) -> bool) -> Result<Vec<Block>, LedgerError>;
}
