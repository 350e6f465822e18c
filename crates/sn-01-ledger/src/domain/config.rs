/// Body text of the genesis block.
pub const DEFAULT_GENESIS_BODY: &str = "First block in the chain - Genesis block";

/// Default cap on blocks returned by one range read.
pub const DEFAULT_MAX_RANGE_LIMIT: u64 = 100;

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Sentinel body sealed into height 0.
    pub genesis_body: String,
    pub max_range_limit: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            genesis_body: DEFAULT_GENESIS_BODY.to_string(),
            max_range_limit: DEFAULT_MAX_RANGE_LIMIT,
        }
    }
}

impl LedgerConfig {
    pub fn with_genesis_body(mut self, body: impl Into<String>) -> Self {
        self.genesis_body = body.into();
        self
    }

    pub fn with_max_range_limit(mut self, limit: u64) -> Self {
        self.max_range_limit = limit;
        self
    }
}
