/// Default validation window: five minutes.
pub const DEFAULT_VALIDATION_WINDOW_SECS: u64 = 300;

/// Request pool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPoolConfig {
    /// How long an entry stays live after creation.
    pub validation_window_secs: u64,
}

impl Default for RequestPoolConfig {
    fn default() -> Self {
        Self {
            validation_window_secs: DEFAULT_VALIDATION_WINDOW_SECS,
        }
    }
}

impl RequestPoolConfig {
    pub fn with_validation_window_secs(mut self, secs: u64) -> Self {
        self.validation_window_secs = secs;
        self
    }
}
