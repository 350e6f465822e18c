//! # Node Configuration
//!
//! Unified configuration for all subsystems and runtime parameters.
//!
//! ## Environment Variables
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SN_DATA_DIR` | Data directory | `./data` |
//! | `SN_STORAGE_BACKEND` | `memory` or `rocksdb` | `rocksdb` when compiled in, else `memory` |
//! | `SN_VALIDATION_WINDOW_SECS` | Request pool window | 300 |
//! | `SN_SWEEP_INTERVAL_SECS` | Background sweep period | 30 |
//! | `SN_LOG_LEVEL` / `RUST_LOG` | Log filter | `info` |
//! | `SN_JSON_LOGS` | JSON log output | `false` |

use sn_01_ledger::LedgerConfig;
use sn_02_request_pool::RequestPoolConfig;
use sn_04_star_registry::RegistryConfig;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    pub storage: StorageConfig,
    pub ledger: LedgerConfig,
    pub pool: RequestPoolConfig,
    pub registry: RegistryConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend '{0}' (expected 'memory' or 'rocksdb')")]
    UnknownBackend(String),

    #[error("Invalid value '{value}' for {variable}")]
    InvalidValue { variable: String, value: String },

    #[error("Validation window must be greater than zero")]
    ZeroValidationWindow,

    #[error("Sweep interval must be greater than zero")]
    ZeroSweepInterval,

    #[error("Data directory must be set for the {0} backend")]
    MissingDataDir(StorageBackend),
}

/// Which `KeyValueStore` implementation backs the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    RocksDb,
}

impl Default for StorageBackend {
    fn default() -> Self {
        if cfg!(feature = "rocksdb") {
            StorageBackend::RocksDb
        } else {
            StorageBackend::Memory
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "rocksdb" | "rocks" => Ok(StorageBackend::RocksDb),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::RocksDb => write!(f, "rocksdb"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Data directory for the persistent store and the node lock.
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            backend: StorageBackend::default(),
        }
    }
}

/// Background task configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Period of the request pool sweep.
    pub sweep_interval_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: 30,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `sn_01_ledger=debug`.
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = NodeConfig::default();

        if let Some(dir) = lookup("SN_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(backend) = lookup("SN_STORAGE_BACKEND") {
            config.storage.backend = backend.parse()?;
        }
        if let Some(secs) = parse_var(&lookup, "SN_VALIDATION_WINDOW_SECS")? {
            config.pool = config.pool.with_validation_window_secs(secs);
        }
        if let Some(secs) = parse_var(&lookup, "SN_SWEEP_INTERVAL_SECS")? {
            config.runtime.sweep_interval_secs = secs;
        }
        if let Some(level) = lookup("SN_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            config.logging.log_level = level;
        }
        if let Some(json) = lookup("SN_JSON_LOGS") {
            config.logging.json_logs = json.eq_ignore_ascii_case("true") || json == "1";
        }

        Ok(config)
    }

    /// Reject configurations the node cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.validation_window_secs == 0 {
            return Err(ConfigError::ZeroValidationWindow);
        }
        if self.runtime.sweep_interval_secs == 0 {
            return Err(ConfigError::ZeroSweepInterval);
        }
        if self.storage.backend == StorageBackend::RocksDb
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(ConfigError::MissingDataDir(self.storage.backend));
        }
        Ok(())
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &str,
) -> Result<Option<u64>, ConfigError> {
    lookup(variable)
        .map(|value| {
            value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                variable: variable.to_string(),
                value,
            })
        })
        .transpose()
}
