//! # Subsystem Container
//!
//! Holds all subsystem instances and the resources they share.
//!
//! ## Initialization Order
//!
//! ```text
//! Level 0: data-dir lock, KeyValueStore
//! Level 1: Ledger (bootstraps genesis), Request Pool, Signature Exclusion
//! Level 2: Star Registry (depends on Level 1 through their ports)
//! ```
//!
//! ## Thread Safety
//!
//! Every service serializes its own writes internally, so the container
//! hands out plain `Arc`s with no outer `RwLock`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use shared_types::{SystemTimeSource, TimeSource};
use sn_01_ledger::{LedgerApi, LedgerDependencies, LedgerError, LedgerService};
use sn_02_request_pool::{RequestPoolDependencies, RequestPoolService};
use sn_03_signature_exclusion::SignatureExclusionService;
use sn_04_star_registry::{
    AcceptAllVerifier, SignatureVerifier, StarRegistry, StarRegistryDependencies,
};

use crate::adapters::storage::{open_store, SharedStore, StoreOpenError};
use crate::adapters::{DataDirLock, LockError};
use crate::container::config::{ConfigError, NodeConfig, StorageBackend};

/// Clock handle shared by the ledger and the pool.
pub type SharedClock = Arc<dyn TimeSource>;

/// Ledger over the shared store.
pub type ConcreteLedger = LedgerService<SharedStore, SharedClock>;

/// Request pool over the shared store.
pub type ConcreteRequestPool = RequestPoolService<SharedStore, SharedClock>;

/// Signature exclusion set over the shared store.
pub type ConcreteExclusions = SignatureExclusionService<SharedStore>;

/// Anything that stops the node from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error(transparent)]
    Storage(#[from] StoreOpenError),

    #[error("Ledger failed to open")]
    Ledger(#[from] LedgerError),
}

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Ledger (sn-01). Bootstrapped before the container is returned.
    pub ledger: Arc<ConcreteLedger>,

    /// Request Pool (sn-02).
    pub pool: Arc<ConcreteRequestPool>,

    /// Signature Exclusion Set (sn-03).
    pub exclusions: Arc<ConcreteExclusions>,

    /// Star Registry (sn-04). Orchestrates the three above.
    pub registry: Arc<StarRegistry>,

    /// Signature check the registry runs; kept to report what was wired.
    pub verifier: Arc<dyn SignatureVerifier>,

    /// The one store every subsystem writes to.
    pub store: SharedStore,

    /// Node configuration (immutable after initialization).
    pub config: NodeConfig,

    /// Held for the lifetime of the container; released on drop.
    _data_dir_lock: Option<DataDirLock>,
}

impl SubsystemContainer {
    /// Open the configured store and build every subsystem over it.
    ///
    /// The durable backend takes an exclusive lock on the data directory
    /// first, so two nodes never share one store.
    #[instrument(name = "subsystem_init", skip(config))]
    pub fn open(config: NodeConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let lock = match config.storage.backend {
            StorageBackend::RocksDb => Some(DataDirLock::acquire(&config.storage.data_dir)?),
            StorageBackend::Memory => None,
        };
        let store = open_store(&config.storage)?;

        let mut container = Self::assemble(
            config,
            store,
            Arc::new(SystemTimeSource),
            Arc::new(AcceptAllVerifier),
        )?;
        container._data_dir_lock = lock;
        Ok(container)
    }

    /// Build the subsystems over an already opened store.
    pub fn assemble(
        config: NodeConfig,
        store: SharedStore,
        clock: SharedClock,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, StartupError> {
        info!("[runtime] Initializing Star-Notary subsystem container");

        let ledger = Arc::new(ConcreteLedger::open(
            LedgerDependencies {
                kv_store: Arc::clone(&store),
                time_source: Arc::clone(&clock),
            },
            config.ledger.clone(),
        )?);
        info!(height = ledger.height()?, "  [sn-01] Ledger opened");

        let pool = Arc::new(ConcreteRequestPool::new(
            RequestPoolDependencies {
                kv_store: Arc::clone(&store),
                time_source: clock,
            },
            config.pool.clone(),
        ));
        info!(
            window_secs = config.pool.validation_window_secs,
            "  [sn-02] Request pool initialized"
        );

        let exclusions = Arc::new(ConcreteExclusions::new(Arc::clone(&store)));
        info!("  [sn-03] Signature exclusion set initialized");

        let registry = Arc::new(StarRegistry::new(
            StarRegistryDependencies {
                ledger: ledger.clone(),
                pool: pool.clone(),
                exclusions: exclusions.clone(),
                verifier: Arc::clone(&verifier),
            },
            config.registry.clone(),
        ));
        info!("  [sn-04] Star registry initialized");

        Ok(Self {
            ledger,
            pool,
            exclusions,
            registry,
            verifier,
            store,
            config,
            _data_dir_lock: None,
        })
    }

    /// Whether registrations go through without a real signature check.
    pub fn accepts_unverified_signatures(&self) -> bool {
        self.verifier.accepts_everything()
    }

    /// Whether the data directory is locked by this container.
    pub fn holds_data_dir_lock(&self) -> bool {
        self._data_dir_lock.is_some()
    }
}
