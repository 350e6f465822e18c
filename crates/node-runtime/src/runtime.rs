//! # Node Runtime
//!
//! Startup checks and background work around the subsystem container.
//!
//! ## Startup Sequence
//!
//! 1. Validate every stored block and link (failures are logged, not fatal)
//! 2. Reconcile the registry's bookkeeping against the chain
//! 3. Spawn the request-pool sweeper
//!
//! Shutdown is a `watch` channel flipped to `true`; the sweeper observes it
//! and exits.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use sn_01_ledger::LedgerApi;
use sn_02_request_pool::RequestPoolApi;
use sn_04_star_registry::StarRegistryApi;

use crate::container::SubsystemContainer;

/// The node runtime orchestrating the subsystems.
pub struct NodeRuntime {
    container: Arc<SubsystemContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    sweeper: Option<JoinHandle<()>>,
}

impl NodeRuntime {
    pub fn new(container: SubsystemContainer) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container: Arc::new(container),
            shutdown_tx,
            shutdown_rx,
            sweeper: None,
        }
    }

    pub fn container(&self) -> &Arc<SubsystemContainer> {
        &self.container
    }

    /// Run the startup checks and spawn background tasks.
    pub async fn start(&mut self) -> Result<()> {
        info!("===========================================");
        info!("  Star-Notary Node Starting");
        info!("===========================================");

        let height = self.container.ledger.height()?;
        let invalid = self
            .container
            .ledger
            .validate_chain()
            .context("chain validation could not complete")?;
        if invalid.is_empty() {
            info!(height, "[runtime] Chain verified");
        } else {
            error!(
                height,
                invalid_heights = ?invalid,
                "[runtime] Chain failed validation; serving anyway"
            );
        }

        if self.container.accepts_unverified_signatures() {
            warn!("[runtime] Signature verifier accepts every signature; plug in a real verifier before exposing the node");
        }

        let report = self
            .container
            .registry
            .reconcile()
            .context("registry reconcile failed")?;
        if report.is_clean() {
            info!(registrations = report.registrations, "[runtime] Registry consistent with chain");
        } else {
            warn!(
                registrations = report.registrations,
                signatures_marked = report.signatures_marked,
                entries_evicted = report.entries_evicted,
                "[runtime] Registry repaired from chain"
            );
        }

        let interval = Duration::from_secs(self.container.config.runtime.sweep_interval_secs);
        self.sweeper = Some(spawn_pool_sweeper(
            self.container.pool.clone(),
            interval,
            self.shutdown_rx.clone(),
        ));

        info!("===========================================");
        info!("  Star-Notary Node Running");
        info!("===========================================");
        Ok(())
    }

    /// Signal shutdown and wait for background tasks to stop.
    pub async fn shutdown(&mut self) {
        info!("[runtime] Initiating graceful shutdown...");
        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.sweeper.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "[runtime] Pool sweeper did not stop cleanly");
            }
        }

        info!("[runtime] Shutdown complete");
    }
}

/// Periodically evict expired request-pool entries until `shutdown` flips.
pub fn spawn_pool_sweeper(
    pool: Arc<dyn RequestPoolApi>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match pool.sweep_expired() {
                        Ok(0) => {}
                        Ok(evicted) => debug!(evicted, "[runtime] Swept expired pool entries"),
                        Err(e) => warn!(error = %e, "[runtime] Pool sweep failed"),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("[runtime] Pool sweeper stopping");
                        break;
                    }
                }
            }
        }
    })
}
