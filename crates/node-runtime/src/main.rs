//! # Star-Notary Node
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Install logging
//! 3. Open the store and build the subsystems (genesis on first run)
//! 4. Validate the chain and reconcile the registry
//! 5. Run the request-pool sweeper until Ctrl-C

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::container::{NodeConfig, SubsystemContainer};
use node_runtime::logging::init_logging;
use node_runtime::NodeRuntime;

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;

    info!(
        backend = %config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        "Loaded node configuration"
    );

    let container = SubsystemContainer::open(config).context("failed to open subsystems")?;
    let mut runtime = NodeRuntime::new(container);
    runtime.start().await?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
