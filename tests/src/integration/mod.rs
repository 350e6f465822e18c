//! Integration flows across the Star-Notary crates.

pub mod ledger_properties;
pub mod recovery;
pub mod registration_flow;

#[cfg(test)]
pub(crate) mod fixtures {
    use node_runtime::adapters::storage::SharedStore;
    use node_runtime::{NodeConfig, SubsystemContainer};
    use shared_types::ManualTimeSource;
    use sn_04_star_registry::{AcceptAllVerifier, Star};
    use std::sync::Arc;

    /// 2023-11-14T22:13:20Z
    pub const START: u64 = 1_700_000_000;

    /// A node over `store` with a hand-driven clock and the accept-all verifier.
    pub fn node_over(store: SharedStore, clock: Arc<ManualTimeSource>) -> SubsystemContainer {
        SubsystemContainer::assemble(
            NodeConfig::default(),
            store,
            clock,
            Arc::new(AcceptAllVerifier),
        )
        .unwrap()
    }

    pub fn sample_star() -> Star {
        Star::new(
            "16h 29m 1.0s",
            "-26° 29' 24.9",
            "Found star using https://www.google.com/sky/",
        )
    }
}
