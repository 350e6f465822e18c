//! # Recovery
//!
//! The append is the commit point: a crash after it leaves the pool entry
//! and the exclusion record behind. These tests fail the bookkeeping
//! writes, restart a node over the same store and check that startup
//! repairs them.

#[cfg(test)]
mod tests {
    use node_runtime::NodeRuntime;
    use shared_store::{FaultyKVStore, InMemoryKVStore, Keyspace};
    use shared_types::ManualTimeSource;
    use sn_01_ledger::LedgerApi;
    use sn_02_request_pool::RequestPoolApi;
    use sn_03_signature_exclusion::SignatureExclusionApi;
    use sn_04_star_registry::{RegistryError, StarRegistryApi};
    use std::sync::Arc;

    use crate::integration::fixtures::{node_over, sample_star, START};

    const ADDRESS: &str = "1RecoveryAddr";
    const SIGNATURE: &str = "recovery-sig";

    type Store = Arc<FaultyKVStore<InMemoryKVStore>>;

    fn faulty_store() -> Store {
        Arc::new(FaultyKVStore::new(InMemoryKVStore::new()))
    }

    fn register_with_failing(store: &Store, clock: &Arc<ManualTimeSource>, keyspace: Keyspace) {
        let node = node_over(store.clone(), clock.clone());
        node.registry.request_validation(ADDRESS).unwrap();
        node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();

        store.scope_to(keyspace);
        store.set_fail_writes(true);
        node.registry.register_star(ADDRESS, sample_star()).unwrap();
        store.set_fail_writes(false);
    }

    #[test]
    fn test_restart_marks_signature_lost_in_crash() {
        let store = faulty_store();
        let clock = Arc::new(ManualTimeSource::new(START));
        register_with_failing(&store, &clock, Keyspace::SIGNATURE_EXCLUSION);

        let node = node_over(store.clone(), clock);
        assert_eq!(node.ledger.height().unwrap(), 1);
        assert!(node.exclusions.is_unused(SIGNATURE).unwrap());

        let report = node.registry.reconcile().unwrap();
        assert_eq!(report.registrations, 1);
        assert_eq!(report.signatures_marked, 1);
        assert_eq!(
            node.exclusions.consumed_by(SIGNATURE).unwrap().as_deref(),
            Some(ADDRESS)
        );

        node.registry.request_validation(ADDRESS).unwrap();
        assert!(matches!(
            node.registry.validate_signature(ADDRESS, SIGNATURE),
            Err(RegistryError::SignatureAlreadyUsed)
        ));
    }

    #[test]
    fn test_restart_evicts_pool_entry_left_by_crash() {
        let store = faulty_store();
        let clock = Arc::new(ManualTimeSource::new(START));
        register_with_failing(&store, &clock, Keyspace::REQUEST_POOL);

        let node = node_over(store.clone(), clock);
        assert!(node.pool.get_entry(ADDRESS).unwrap().is_signed());

        let report = node.registry.reconcile().unwrap();
        assert_eq!(report.entries_evicted, 1);
        assert!(node.pool.get_entry(ADDRESS).is_err());

        // A second pass has nothing left to do.
        assert!(node.registry.reconcile().unwrap().is_clean());
    }

    #[test]
    fn test_failed_append_commits_nothing() {
        let store = faulty_store();
        let clock = Arc::new(ManualTimeSource::new(START));
        let node = node_over(store.clone(), clock);
        node.registry.request_validation(ADDRESS).unwrap();
        node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();

        store.scope_to(Keyspace::LEDGER_META);
        store.set_fail_writes(true);
        assert!(matches!(
            node.registry.register_star(ADDRESS, sample_star()),
            Err(RegistryError::Ledger(_))
        ));
        store.set_fail_writes(false);

        assert_eq!(node.ledger.height().unwrap(), 0);
        assert!(node.ledger.get_block(1).is_err());
        assert!(node.exclusions.is_unused(SIGNATURE).unwrap());
        // The signed request survives for a retry.
        node.registry.register_star(ADDRESS, sample_star()).unwrap();
        assert_eq!(node.ledger.height().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_node_start_runs_reconcile() {
        let store = faulty_store();
        let clock = Arc::new(ManualTimeSource::new(START));
        register_with_failing(&store, &clock, Keyspace::SIGNATURE_EXCLUSION);

        let mut runtime = NodeRuntime::new(node_over(store.clone(), clock));
        runtime.start().await.unwrap();

        assert!(!runtime.container().exclusions.is_unused(SIGNATURE).unwrap());
        runtime.shutdown().await;
    }
}
