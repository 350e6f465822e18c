//! # Registration Flow
//!
//! request_validation → validate_signature → register_star, driven through
//! a fully assembled node so the registry, pool, exclusion set and ledger
//! all share one store.

#[cfg(test)]
mod tests {
    use shared_store::InMemoryKVStore;
    use shared_types::{ManualTimeSource, SignatureStatus};
    use sn_01_ledger::LedgerApi;
    use sn_02_request_pool::{PoolError, RequestPoolApi};
    use sn_03_signature_exclusion::SignatureExclusionApi;
    use sn_04_star_registry::{RegistryError, Star, StarRegistration, StarRegistryApi};
    use std::sync::Arc;

    use crate::integration::fixtures::{node_over, sample_star, START};

    const ADDRESS: &str = "142BDCeSGbXjWKaAnYXbMpZ6sbrSAo3DpZ";
    const SIGNATURE: &str = "H6ZrGrF0Y4rMGBMRT2+hHWGbThTIyhBS0dNKQRov9Yg6GgXcHxtO9GJN4nwD2yNXpnXHTWU9i+qdw5vpsooryLU=";

    #[test]
    fn test_full_registration() {
        let clock = Arc::new(ManualTimeSource::new(START));
        let node = node_over(Arc::new(InMemoryKVStore::new()), clock.clone());

        let challenge = node.registry.request_validation(ADDRESS).unwrap();
        assert_eq!(challenge.message, format!("{ADDRESS}:{START}:starRegistry"));
        assert_eq!(challenge.validation_window, 300);

        clock.advance(20);
        let validation = node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();
        assert!(validation.register_star);
        assert_eq!(validation.message_signature, SignatureStatus::Valid);
        assert_eq!(validation.status.validation_window, 280);
        // The window is measured from the original request.
        assert_eq!(validation.status.request_timestamp, START);

        let block = node.registry.register_star(ADDRESS, sample_star()).unwrap();
        assert_eq!(block.height(), 1);
        assert_eq!(node.ledger.height().unwrap(), 1);

        let registration = StarRegistration::from_block(&block).unwrap();
        assert_eq!(registration.address, ADDRESS);
        assert_eq!(
            registration.star.decoded_story().as_deref(),
            Some(sample_star().story.as_str())
        );

        assert!(matches!(
            node.pool.get_entry(ADDRESS),
            Err(PoolError::NotFound { .. })
        ));
        assert!(!node.exclusions.is_unused(SIGNATURE).unwrap());

        let by_address = node.registry.stars_by_address(ADDRESS).unwrap();
        assert_eq!(by_address.len(), 1);
        assert_eq!(
            node.registry.star_by_hash(block.hash()).unwrap().map(|b| b.height()),
            Some(1)
        );
    }

    #[test]
    fn test_signature_cannot_be_replayed() {
        let node = node_over(
            Arc::new(InMemoryKVStore::new()),
            Arc::new(ManualTimeSource::new(START)),
        );

        node.registry.request_validation(ADDRESS).unwrap();
        node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();
        node.registry.register_star(ADDRESS, sample_star()).unwrap();

        node.registry.request_validation(ADDRESS).unwrap();
        assert!(matches!(
            node.registry.validate_signature(ADDRESS, SIGNATURE),
            Err(RegistryError::SignatureAlreadyUsed)
        ));
        assert!(matches!(
            node.registry.register_star(ADDRESS, sample_star()),
            Err(RegistryError::NotValidated { .. })
        ));
        assert_eq!(node.ledger.height().unwrap(), 1);
    }

    #[test]
    fn test_expired_request_cannot_register() {
        let clock = Arc::new(ManualTimeSource::new(START));
        let node = node_over(Arc::new(InMemoryKVStore::new()), clock.clone());

        node.registry.request_validation(ADDRESS).unwrap();
        node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();

        clock.advance(300);
        assert!(matches!(
            node.registry.register_star(ADDRESS, sample_star()),
            Err(RegistryError::NotValidated { .. })
        ));
        assert!(matches!(
            node.registry.validate_signature(ADDRESS, SIGNATURE),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(node.exclusions.is_unused(SIGNATURE).unwrap());
        assert_eq!(node.ledger.height().unwrap(), 0);
    }

    #[test]
    fn test_repeat_request_keeps_original_window() {
        let clock = Arc::new(ManualTimeSource::new(START));
        let node = node_over(Arc::new(InMemoryKVStore::new()), clock.clone());

        node.registry.request_validation(ADDRESS).unwrap();
        clock.advance(100);
        let again = node.registry.request_validation(ADDRESS).unwrap();

        assert_eq!(again.request_timestamp, START);
        assert_eq!(again.validation_window, 200);
    }

    #[test]
    fn test_invalid_star_leaves_request_usable() {
        let node = node_over(
            Arc::new(InMemoryKVStore::new()),
            Arc::new(ManualTimeSource::new(START)),
        );
        node.registry.request_validation(ADDRESS).unwrap();
        node.registry.validate_signature(ADDRESS, SIGNATURE).unwrap();

        let long_story = Star::new("1h", "2d", "x".repeat(501));
        assert!(matches!(
            node.registry.register_star(ADDRESS, long_story),
            Err(RegistryError::InvalidStar { .. })
        ));

        assert!(node.pool.get_entry(ADDRESS).unwrap().is_signed());
        node.registry.register_star(ADDRESS, sample_star()).unwrap();
    }

    #[test]
    fn test_addresses_register_concurrently() {
        let node = node_over(
            Arc::new(InMemoryKVStore::new()),
            Arc::new(ManualTimeSource::new(START)),
        );

        std::thread::scope(|s| {
            for i in 0..8 {
                let node = &node;
                s.spawn(move || {
                    let address = format!("1Addr{i}");
                    let signature = format!("sig-{i}");
                    node.registry.request_validation(&address).unwrap();
                    node.registry.validate_signature(&address, &signature).unwrap();
                    node.registry.register_star(&address, sample_star()).unwrap();
                });
            }
        });

        assert_eq!(node.ledger.height().unwrap(), 8);
        assert!(node.ledger.validate_chain().unwrap().is_empty());
        for i in 0..8 {
            assert_eq!(
                node.registry.stars_by_address(&format!("1Addr{i}")).unwrap().len(),
                1
            );
        }
    }
}
