//! # Ledger Properties
//!
//! Chain invariants checked through the public `LedgerApi`, with blocks
//! appended both directly and by concurrent writers.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use shared_store::{InMemoryKVStore, KeyValueStore, Keyspace};
    use shared_types::ManualTimeSource;
    use sn_01_ledger::{LedgerApi, LedgerConfig, LedgerDependencies, LedgerService, EMPTY_HASH};
    use std::sync::Arc;

    use crate::integration::fixtures::START;

    type Ledger = LedgerService<Arc<InMemoryKVStore>, Arc<ManualTimeSource>>;

    fn open_ledger(store: &Arc<InMemoryKVStore>) -> Ledger {
        LedgerService::open(
            LedgerDependencies {
                kv_store: Arc::clone(store),
                time_source: Arc::new(ManualTimeSource::new(START)),
            },
            LedgerConfig::default(),
        )
        .unwrap()
    }

    fn corrupt_body(store: &InMemoryKVStore, height: u64, body: Value) {
        let key = Keyspace::LEDGER_BLOCKS.height_key(height);
        let mut stored: Value = serde_json::from_slice(&store.get(&key).unwrap().unwrap()).unwrap();
        stored["body"] = body;
        store.put(&key, &serde_json::to_vec(&stored).unwrap()).unwrap();
    }

    #[test]
    fn test_bootstrap_append_and_tamper() {
        let store = Arc::new(InMemoryKVStore::new());
        let ledger = open_ledger(&store);

        assert_eq!(ledger.height().unwrap(), 0);
        let genesis = ledger.get_block(0).unwrap();
        assert_eq!(genesis.previous_block_hash(), EMPTY_HASH);

        ledger.add_block(json!("hello")).unwrap();
        assert_eq!(ledger.height().unwrap(), 1);
        let first = ledger.get_block(1).unwrap();
        assert_eq!(first.previous_block_hash(), genesis.hash());

        corrupt_body(&store, 1, json!("goodbye"));
        let refetched = ledger.get_block(1).unwrap();
        assert_ne!(refetched.compute_hash().unwrap(), refetched.hash());
        assert!(!ledger.validate_block(1).unwrap());
        assert_eq!(ledger.validate_chain().unwrap(), vec![1]);
    }

    #[test]
    fn test_chain_stays_valid_across_appends() {
        let store = Arc::new(InMemoryKVStore::new());
        let ledger = open_ledger(&store);

        for i in 0..50 {
            ledger.add_block(json!({ "n": i, "tags": ["a", "b"] })).unwrap();
            if i % 10 == 0 {
                assert!(ledger.validate_chain().unwrap().is_empty());
            }
        }

        assert_eq!(ledger.height().unwrap(), 50);
        assert!(ledger.validate_chain().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_appends_form_one_chain() {
        const WRITERS: u64 = 6;
        const PER_WRITER: u64 = 20;

        let store = Arc::new(InMemoryKVStore::new());
        let ledger = open_ledger(&store);
        ledger.add_block(json!("before")).unwrap();
        let start_height = ledger.height().unwrap();

        std::thread::scope(|s| {
            for writer in 0..WRITERS {
                let ledger = &ledger;
                s.spawn(move || {
                    for i in 0..PER_WRITER {
                        ledger.add_block(json!({ "writer": writer, "i": i })).unwrap();
                    }
                });
            }
        });

        let tip = ledger.height().unwrap();
        assert_eq!(tip, start_height + WRITERS * PER_WRITER);

        for height in start_height + 1..=tip {
            let block = ledger.get_block(height).unwrap();
            let previous = ledger.get_block(height - 1).unwrap();
            assert_eq!(block.height(), height);
            assert_eq!(block.previous_block_hash(), previous.hash());
        }
        assert!(ledger.validate_chain().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_continues_the_chain() {
        let store = Arc::new(InMemoryKVStore::new());
        let genesis_hash = {
            let ledger = open_ledger(&store);
            ledger.add_block(json!("one")).unwrap();
            ledger.add_block(json!("two")).unwrap();
            ledger.get_block(0).unwrap().hash().to_string()
        };

        let ledger = open_ledger(&store);
        assert_eq!(ledger.height().unwrap(), 2);
        assert_eq!(ledger.get_block(0).unwrap().hash(), genesis_hash);

        let third = ledger.add_block(json!("three")).unwrap();
        assert_eq!(third.height(), 3);
        assert!(ledger.validate_chain().unwrap().is_empty());
    }

    #[test]
    fn test_tampered_middle_block_breaks_its_own_check_only() {
        let store = Arc::new(InMemoryKVStore::new());
        let ledger = open_ledger(&store);
        for i in 0..5 {
            ledger.add_block(json!(i)).unwrap();
        }

        corrupt_body(&store, 3, json!("rewritten"));

        // Block 4 still points at the hash block 3 was sealed with.
        assert_eq!(ledger.validate_chain().unwrap(), vec![3]);
        assert!(ledger.validate_link(3).unwrap());
    }
}
