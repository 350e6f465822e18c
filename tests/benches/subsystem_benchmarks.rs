//! # Star-Notary Subsystem Benchmarks
//!
//! | Subsystem | Operation | Expectation |
//! |-----------|-----------|-------------|
//! | sn-01 Ledger | `add_block` | constant in chain length (tip counter, no scan) |
//! | sn-01 Ledger | `height` | constant in chain length |
//! | sn-01 Ledger | `validate_chain` | linear, spread over the rayon pool |
//! | sn-02 Request Pool | `add_entry` / `get_entry` | dominated by the sweep scan |
//! | sn-04 Star Registry | full registration | one append plus bookkeeping |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use shared_store::InMemoryKVStore;
use shared_types::{ManualTimeSource, SystemTimeSource};
use sn_01_ledger::{LedgerApi, LedgerConfig, LedgerDependencies, LedgerService};
use sn_02_request_pool::{RequestPoolApi, RequestPoolConfig, RequestPoolDependencies, RequestPoolService};
use sn_04_star_registry::{AcceptAllVerifier, Star, StarRegistryApi};
use node_runtime::{NodeConfig, SubsystemContainer};
use std::sync::Arc;
use std::time::Duration;

type BenchLedger = LedgerService<Arc<InMemoryKVStore>, SystemTimeSource>;

fn ledger_with_blocks(count: u64) -> BenchLedger {
    let ledger = LedgerService::open(
        LedgerDependencies {
            kv_store: Arc::new(InMemoryKVStore::new()),
            time_source: SystemTimeSource,
        },
        LedgerConfig::default(),
    )
    .unwrap();
    for i in 0..count {
        ledger.add_block(json!({ "n": i })).unwrap();
    }
    ledger
}

// ============================================================================
// SN-01: Ledger
// ============================================================================

fn bench_ledger_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sn-01-ledger-append");
    group.measurement_time(Duration::from_secs(5));

    for chain_length in [10u64, 1_000, 10_000] {
        let ledger = ledger_with_blocks(chain_length);
        group.bench_with_input(
            BenchmarkId::new("add_block", chain_length),
            &chain_length,
            |b, _| b.iter(|| black_box(ledger.add_block(json!("payload")).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("height", chain_length),
            &chain_length,
            |b, _| b.iter(|| black_box(ledger.height().unwrap())),
        );
    }

    group.finish();
}

fn bench_ledger_validate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("sn-01-ledger-validate");
    group.sample_size(20);

    for chain_length in [100u64, 1_000, 5_000] {
        let ledger = ledger_with_blocks(chain_length);
        group.throughput(Throughput::Elements(chain_length + 1));
        group.bench_with_input(
            BenchmarkId::new("validate_chain", chain_length),
            &chain_length,
            |b, _| b.iter(|| black_box(ledger.validate_chain().unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// SN-02: Request Pool
// ============================================================================

fn bench_pool_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("sn-02-request-pool");

    for pool_size in [10usize, 1_000] {
        let pool = RequestPoolService::new(
            RequestPoolDependencies {
                kv_store: InMemoryKVStore::new(),
                time_source: ManualTimeSource::new(1_700_000_000),
            },
            RequestPoolConfig::default(),
        );
        for i in 0..pool_size {
            pool.add_entry(&format!("1Addr{i}")).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::new("get_entry", pool_size),
            &pool_size,
            |b, _| b.iter(|| black_box(pool.get_entry("1Addr0").unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("add_entry_existing", pool_size),
            &pool_size,
            |b, _| b.iter(|| black_box(pool.add_entry("1Addr0").unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// SN-04: Star Registry
// ============================================================================

fn bench_full_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("sn-04-star-registry");

    let node = SubsystemContainer::assemble(
        NodeConfig::default(),
        Arc::new(InMemoryKVStore::new()),
        Arc::new(SystemTimeSource),
        Arc::new(AcceptAllVerifier),
    )
    .unwrap();
    let star = Star::new("16h 29m 1.0s", "-26° 29' 24.9", "Found star using https://www.google.com/sky/");
    let mut counter = 0u64;

    group.bench_function("request_validate_register", |b| {
        b.iter(|| {
            counter += 1;
            let address = format!("1Bench{counter}");
            let signature = format!("sig-{counter}");
            node.registry.request_validation(&address).unwrap();
            node.registry.validate_signature(&address, &signature).unwrap();
            black_box(node.registry.register_star(&address, star.clone()).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ledger_append,
    bench_ledger_validate_chain,
    bench_pool_lookup,
    bench_full_registration,
);
criterion_main!(benches);
