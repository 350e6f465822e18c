//! # Star-Notary Test Suite
//!
//! Cross-crate tests that exercise the subsystems together over one store.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── ledger_properties.rs   # chain invariants under appends and tampering
//! │   ├── registration_flow.rs   # request → sign → register through a node
//! │   └── recovery.rs            # crashes between append and bookkeeping
//! └── benches/
//!     └── subsystem_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sn-tests
//! cargo test -p sn-tests integration::recovery
//! cargo bench -p sn-tests
//! ```

pub mod integration;
