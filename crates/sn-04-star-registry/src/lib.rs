//! # Star Registry (sn-04)
//!
//! Drives the registration handshake across the three core subsystems:
//!
//! ```text
//! request_validation ──→ RequestPool.add_entry          (challenge issued)
//! validate_signature ──→ SignatureExclusion.is_unused
//!                        SignatureVerifier.verify
//!                        RequestPool.update_signature   (address proven)
//! register_star      ──→ Ledger.add_block               (commit point)
//!                        RequestPool.remove_entry       (best effort)
//!                        SignatureExclusion.mark_used   (best effort)
//! ```
//!
//! The block append is the durable commit. The two bookkeeping writes after
//! it are logged on failure and repaired by [`StarRegistryApi::reconcile`],
//! which the node runs at startup.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::verifier::AcceptAllVerifier;
pub use domain::config::RegistryConfig;
pub use domain::errors::RegistryError;
pub use domain::responses::{ReconcileReport, SignatureValidation, ValidationChallenge};
pub use domain::star::{Star, StarRegistration};
pub use ports::inbound::StarRegistryApi;
pub use ports::outbound::SignatureVerifier;
pub use service::{StarRegistry, StarRegistryDependencies};
