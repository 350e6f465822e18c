//! # Signature Exclusion Set (sn-03)
//!
//! One-way denylist: once a signature has authorized a block it is recorded
//! here with the address it belonged to, and can never authorize another.
//!
//! Records are created once and never updated or deleted.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::ExclusionError;
pub use ports::inbound::SignatureExclusionApi;
pub use service::SignatureExclusionService;
