//! # Node Runtime Library
//!
//! Wires the Star-Notary subsystems over one shared store. The binary in
//! `main.rs` is a thin shell around [`NodeRuntime`]; everything here is
//! public so the workspace test suite can assemble a node in-process.
//!
//! ## Modules
//!
//! - `container/` - configuration and the subsystem container
//! - `adapters/` - storage backends and the data-directory lock
//! - `runtime` - startup checks, the pool sweeper, shutdown
//! - `logging` - `tracing-subscriber` setup

pub mod adapters;
pub mod container;
pub mod logging;
pub mod runtime;

pub use container::{ConfigError, NodeConfig, StartupError, SubsystemContainer};
pub use runtime::{spawn_pool_sweeper, NodeRuntime};
