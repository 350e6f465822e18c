//! # Shared Types Crate
//!
//! Primitive types shared across the Star-Notary subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers used by more than one subsystem
//!   (wallet addresses, signatures, timestamps) are defined here.
//! - **Injectable Time**: every subsystem reads the clock through
//!   [`TimeSource`], so expiry and sealing times are testable without sleeping.

pub mod entities;
pub mod time;

pub use entities::*;
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
