//! # Outbound Ports (Driven Ports)

/// Wallet signature check.
///
/// Implementations decide whether `signature` is `address`'s signature over
/// `message`. Cryptographic wallet verification lives outside this crate.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool;

    /// True for stand-ins that approve every signature without checking it.
    fn accepts_everything(&self) -> bool {
        false
    }
}
