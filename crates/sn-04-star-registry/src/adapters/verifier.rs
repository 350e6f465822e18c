use crate::ports::outbound::SignatureVerifier;

/// Accepts every signature.
///
/// Stand-in until a wallet message verifier is wired; the node logs a
/// warning when it runs with this.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllVerifier;

impl SignatureVerifier for AcceptAllVerifier {
    fn verify(&self, _message: &str, _address: &str, _signature: &str) -> bool {
        true
    }

    fn accepts_everything(&self) -> bool {
        true
    }
}
