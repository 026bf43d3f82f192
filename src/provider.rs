//! Pluggable signature backends.
//!
//! Deployments may carry an accelerated implementation of the same
//! byte-level contract (typically a libsodium binding). The backend is
//! chosen once, when the [`Provider`] is constructed; calls never
//! re-probe the environment.

use crate::error::Error;
use crate::keys;
use crate::signature;

/// The byte-level signing contract a backend must implement.
///
/// Seeds are raw 32-byte secrets, public keys are Montgomery-form, and
/// signatures are 64 bytes carrying the polarity bit in the last byte.
/// An accelerated backend and the software engine must be
/// interchangeable under this trait: signatures from one verify under
/// the other.
pub trait SignatureProvider {
    /// Signs `message` with a randomized nonce.
    fn sign(&self, message: &[u8], seed: &[u8]) -> Result<[u8; 64], Error>;

    /// Verifies `signature` over `message` against a Montgomery-form
    /// public key. All failures fold into `false`.
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool;

    /// Derives the Montgomery-form public key for `seed`.
    fn derive_public_key(&self, seed: &[u8], flip_last_bit: bool) -> Result<[u8; 32], Error>;
}

/// This crate's own engine as a backend.
pub struct SoftwareProvider;

impl SignatureProvider for SoftwareProvider {
    fn sign(&self, message: &[u8], seed: &[u8]) -> Result<[u8; 64], Error> {
        signature::sign(message, seed)
    }

    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        signature::verify(signature, message, public_key)
    }

    fn derive_public_key(&self, seed: &[u8], flip_last_bit: bool) -> Result<[u8; 32], Error> {
        keys::derive_public_key(seed, flip_last_bit)
    }
}

/// The backend selected for a deployment.
pub enum Provider {
    /// An external implementation of the contract.
    Accelerated(Box<dyn SignatureProvider>),

    /// The built-in engine.
    Software(SoftwareProvider),
}

impl Provider {
    /// Chooses the backend once: the accelerated implementation when
    /// one is available, the software engine otherwise.
    pub fn select(accelerated: Option<Box<dyn SignatureProvider>>) -> Self {
        match accelerated {
            Some(backend) => Provider::Accelerated(backend),
            None => Provider::Software(SoftwareProvider),
        }
    }

    fn backend(&self) -> &dyn SignatureProvider {
        match self {
            Provider::Accelerated(backend) => backend.as_ref(),
            Provider::Software(software) => software,
        }
    }

    /// Signs through the selected backend.
    pub fn sign(&self, message: &[u8], seed: &[u8]) -> Result<[u8; 64], Error> {
        self.backend().sign(message, seed)
    }

    /// Verifies through the selected backend.
    pub fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        self.backend().verify(signature, message, public_key)
    }

    /// Derives a public key through the selected backend.
    pub fn derive_public_key(&self, seed: &[u8], flip_last_bit: bool) -> Result<[u8; 32], Error> {
        self.backend().derive_public_key(seed, flip_last_bit)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Software(SoftwareProvider)
    }
}
