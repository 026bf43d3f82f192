//! Random number generation.
//!
//! Randomness enters the signature engine in exactly one place: the 64
//! fresh bytes mixed into nonce derivation (and, for callers, key seed
//! generation). This module provides a ChaCha20-based deterministic
//! random bit generator seeded from OS entropy, plus the [`EntropySource`]
//! seam the signing core is generic over so tests can inject fixed bytes.

pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;

/// A source of random bytes for nonce derivation and key seeds.
///
/// Implemented by [`Csprng`] for production use; test code implements it
/// over fixed buffers to make signatures reproducible.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}
