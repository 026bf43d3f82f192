//! ChaCha20-based CSPRNG.
//!
//! A deterministic random bit generator over the ChaCha20 block
//! function, seeded from the operating system. It performs no heap
//! allocation and rekeys itself after every request so that a
//! compromise of the current state reveals nothing about past output.

use crate::os::sys_random;
use crate::rng::EntropySource;
use crate::rng::chacha20;

/// Cryptographically secure pseudorandom number generator.
///
/// Holds a secret ChaCha20 key, a zero nonce, and a running block
/// counter. Output is expanded block by block; after each request the
/// generator replaces its key with fresh keystream (forward secrecy).
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. The local
    /// copy is wiped once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Replaces the key with the first 32 bytes of a fresh keystream
    /// block, cutting the link to previously generated output.
    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl EntropySource for Csprng {
    /// Fills the buffer with keystream blocks, then rekeys.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;

        while offset < dest.len() {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);

            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(dest.len() - offset);
            dest[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
