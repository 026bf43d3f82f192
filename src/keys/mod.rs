//! Key expansion, public-key derivation, and Montgomery↔Edwards
//! conversion.
//!
//! The external key contract is Montgomery-form (X25519-style) 32-byte
//! public keys; the signature engine works on the twisted Edwards curve
//! internally. The two forms are related by the birational map
//!
//! ```text
//! y = (u − 1) / (u + 1)        u = (1 + y) / (1 − y)
//! ```
//!
//! between the Montgomery u-coordinate and the Edwards y-coordinate.
//! The Edwards x-coordinate's sign is not representable on the
//! Montgomery side; it travels out of band as the polarity bit carried
//! in a signature's last byte.

use crate::curve::field::FieldElement;
use crate::curve::point::Point;
use crate::curve::scalar::Scalar;
use crate::error::Error;
use crate::hash::sha512;

/// A secret scalar together with its Edwards public key.
///
/// The 64-byte expanded form (`to_bytes`) is the scalar followed by the
/// encoded public key: the signing engine reads the scalar from the
/// first half and hashes the second half into the challenge.
#[derive(Clone, Copy)]
pub struct ExpandedKeypair {
    scalar: Scalar,
    public: [u8; 32],
}

impl ExpandedKeypair {
    /// Expands a 32-byte seed: clamps it into the secret scalar and
    /// derives the Edwards public key by one base-point multiplication.
    pub fn expand(seed: &[u8; 32]) -> Self {
        let scalar = Scalar::clamp(seed);
        let public = Point::scalar_mult_base(&scalar.to_bytes()).encode();

        ExpandedKeypair { scalar, public }
    }

    /// The secret scalar.
    pub fn scalar(&self) -> Scalar {
        self.scalar
    }

    /// The encoded Edwards public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.public
    }

    /// The x-sign bit of the public key, already positioned as bit 7.
    ///
    /// This is the bit a signature carries in its last byte so that a
    /// Montgomery-form verifier can reconstruct the full Edwards key.
    pub fn polarity(&self) -> u8 {
        self.public[31] & 0x80
    }

    /// The 64-byte expanded secret: scalar ‖ public key.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.scalar.to_bytes());
        out[32..].copy_from_slice(&self.public);

        out
    }
}

/// Derives the Edwards public key for a 32-byte seed.
pub fn derive_edwards_public_key(seed: &[u8]) -> Result<[u8; 32], Error> {
    let seed: &[u8; 32] = seed.try_into().map_err(|_| Error::InvalidKeyLength)?;

    Ok(ExpandedKeypair::expand(seed).public_key())
}

/// Derives the Montgomery public key for a 32-byte seed.
///
/// The key is derived on the Edwards side and mapped through the
/// birational conversion. `flip_last_bit` XORs bit 255 of the result;
/// both polarities of the encoding verify the same signatures, since
/// the conversion back to Edwards form ignores that bit.
pub fn derive_public_key(seed: &[u8], flip_last_bit: bool) -> Result<[u8; 32], Error> {
    let edwards = derive_edwards_public_key(seed)?;
    let mut public = ed25519_to_curve25519(&edwards)?;

    if flip_last_bit {
        public[31] ^= 0x80;
    }

    Ok(public)
}

/// Maps a Montgomery public key to the Edwards y-encoding,
/// `y = (u − 1) / (u + 1)`.
///
/// Fails when `u = −1` (zero denominator); that encoding corresponds to
/// no affine Edwards point. The sign bit of the result is always clear,
/// the Montgomery form does not carry it.
pub fn curve25519_to_ed25519(public_key: &[u8; 32]) -> Result<[u8; 32], Error> {
    let u = FieldElement::from_bytes(public_key);
    let den = u + FieldElement::ONE;

    if !den.is_non_zero() {
        return Err(Error::PointDecoding);
    }

    let y = (u - FieldElement::ONE) * den.invert();

    Ok(y.to_bytes())
}

/// Maps an Edwards public key to the Montgomery u-encoding,
/// `u = (1 + y) / (1 − y)`.
///
/// Fails when `y = 1` (the identity's y-coordinate, zero denominator).
/// The encoded sign bit is ignored, it has no Montgomery counterpart.
pub fn ed25519_to_curve25519(public_key: &[u8; 32]) -> Result<[u8; 32], Error> {
    let y = FieldElement::from_bytes(public_key);
    let den = FieldElement::ONE - y;

    if !den.is_non_zero() {
        return Err(Error::PointDecoding);
    }

    let u = (FieldElement::ONE + y) * den.invert();

    Ok(u.to_bytes())
}

/// Derives the prehashed ("sodium-style") secret for a seed:
/// the first 32 bytes of SHA-512(seed).
///
/// Accelerated backends built on libsodium expand secrets by hashing;
/// seeds passed through this function produce keypairs those backends
/// agree with.
pub fn prehashed_secret(seed: &[u8]) -> Result<[u8; 32], Error> {
    if seed.len() != 32 {
        return Err(Error::InvalidKeyLength);
    }

    let digest = sha512(seed);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..32]);

    Ok(out)
}

/// A caller-owned cache of expanded keypairs, keyed by seed.
///
/// Key expansion costs a full base-point multiplication; callers
/// signing many messages under few keys can reuse the expansion through
/// this cache. Capacity is fixed at construction and the cache is
/// cleared wholesale when it would overflow, so memory use stays
/// bounded without an eviction order to maintain.
pub struct KeypairCache {
    capacity: usize,
    entries: Vec<([u8; 32], ExpandedKeypair)>,
}

impl KeypairCache {
    /// Creates an empty cache holding at most `capacity` keypairs.
    pub fn new(capacity: usize) -> Self {
        KeypairCache {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the expanded keypair for `seed`, expanding and storing
    /// it on a miss.
    pub fn get_or_expand(&mut self, seed: &[u8; 32]) -> ExpandedKeypair {
        if let Some((_, keypair)) = self.entries.iter().find(|(key, _)| key == seed) {
            return *keypair;
        }

        let keypair = ExpandedKeypair::expand(seed);

        if self.capacity == 0 {
            return keypair;
        }

        if self.entries.len() == self.capacity {
            self.entries.clear();
        }

        self.entries.push((*seed, keypair));

        keypair
    }

    /// Number of cached keypairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpandedKeypair, KeypairCache};

    #[test]
    fn expanded_bytes_are_scalar_then_public_key() {
        let keypair = ExpandedKeypair::expand(&[9u8; 32]);
        let bytes = keypair.to_bytes();

        assert_eq!(bytes[..32], keypair.scalar().to_bytes());
        assert_eq!(bytes[32..], keypair.public_key());
        assert_eq!(keypair.polarity(), bytes[63] & 0x80);
    }

    #[test]
    fn cache_clears_on_overflow() {
        let mut cache = KeypairCache::new(2);

        cache.get_or_expand(&[1u8; 32]);
        cache.get_or_expand(&[2u8; 32]);
        assert_eq!(cache.len(), 2);

        cache.get_or_expand(&[3u8; 32]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_hits_return_the_same_keypair() {
        let mut cache = KeypairCache::new(4);

        let first = cache.get_or_expand(&[5u8; 32]);
        let second = cache.get_or_expand(&[5u8; 32]);

        assert_eq!(cache.len(), 1);
        assert_eq!(first.to_bytes(), second.to_bytes());
    }

    #[test]
    fn zero_capacity_cache_stores_nothing() {
        let mut cache = KeypairCache::new(0);

        cache.get_or_expand(&[5u8; 32]);
        assert!(cache.is_empty());
    }
}
