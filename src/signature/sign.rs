//! Signing: nonce derivation, the challenge hash, and assembly of the
//! 64-byte signature.

use crate::curve::point::Point;
use crate::curve::scalar::Scalar;
use crate::error::Error;
use crate::hash::sha512;
use crate::keys::ExpandedKeypair;
use crate::rng::{Csprng, EntropySource};

/// The domain-separation prefix of the nonce hash: 0xFE followed by 31
/// bytes of 0xFF. No valid scalar encoding starts this way, so nonce
/// digests can never collide with other uses of the hash over key
/// material.
const NONCE_PREFIX: [u8; 32] = {
    let mut prefix = [0xFFu8; 32];
    prefix[0] = 0xFE;
    prefix
};

/// Controls how the signing nonce is derived.
///
/// The default derivation mixes 64 fresh random bytes into the nonce
/// hash, making signatures non-deterministic. A fixed nonce seed makes
/// the signature a pure function of `(seed, message, nonce seed)`,
/// which suits reproducible tests and audit replays but is catastrophic
/// if a nonce seed is ever reused across different messages by mistake,
/// so it must be enabled explicitly.
#[derive(Clone, Copy, Default)]
pub struct SignOptions<'a> {
    /// Derive the nonce deterministically from this seed instead of
    /// fresh randomness.
    pub fixed_nonce_seed: Option<&'a [u8]>,

    /// Opt-in gate for `fixed_nonce_seed`. Supplying a fixed seed
    /// without setting this is [`Error::PolicyViolation`].
    pub allow_fixed_nonce: bool,
}

/// Signs a message with the default digest (SHA-512), an OS-seeded
/// CSPRNG, and a random nonce.
///
/// `seed` is the raw 32-byte secret; any other length is
/// [`Error::InvalidKeyLength`].
pub fn sign(message: &[u8], seed: &[u8]) -> Result<[u8; 64], Error> {
    sign_with_options(message, seed, &SignOptions::default())
}

/// Signs a message with explicit nonce options, using the default
/// digest and an OS-seeded CSPRNG.
pub fn sign_with_options(
    message: &[u8],
    seed: &[u8],
    options: &SignOptions,
) -> Result<[u8; 64], Error> {
    sign_with(message, seed, options, &sha512, &mut Csprng::new())
}

/// The fully injected signing core.
///
/// Callers supply the 64-byte digest function and the entropy source;
/// everything the engine hashes or draws randomness from goes through
/// them, which makes the whole operation reproducible under test.
///
/// The signature is `R ‖ S` with the keypair's polarity bit ORed into
/// byte 63, so that verifiers holding only the Montgomery public key
/// can reconstruct the Edwards key's x-sign.
pub fn sign_with<D, R>(
    message: &[u8],
    seed: &[u8],
    options: &SignOptions,
    digest: &D,
    rng: &mut R,
) -> Result<[u8; 64], Error>
where
    D: Fn(&[u8]) -> [u8; 64],
    R: EntropySource,
{
    let seed: &[u8; 32] = seed.try_into().map_err(|_| Error::InvalidKeyLength)?;

    let keypair = ExpandedKeypair::expand(seed);

    let r = derive_nonce(seed, message, options, digest, rng)?;
    let r_encoded = Point::scalar_mult_base(&r.to_bytes()).encode();

    let mut challenge_input = Vec::with_capacity(64 + message.len());
    challenge_input.extend_from_slice(&r_encoded);
    challenge_input.extend_from_slice(&keypair.public_key());
    challenge_input.extend_from_slice(message);

    let h = Scalar::reduce(&digest(&challenge_input));
    let s = Scalar::mul_add(&h, &keypair.scalar(), &r);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_encoded);
    signature[32..].copy_from_slice(&s.to_bytes());
    signature[63] |= keypair.polarity();

    Ok(signature)
}

/// Returns the encoded nonce point `R` that signing would produce for
/// these options, without producing a signature.
///
/// Only meaningful with a fixed nonce seed; with the default random
/// derivation each call draws fresh entropy and previews nothing.
pub fn preview_nonce(seed: &[u8], options: &SignOptions) -> Result<[u8; 32], Error> {
    preview_nonce_with(seed, options, &sha512, &mut Csprng::new())
}

/// `preview_nonce` with an injected digest and entropy source.
pub fn preview_nonce_with<D, R>(
    seed: &[u8],
    options: &SignOptions,
    digest: &D,
    rng: &mut R,
) -> Result<[u8; 32], Error>
where
    D: Fn(&[u8]) -> [u8; 64],
    R: EntropySource,
{
    let seed: &[u8; 32] = seed.try_into().map_err(|_| Error::InvalidKeyLength)?;

    let r = derive_nonce(seed, &[], options, digest, rng)?;

    Ok(Point::scalar_mult_base(&r.to_bytes()).encode())
}

/// Derives the nonce scalar for one signature.
///
/// Default: `reduce(digest(PREFIX ‖ seed ‖ message ‖ rnd64))` with 64
/// fresh bytes from the entropy source. Fixed: `reduce(digest(PREFIX ‖
/// seed ‖ digest(nonce_seed)))`, gated behind `allow_fixed_nonce`. The
/// message is deliberately absent from the fixed form, so one nonce
/// seed yields one `R` regardless of what is signed.
fn derive_nonce<D, R>(
    seed: &[u8; 32],
    message: &[u8],
    options: &SignOptions,
    digest: &D,
    rng: &mut R,
) -> Result<Scalar, Error>
where
    D: Fn(&[u8]) -> [u8; 64],
    R: EntropySource,
{
    let mut input = Vec::with_capacity(64 + message.len() + 64);
    input.extend_from_slice(&NONCE_PREFIX);
    input.extend_from_slice(seed);

    match options.fixed_nonce_seed {
        Some(nonce_seed) => {
            if !options.allow_fixed_nonce {
                return Err(Error::PolicyViolation);
            }

            input.extend_from_slice(&digest(nonce_seed));
        }
        None => {
            let mut fresh = [0u8; 64];
            rng.fill_bytes(&mut fresh);

            input.extend_from_slice(message);
            input.extend_from_slice(&fresh);
        }
    }

    Ok(Scalar::reduce(&digest(&input)))
}
