use edmont::Error;
use edmont::hash::sha512;
use edmont::keys::derive_public_key;
use edmont::rng::{Csprng, EntropySource};
use edmont::signature::{
    SignOptions, preview_nonce_with, sign, sign_with, sign_with_options, verify, verify_edwards,
};

// Reference keypair: the Waves "cryptographic practical details" seed.
const SEED_HEX: &str = "60687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2965";
const PUBLIC_HEX: &str = "c494a9e448d58fe9afe07d53d3ad9eb6a15baac0d837eed4fac62e842e9f7862";
const EDWARDS_HEX: &str = "8b8894051dc0b84cf96431f64ae1a99cf889dfc8ed2a634560e405c982ee2093";

fn seed() -> [u8; 32] {
    hex::decode(SEED_HEX).unwrap().try_into().unwrap()
}

fn public_key() -> [u8; 32] {
    hex::decode(PUBLIC_HEX).unwrap().try_into().unwrap()
}

/// Entropy source that replays a fixed buffer, for reproducible
/// randomized-nonce signatures.
struct FixedEntropy([u8; 64]);

impl EntropySource for FixedEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.copy_from_slice(&self.0[..dest.len()]);
    }
}

fn fixed_options(nonce_seed: &[u8]) -> SignOptions<'_> {
    SignOptions {
        fixed_nonce_seed: Some(nonce_seed),
        allow_fixed_nonce: true,
    }
}

#[test]
fn sign_verify_round_trip() {
    let message = b"Hello, world!";

    let signature = sign(message, &seed()).unwrap();
    assert!(verify(&signature, message, &public_key()));
}

#[test]
fn sign_verify_round_trip_for_random_keys_and_messages() {
    let mut rng = Csprng::new();

    for length in [0usize, 1, 32, 63, 64, 65, 300] {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);

        let mut message = vec![0u8; length];
        rng.fill_bytes(&mut message);

        let public = derive_public_key(&seed, false).unwrap();
        let signature = sign(&message, &seed).unwrap();

        assert!(verify(&signature, &message, &public), "length {length}");
    }
}

#[test]
fn empty_message_round_trips() {
    let signature = sign(b"", &seed()).unwrap();
    assert!(verify(&signature, b"", &public_key()));
}

#[test]
fn default_nonces_make_signatures_differ() {
    let message = b"same message";

    let first = sign(message, &seed()).unwrap();
    let second = sign(message, &seed()).unwrap();

    assert_ne!(first[..32], second[..32], "nonce points must differ");
    assert!(verify(&first, message, &public_key()));
    assert!(verify(&second, message, &public_key()));
}

#[test]
fn fixed_nonce_signature_matches_the_reference_vector() {
    let signature =
        sign_with_options(b"Hello, world!", &seed(), &fixed_options(b"123")).unwrap();

    assert_eq!(
        hex::encode(signature),
        "e610a944b2a36e5a2444674ebb3d0cfb08c19db99fa5d31787245b2096cde037\
         60bb7eeaf035729688cb507f023880d47b5c64e2dd4002ebc0bc4335ded37c84"
    );
    assert!(verify(&signature, b"Hello, world!", &public_key()));
}

#[test]
fn fixed_nonce_is_deterministic_and_message_independent_in_r() {
    let first = sign_with_options(b"Hello, world!", &seed(), &fixed_options(b"123")).unwrap();
    let again = sign_with_options(b"Hello, world!", &seed(), &fixed_options(b"123")).unwrap();
    assert_eq!(first, again);

    // Same nonce seed over a different message: same R, different S.
    let other = sign_with_options(
        b"Hello, world!Hello, world!",
        &seed(),
        &fixed_options(b"123"),
    )
    .unwrap();

    assert_eq!(first[..32], other[..32]);
    assert_ne!(first[32..], other[32..]);
    assert_eq!(
        hex::encode(&other[32..]),
        "181e6cdd8eff2d1235949797b9b1110cc071fce751c9b41d1c69adc6538a4680"
    );
}

#[test]
fn fixed_nonce_requires_the_opt_in_gate() {
    let options = SignOptions {
        fixed_nonce_seed: Some(b"123"),
        allow_fixed_nonce: false,
    };

    assert_eq!(
        sign_with_options(b"Hello, world!", &seed(), &options).unwrap_err(),
        Error::PolicyViolation
    );
}

#[test]
fn injected_entropy_reproduces_the_randomized_vector() {
    let mut rnd = [0u8; 64];
    for (index, byte) in rnd.iter_mut().enumerate() {
        *byte = index as u8;
    }

    let signature = sign_with(
        b"Hello, world!",
        &seed(),
        &SignOptions::default(),
        &sha512,
        &mut FixedEntropy(rnd),
    )
    .unwrap();

    assert_eq!(
        hex::encode(signature),
        "037d83dfaae56ca5f3442120d4b04cc27553fe85c96081f34c899563b2a812e8\
         2bcb73b825669500c23b9ee783d02021cff4b48377b67c75a0eac8db3b110389"
    );
    assert!(verify(&signature, b"Hello, world!", &public_key()));
}

#[test]
fn nonce_preview_matches_the_signature_nonce_point() {
    let preview = preview_nonce_with(
        &seed(),
        &fixed_options(b"123"),
        &sha512,
        &mut Csprng::new(),
    )
    .unwrap();

    let signature =
        sign_with_options(b"Hello, world!", &seed(), &fixed_options(b"123")).unwrap();

    assert_eq!(preview, signature[..32]);
    assert_eq!(
        hex::encode(preview),
        "e610a944b2a36e5a2444674ebb3d0cfb08c19db99fa5d31787245b2096cde037"
    );
}

#[test]
fn known_waves_signature_verifies() {
    // A real transaction signature produced by the Waves node stack.
    let message = hex::decode(
        "04c494a9e448d58fe9afe07d53d3ad9eb6a15baac0d837eed4fac62e842e9f78\
         6201986f02b66bd20847791f978ed77cac9d3c234e77d51cb50bf25d4bbeb5af\
         ab9d01986f02b66bd20847791f978ed77cac9d3c234e77d51cb50bf25d4bbeb5\
         afab9d000001586c6223eb0000000000000001000000000000000101\
         54ecbce7a560ac9f7ff255e6f5e22f9669a9ab18a317a0e1f5000401020304",
    )
    .unwrap();
    let signature = hex::decode(
        "58510bf43ea5eca04851b2d10988c02b7ae45e96d3ab3629b32d3e6dd1474988\
         a58bc98db62824b6df6732bab3322f1c3c9ecbeebff1525bd3baff631bc2c582",
    )
    .unwrap();

    assert!(verify(&signature, &message, &public_key()));
}

#[test]
fn edwards_level_verification_agrees() {
    let mut signature =
        sign_with_options(b"Hello, world!", &seed(), &fixed_options(b"123")).unwrap();

    // At the Edwards level the polarity bit lives in the key, not in S.
    signature[63] &= 0x7F;
    let edwards: [u8; 32] = hex::decode(EDWARDS_HEX).unwrap().try_into().unwrap();

    assert!(verify_edwards(&signature, b"Hello, world!", &edwards));
    assert!(!verify_edwards(&signature, b"other message", &edwards));
}

#[test]
fn both_public_key_polarities_verify() {
    let message = b"Hello, world!";
    let signature = sign(message, &seed()).unwrap();

    let plain = derive_public_key(&seed(), false).unwrap();
    let flipped = derive_public_key(&seed(), true).unwrap();

    assert_eq!(plain[31] ^ 0x80, flipped[31]);
    assert!(verify(&signature, message, &plain));
    assert!(verify(&signature, message, &flipped));
}

#[test]
fn every_signature_bit_flip_breaks_verification() {
    let message = b"Hello, world!";
    let signature =
        sign_with_options(message, &seed(), &fixed_options(b"123")).unwrap();
    let public = public_key();

    assert!(verify(&signature, message, &public));

    for position in 0..64 {
        for bit in 0..8 {
            let mut tampered = signature;
            tampered[position] ^= 1 << bit;

            assert!(
                !verify(&tampered, message, &public),
                "flip of byte {position} bit {bit} went undetected"
            );
        }
    }
}

#[test]
fn every_public_key_bit_flip_except_polarity_breaks_verification() {
    let message = b"Hello, world!";
    let signature =
        sign_with_options(message, &seed(), &fixed_options(b"123")).unwrap();
    let public = public_key();

    for position in 0..32 {
        for bit in 0..8 {
            // Bit 255 of the Montgomery encoding is ignored by the
            // conversion, both polarities are the same key.
            if position == 31 && bit == 7 {
                continue;
            }

            let mut tampered = public;
            tampered[position] ^= 1 << bit;

            assert!(
                !verify(&signature, message, &tampered),
                "flip of byte {position} bit {bit} went undetected"
            );
        }
    }
}

#[test]
fn malformed_lengths_fold_into_false() {
    let message = b"Hello, world!";
    let signature = sign(message, &seed()).unwrap();

    assert!(!verify(&signature[..63], message, &public_key()));
    assert!(!verify(&signature, message, &public_key()[..31]));
    assert!(!verify(&[], message, &public_key()));
}

#[test]
fn sign_rejects_bad_seed_lengths() {
    assert_eq!(sign(b"msg", &[0u8; 16]).unwrap_err(), Error::InvalidKeyLength);
    assert_eq!(sign(b"msg", &[0u8; 64]).unwrap_err(), Error::InvalidKeyLength);
}
