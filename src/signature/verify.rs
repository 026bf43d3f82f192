//! Verification against Montgomery-form and Edwards-form public keys.

use crate::curve::point::Point;
use crate::curve::scalar::Scalar;
use crate::error::Error;
use crate::hash::sha512;
use crate::keys::curve25519_to_ed25519;
use crate::signature::consttime::equal_32;

fn checked_signature(signature: &[u8]) -> Result<&[u8; 64], Error> {
    signature.try_into().map_err(|_| Error::InvalidSignatureLength)
}

fn checked_key(public_key: &[u8]) -> Result<&[u8; 32], Error> {
    public_key.try_into().map_err(|_| Error::InvalidKeyLength)
}

/// Verifies a signature against a Montgomery-form public key with the
/// default digest.
///
/// Every failure folds into `false`: wrong signature or key length, a
/// public key outside the birational map's domain, an undecodable nonce
/// point, or a wrong scalar. Verification never panics on untrusted
/// input.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    verify_with(signature, message, public_key, &sha512)
}

/// `verify` with an injected digest.
///
/// Reconstructs the Edwards public key from the Montgomery encoding and
/// the polarity bit carried in the signature's last byte, masks that
/// bit out of `S`, and runs the Edwards-level check.
pub fn verify_with<D>(signature: &[u8], message: &[u8], public_key: &[u8], digest: &D) -> bool
where
    D: Fn(&[u8]) -> [u8; 64],
{
    let Ok(signature) = checked_signature(signature) else {
        return false;
    };
    let Ok(public_key) = checked_key(public_key) else {
        return false;
    };

    let Ok(mut edwards) = curve25519_to_ed25519(public_key) else {
        return false;
    };
    edwards[31] |= signature[63] & 0x80;

    let mut signature = *signature;
    signature[63] &= 0x7F;

    verify_edwards_with(&signature, message, &edwards, digest)
}

/// Verifies a signature against an Edwards-form public key with the
/// default digest.
///
/// This is the inner engine behind [`verify`], exposed for callers that
/// hold Edwards keys directly. The signature's last byte is used as-is;
/// no polarity bit handling happens at this level.
pub fn verify_edwards(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    verify_edwards_with(signature, message, public_key, &sha512)
}

/// `verify_edwards` with an injected digest.
///
/// Checks `encode(h·(−Q) + S·B) == R` where `Q` is the decoded public
/// key, `h = reduce(digest(R ‖ key ‖ message))`, and `B` is the base
/// point. The final comparison is constant time.
pub fn verify_edwards_with<D>(
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
    digest: &D,
) -> bool
where
    D: Fn(&[u8]) -> [u8; 64],
{
    let Ok(signature) = checked_signature(signature) else {
        return false;
    };
    let Ok(public_key) = checked_key(public_key) else {
        return false;
    };

    let Ok(q) = Point::decode(public_key) else {
        return false;
    };

    let mut challenge_input = Vec::with_capacity(64 + message.len());
    challenge_input.extend_from_slice(&signature[..32]);
    challenge_input.extend_from_slice(public_key);
    challenge_input.extend_from_slice(message);

    let h = Scalar::reduce(&digest(&challenge_input));

    // Infallible splits of the 64-byte signature.
    let r: &[u8; 32] = signature[..32].try_into().unwrap();
    let s: &[u8; 32] = signature[32..].try_into().unwrap();

    let check = q
        .negate()
        .scalar_mult(&h.to_bytes())
        .add(&Point::scalar_mult_base(s));

    equal_32(&check.encode(), r)
}
