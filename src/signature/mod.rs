//! EdDSA signing and verification with Montgomery-form public keys.
//!
//! Signatures are 64 bytes: the encoded nonce point `R` followed by the
//! scalar `S = r + h·s (mod L)`, with the signer's key polarity bit ORed
//! into the last byte. Verification accepts the Montgomery public-key
//! encoding externally and reconstructs the Edwards key from the
//! conversion plus the carried polarity bit.

pub(crate) mod consttime;
mod sign;
mod verify;

pub use sign::{SignOptions, preview_nonce, preview_nonce_with, sign, sign_with, sign_with_options};
pub use verify::{verify, verify_edwards, verify_edwards_with, verify_with};
