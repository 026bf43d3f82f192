//! Error taxonomy shared across the crate.
//!
//! Malformed-length and policy errors are reported to the immediate caller
//! as explicit `Result` values. Point-decoding failures encountered while
//! verifying untrusted input are folded into a `false` verification result
//! instead, so a caller cannot distinguish a malformed key from a wrong
//! signature through the error type.

use std::fmt;

/// Errors reported by signing, key derivation, and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A secret seed or public key was not exactly 32 bytes.
    InvalidKeyLength,
    /// A signature was not exactly 64 bytes.
    InvalidSignatureLength,
    /// A fixed nonce seed was supplied without the explicit opt-in flag.
    PolicyViolation,
    /// A 32-byte string did not decode to a valid curve point.
    PointDecoding,
    /// An extended-coordinate invariant (X·Y = Z·T) did not hold.
    /// The built-in engine never produces this; it is part of the
    /// backend contract for providers that run arithmetic self-checks.
    ArithmeticInvariant,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidKeyLength => "key must be exactly 32 bytes",
            Error::InvalidSignatureLength => "signature must be exactly 64 bytes",
            Error::PolicyViolation => "fixed nonce seed requires the explicit opt-in flag",
            Error::PointDecoding => "bytes do not encode a valid curve point",
            Error::ArithmeticInvariant => "internal group-law invariant violated",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}
