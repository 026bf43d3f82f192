//! Scalar arithmetic modulo the prime group order `L`.
//!
//! Scalars live in `ℤ/Lℤ` where
//!
//! ```text
//! L = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! and are stored as 32 little-endian bytes. Reduction works digit by
//! digit on a signed 64-entry accumulator, clearing the high digits from
//! the top down by subtracting shifted multiples of `L` with a signed
//! carry chain, then making a final correcting pass. No secret-dependent
//! branches occur anywhere in the reduction.

use crate::curve::constants::GROUP_ORDER;

/// A scalar modulo the group order, little-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    /// Clamp a 32-byte seed into a valid Curve25519 secret scalar.
    ///
    /// Clears the low 3 bits (forcing a multiple of the cofactor 8),
    /// clears bit 255, and sets bit 254, per the standard key
    /// derivation convention.
    pub fn clamp(seed: &[u8; 32]) -> Self {
        let mut e = *seed;

        e[0] &= 248;
        e[31] &= 127;
        e[31] |= 64;

        Scalar(e)
    }

    /// Reduce a 64-byte value (typically a SHA-512 digest) modulo `L`.
    pub fn reduce(input: &[u8; 64]) -> Self {
        let mut x = [0i64; 64];
        for (digit, byte) in x.iter_mut().zip(input.iter()) {
            *digit = *byte as i64;
        }

        Scalar(mod_order(&mut x))
    }

    /// Compute `a · b + c (mod L)`.
    ///
    /// The 32×32-digit product is accumulated on top of `c` in a signed
    /// 64-entry array before a single reduction, so no intermediate
    /// overflows the digit range the reduction tolerates.
    pub(crate) fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Self {
        let mut x = [0i64; 64];

        for (digit, byte) in x.iter_mut().zip(c.0.iter()) {
            *digit = *byte as i64;
        }

        for i in 0..32 {
            for j in 0..32 {
                x[i + j] += a.0[i] as i64 * b.0[j] as i64;
            }
        }

        Scalar(mod_order(&mut x))
    }

    /// The little-endian byte encoding of this scalar.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Wrap 32 bytes already known to be a reduced scalar.
    pub(crate) fn from_bytes(bytes: [u8; 32]) -> Self {
        Scalar(bytes)
    }
}

/// Reduce a signed 64-digit accumulator modulo `L`, in place.
///
/// Digits are roughly byte-sized but may carry large signed excess from
/// a preceding schoolbook multiplication. The top digits are eliminated
/// from index 63 down to 32 by subtracting `16 · x[i] · L` shifted into
/// place; the rounding carry `(x[j] + 128) >> 8` keeps every digit in a
/// small signed window. A final pass folds the residual overflow above
/// bit 252 (`x[31] >> 4`) and applies one last signed correction before
/// the result is repacked into bytes.
fn mod_order(x: &mut [i64; 64]) -> [u8; 32] {
    for i in (32..=63).rev() {
        let mut carry = 0i64;

        for j in (i - 32)..(i - 12) {
            x[j] += carry - 16 * x[i] * GROUP_ORDER[j - (i - 32)];
            carry = (x[j] + 128) >> 8;
            x[j] -= carry << 8;
        }

        x[i - 12] += carry;
        x[i] = 0;
    }

    let mut carry = 0i64;
    for j in 0..32 {
        x[j] += carry - (x[31] >> 4) * GROUP_ORDER[j];
        carry = x[j] >> 8;
        x[j] &= 255;
    }

    for j in 0..32 {
        x[j] -= carry * GROUP_ORDER[j];
    }

    let mut out = [0u8; 32];
    for i in 0..32 {
        x[i + 1] += x[i] >> 8;
        out[i] = (x[i] & 255) as u8;
    }

    out
}
