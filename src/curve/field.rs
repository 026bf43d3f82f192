//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! shared by the Montgomery and twisted Edwards forms of the curve.
//!
//! ## Representation
//!
//! Field elements are stored as 16 signed 64-bit limbs in radix 2¹⁶:
//!
//! ```text
//! value = Σ limb[i] · 2^(16·i)
//! ```
//!
//! The representation is redundant: limbs may temporarily exceed 16 bits
//! or go negative after additions and subtractions. A carry pass
//! (`carry`) renormalizes them, folding overflow past limb 15 back into
//! limb 0 through the identity `2²⁵⁵ ≡ 19 (mod p)`. Even after a carry
//! pass the value may still represent an integer ≥ p; only `to_bytes`
//! produces the canonical encoding.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: no secret-dependent branches or memory
//!   access. Selection and swapping mask every limb unconditionally.
//! - **Overflow safety**: 16-bit limbs in 64-bit storage leave ample
//!   headroom for the 16×16 schoolbook product before reduction.
//! - **Auditability**: the carry and canonicalization passes follow the
//!   well-known compact reference layout for this field.

use std::array;
use std::ops::{Add, Mul, Neg, Sub};

/// Field element modulo `2^255 - 19` in redundant radix-2¹⁶ form.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i64; 16]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0i64; 16]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Decode a field element from its 32-byte little-endian encoding.
    ///
    /// Each pair of bytes becomes one 16-bit limb; the top bit of the
    /// last limb (bit 255 of the encoding, used elsewhere as a sign bit)
    /// is masked off.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> Self {
        let mut out = [0i64; 16];

        for (index, limb) in out.iter_mut().enumerate() {
            *limb = input[2 * index] as i64 | ((input[2 * index + 1] as i64) << 8);
        }

        out[15] &= 0x7FFF;

        FieldElement(out)
    }

    /// Encode this field element into its canonical 32-byte form.
    ///
    /// Three carry passes bring every limb into 16 bits; the value may
    /// still be in `[p, 2^255)`, so p is subtracted twice with a
    /// constant-time select keeping the subtracted candidate only when
    /// the subtraction did not underflow. The result is the unique
    /// canonical encoding in `[0, p)`.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut t = self;

        t.carry();
        t.carry();
        t.carry();

        let mut m = FieldElement::ZERO;

        for _ in 0..2 {
            m.0[0] = t.0[0] - 0xFFED;

            for index in 1..15 {
                m.0[index] = t.0[index] - 0xFFFF - ((m.0[index - 1] >> 16) & 1);
                m.0[index - 1] &= 0xFFFF;
            }

            m.0[15] = t.0[15] - 0x7FFF - ((m.0[14] >> 16) & 1);

            // Borrow out of the top limb means t < p: keep t.
            let borrow = (m.0[15] >> 16) & 1;
            m.0[14] &= 0xFFFF;
            t.swap(&mut m, 1 - borrow);
        }

        let mut out = [0u8; 32];
        for (index, limb) in t.0.iter().enumerate() {
            out[2 * index] = (limb & 0xFF) as u8;
            out[2 * index + 1] = (limb >> 8) as u8;
        }

        out
    }

    /// One carry-propagation pass.
    ///
    /// Normalizes every limb to 16 bits, folding the overflow of limb 15
    /// into limb 0 as `38 = 2 · 19` per the field identity
    /// `2²⁵⁶ ≡ 38 (mod p)`. The offset of 65535 keeps intermediate
    /// shifts well-defined for negative limbs.
    pub(crate) fn carry(&mut self) {
        let mut c = 1i64;

        for limb in self.0.iter_mut() {
            let v = *limb + c + 65535;
            c = v >> 16;
            *limb = v & 65535;
        }

        self.0[0] += c - 1 + 37 * (c - 1);
    }

    /// Constant-time conditional swap of two field elements.
    ///
    /// If `bit == 1`, swaps `self` and `rhs`; if `bit == 0`, leaves both
    /// unchanged. Every limb of both operands is touched regardless of
    /// `bit`, so execution is independent of secret data.
    pub(crate) fn swap(&mut self, rhs: &mut Self, bit: i64) {
        let mask = !(bit - 1);

        for (a, b) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let t = mask & (*a ^ *b);
            *a ^= t;
            *b ^= t;
        }
    }

    /// Constant-time two-way select: returns `a` if `bit == 0`, `b` if
    /// `bit == 1`. Reads every limb of both operands unconditionally.
    pub(crate) fn select(a: &Self, b: &Self, bit: i64) -> Self {
        let mask = !(bit - 1);

        FieldElement(array::from_fn(|index| {
            a.0[index] ^ (mask & (a.0[index] ^ b.0[index]))
        }))
    }

    /// Constant-time equality, `1` if equal, `0` otherwise.
    ///
    /// Compares the canonical encodings byte by byte with no early exit.
    pub(crate) fn ct_eq(&self, rhs: &Self) -> i64 {
        let a = self.to_bytes();
        let b = rhs.to_bytes();

        let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));

        (diff == 0) as i64
    }

    /// Returns `1` if the canonical encoding is odd, `0` otherwise.
    ///
    /// This is the "sign" of a field element in the Ed25519 point
    /// encoding convention.
    pub(crate) fn is_negative(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    /// Constant-time non-zero check on the canonical encoding.
    pub(crate) fn is_non_zero(&self) -> bool {
        self.to_bytes().iter().fold(0u8, |acc, &b| acc | b) != 0
    }

    /// Computes the square of this field element.
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes the multiplicative inverse via Fermat's little theorem.
    ///
    /// Raises `self` to `p − 2 = 2²⁵⁵ − 21` using a fixed chain of 254
    /// squarings, skipping the multiply step exactly at iterations 2 and
    /// 4 (the two zero bits of the exponent). The iteration pattern is
    /// data-independent; the `if` tests a loop counter, never a secret.
    ///
    /// Inverting zero yields zero, matching the reference convention.
    pub(crate) fn invert(self) -> Self {
        let mut c = self;

        for index in (0..=253).rev() {
            c = c.square();

            if index != 2 && index != 4 {
                c = c * self;
            }
        }

        c
    }

    /// Raises this field element to `(p − 5) / 8 = 2²⁵² − 3`.
    ///
    /// A fixed chain of 251 squarings skipping the multiply at iteration
    /// 1, used to extract candidate square roots during point
    /// decompression.
    pub(crate) fn pow_p58(self) -> Self {
        let mut c = self;

        for index in (0..=250).rev() {
            c = c.square();

            if index != 1 {
                c = c * self;
            }
        }

        c
    }
}

/// Limb-wise addition; the result is left unreduced.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] + rhs.0[index]))
    }
}

/// Limb-wise subtraction; limbs may go negative until the next carry.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] - rhs.0[index]))
    }
}

/// Field multiplication.
///
/// Computes the 31-limb schoolbook product, folds the top 15 limbs back
/// into the low half with the factor `38 = 2 · 19` (from
/// `2²⁵⁶ ≡ 38 mod p`), then runs two carry passes. With 16-bit limbs the
/// accumulated cross products stay far below the `i64` range.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut t = [0i64; 31];

        for i in 0..16 {
            for j in 0..16 {
                t[i + j] += self.0[i] * rhs.0[j];
            }
        }

        for i in 0..15 {
            t[i] += 38 * t[i + 16];
        }

        let mut out = FieldElement(t[..16].try_into().unwrap());
        out.carry();
        out.carry();

        out
    }
}

/// Additive inverse, computed as `0 − self`; unreduced like `Sub`.
impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement::ZERO - self
    }
}
