//! Twisted Edwards group operations in extended coordinates.
//!
//! Points on the Ed25519 curve
//!
//! ```text
//! -x² + y² = 1 + d·x²·y²    over 𝔽ₚ, p = 2²⁵⁵ − 19
//! ```
//!
//! are kept in extended projective coordinates `(X : Y : Z : T)` with
//! the affine point `(X/Z, Y/Z)` and the auxiliary product
//! `T = X·Y/Z`. This representation admits a single unified addition
//! formula that also handles doubling and the identity, so scalar
//! multiplication needs no secret-dependent special cases.
//!
//! Scalar multiplication walks all 256 scalar bits MSB-first with a
//! constant-time conditional-swap ladder: every iteration performs the
//! same swap / add / double / swap sequence regardless of the bit.

use crate::curve::constants::{BASE_T, BASE_X, BASE_Y, D, D2, SQRT_M1};
use crate::curve::field::FieldElement;
use crate::error::Error;

/// A curve point in extended coordinates `(X : Y : Z : T)`.
#[derive(Clone, Copy)]
pub(crate) struct Point {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl Point {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub(crate) const IDENTITY: Self = Point {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The Ed25519 base point of order `L`.
    pub(crate) const BASE: Self = Point {
        x: BASE_X,
        y: BASE_Y,
        z: FieldElement::ONE,
        t: BASE_T,
    };

    /// Unified extended-coordinate point addition.
    ///
    /// The formula is complete on this curve: it is correct for
    /// `self == rhs` (doubling) and for the identity, with no branches.
    pub(crate) fn add(&self, rhs: &Point) -> Point {
        let a = (self.y - self.x) * (rhs.y - rhs.x);
        let b = (self.x + self.y) * (rhs.x + rhs.y);
        let c = self.t * rhs.t * D2;
        let zz = self.z * rhs.z;
        let d = zz + zz;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        Point {
            x: e * f,
            y: h * g,
            z: g * f,
            t: e * h,
        }
    }

    /// Constant-time conditional swap of two points.
    ///
    /// Swaps every coordinate limb when `bit == 1`, touches all of them
    /// either way.
    pub(crate) fn cswap(&mut self, rhs: &mut Point, bit: i64) {
        self.x.swap(&mut rhs.x, bit);
        self.y.swap(&mut rhs.y, bit);
        self.z.swap(&mut rhs.z, bit);
        self.t.swap(&mut rhs.t, bit);
    }

    /// Multiply this point by a scalar given as 32 little-endian bytes.
    ///
    /// A fixed 256-iteration MSB-first ladder: the accumulator starts at
    /// the identity and each step swaps on the current bit, adds, and
    /// doubles. No early exit, no bit-dependent control flow.
    pub(crate) fn scalar_mult(&self, scalar: &[u8; 32]) -> Point {
        let mut p = Point::IDENTITY;
        let mut q = *self;

        for index in (0..=255).rev() {
            let bit = ((scalar[index / 8] >> (index & 7)) & 1) as i64;

            p.cswap(&mut q, bit);
            q = q.add(&p);
            p = p.add(&p);
            p.cswap(&mut q, bit);
        }

        p
    }

    /// Multiply the base point by a scalar.
    pub(crate) fn scalar_mult_base(scalar: &[u8; 32]) -> Point {
        Point::BASE.scalar_mult(scalar)
    }

    /// Compress this point to the 32-byte Ed25519 encoding.
    ///
    /// Normalizes to affine with one inversion of Z, packs the canonical
    /// y bytes and ORs the parity of x into bit 255.
    pub(crate) fn encode(&self) -> [u8; 32] {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut out = y.to_bytes();
        out[31] ^= x.is_negative() << 7;

        out
    }

    /// Decompress a 32-byte encoding into a point.
    ///
    /// Recovers y from the low 255 bits and solves the curve equation
    /// for x: with `num = y² − 1` and `den = d·y² + 1`, the candidate is
    /// `x = num · den³ · (num · den⁷)^((p−5)/8)`. If `x²·den ≠ num` the
    /// candidate is corrected by √−1; the retry and the final sign fix
    /// are constant-time selections over both alternatives.
    ///
    /// Fails when no square root exists, and also when the recovered x
    /// is zero but the sign bit asks for the odd root (the encoding
    /// `−0` is rejected as non-canonical).
    pub(crate) fn decode(input: &[u8; 32]) -> Result<Point, Error> {
        let y = FieldElement::from_bytes(input);
        let z = FieldElement::ONE;

        let y2 = y.square();
        let num = y2 - z;
        let den = (y2 * D) + z;

        let den2 = den.square();
        let den4 = den2.square();
        let den6 = den4 * den2;

        let candidate = (den6 * num * den).pow_p58() * num * den2 * den;

        // Retry with the square root of -1 when x²·den misses num.
        let flipped = candidate * SQRT_M1;
        let keep = (candidate.square() * den).ct_eq(&num);
        let x = FieldElement::select(&flipped, &candidate, keep);

        if (x.square() * den).ct_eq(&num) == 0 {
            return Err(Error::PointDecoding);
        }

        let sign = input[31] >> 7;

        if !x.is_non_zero() && sign == 1 {
            return Err(Error::PointDecoding);
        }

        let negate = (x.is_negative() != sign) as i64;
        let x = FieldElement::select(&x, &(-x), negate);

        Ok(Point {
            x,
            y,
            z,
            t: x * y,
        })
    }

    /// The additive inverse `(−X : Y : Z : −T)`.
    pub(crate) fn negate(&self) -> Point {
        Point {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }

    /// Checks the extended-coordinate invariant `X·Y ≡ Z·T (mod p)`.
    #[cfg(test)]
    pub(crate) fn is_well_formed(&self) -> bool {
        (self.x * self.y).ct_eq(&(self.z * self.t)) == 1
    }
}
