//! Curve constants in the radix-2¹⁶ field representation.

use crate::curve::field::FieldElement;

/// The Edwards curve constant `d = -121665 / 121666`.
pub(crate) const D: FieldElement = FieldElement([
    0x78A3, 0x1359, 0x4DCA, 0x75EB, 0xD8AB, 0x4141, 0x0A4D, 0x0070, 0xE898, 0x7779, 0x4079,
    0x8CC7, 0xFE73, 0x2B6F, 0x6CEE, 0x5203,
]);

/// Twice the curve constant, `2d`, used by the extended-coordinate
/// addition formula.
pub(crate) const D2: FieldElement = FieldElement([
    0xF159, 0x26B2, 0x9B94, 0xEBD6, 0xB156, 0x8283, 0x149A, 0x00E0, 0xD130, 0xEEF3, 0x80F2,
    0x198E, 0xFCE7, 0x56DF, 0xD9DC, 0x2406,
]);

/// A square root of −1 modulo `p`, used to correct the candidate root
/// during point decompression.
pub(crate) const SQRT_M1: FieldElement = FieldElement([
    0xA0B0, 0x4A0E, 0x1B27, 0xC4EE, 0xE478, 0xAD2F, 0x1806, 0x2F43, 0xD7A7, 0x3DFB, 0x0099,
    0x2B4D, 0xDF0B, 0x4FC1, 0x2480, 0x2B83,
]);

/// x-coordinate of the Ed25519 base point.
pub(crate) const BASE_X: FieldElement = FieldElement([
    0xD51A, 0x8F25, 0x2D60, 0xC956, 0xA7B2, 0x9525, 0xC760, 0x692C, 0xDC5C, 0xFDD6, 0xE231,
    0xC0A4, 0x53FE, 0xCD6E, 0x36D3, 0x2169,
]);

/// y-coordinate of the Ed25519 base point, `4/5`.
pub(crate) const BASE_Y: FieldElement = FieldElement([
    0x6658, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666,
    0x6666, 0x6666, 0x6666, 0x6666, 0x6666,
]);

/// t-coordinate of the Ed25519 base point (`x · y`).
pub(crate) const BASE_T: FieldElement = FieldElement([
    0xDD90, 0xA5B7, 0x8AB3, 0x6DDE, 0x52F5, 0x7751, 0x9F80, 0x20F0, 0xE37D, 0x64AB, 0x4E8E,
    0x66EA, 0x7665, 0xD78B, 0x5F0F, 0xE787,
]);

/// Little-endian bytes of the prime group order
/// `L = 2²⁵² + 27742317777372353535851937790883648493`.
pub(crate) const GROUP_ORDER: [i64; 32] = [
    0xED, 0xD3, 0xF5, 0x5C, 0x1A, 0x63, 0x12, 0x58, 0xD6, 0x9C, 0xF7, 0xA2, 0xDE, 0xF9, 0xDE,
    0x14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x10,
];
