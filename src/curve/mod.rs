//! Curve25519 arithmetic: the base field, the scalar field, and the
//! twisted Edwards group used by the signature engine.

pub(crate) mod constants;
pub(crate) mod field;
pub(crate) mod point;
pub mod scalar;
