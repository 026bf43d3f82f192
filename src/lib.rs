//! Curve25519/Ed25519 signature engine with Montgomery-form public keys
//!
//! This crate implements an EdDSA signing and verification engine over
//! the twisted Edwards form of Curve25519, for systems whose external
//! key contract is the Montgomery (X25519-style) public-key encoding.
//! The missing Edwards x-sign is carried as a polarity bit in each
//! signature's last byte, so a verifier holding only the Montgomery key
//! can reconstruct the full Edwards key.
//!
//! The focus is on **clarity, predictability, and auditability**: all
//! group and field operations are constant time, the arithmetic core
//! performs no heap allocation, and every API has explicit, well-defined
//! failure semantics.
//!
//! # Module overview
//!
//! - `curve`
//!   The arithmetic core: field elements over GF(2²⁵⁵ − 19) in a
//!   redundant 16-limb representation, scalars modulo the prime group
//!   order, and twisted Edwards points in extended coordinates with a
//!   constant-time scalar-multiplication ladder.
//!
//! - `signature`
//!   The EdDSA engine: randomized or (explicitly gated) deterministic
//!   nonce derivation, signing, nonce preview, and verification against
//!   Montgomery-form or Edwards-form public keys. The core is generic
//!   over the digest function and the entropy source, so it is fully
//!   reproducible under test.
//!
//! - `keys`
//!   Key expansion, public-key derivation, the birational conversions
//!   between the Montgomery and Edwards encodings, the prehashed
//!   ("sodium-style") secret derivation, and a caller-owned keypair
//!   cache. Only key structure and manipulation lives here; signing and
//!   verification do not.
//!
//! - `provider`
//!   A backend seam: the byte-level signing contract as a trait, the
//!   built-in engine as its software implementation, and a one-time
//!   selection between the two.
//!
//! - `hash`
//!   A pure-Rust SHA-512, the crate's default digest.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG seeded from the operating system, with
//!   forward-secret rekeying, behind the `EntropySource` trait the
//!   signing core consumes.
//!
//! # Design goals
//!
//! - Constant-time execution for every secret-dependent operation
//! - No heap allocations in the arithmetic core
//! - Minimal and explicit APIs
//! - Failures as values: `Result` for operations, `false` for
//!   verification, panics never
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to serve as a small, controlled,
//! self-contained engine for the signature scheme described above.

pub mod curve;
pub mod error;
pub mod hash;
pub mod keys;
pub mod provider;
pub mod rng;
pub mod signature;

pub(crate) mod os;

pub use error::Error;
