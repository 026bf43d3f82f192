//! Hash algorithms used by the signature engine.
//!
//! Currently includes SHA-512 with a pure-Rust implementation.

pub mod sha512;

/// Re-export of the SHA-512 convenience function.
pub use sha512::core::sha512;
