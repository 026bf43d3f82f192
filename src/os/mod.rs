//! Operating system abstraction layer.
//!
//! Provides one capability: cryptographically secure randomness from
//! the host OS, used to seed the deterministic generator and to feed
//! fresh entropy into nonce derivation.
//!
//! The platform-specific implementation is selected at compile time;
//! every submodule exposes the same `sys_random` surface so the rest of
//! the crate stays portable.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
