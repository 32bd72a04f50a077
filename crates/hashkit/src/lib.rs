//! Cryptographic digests, fast non-cryptographic hashes, and CRC-32.
//!
//! `hashkit` re-exports the workspace crates behind feature flags. Every
//! algorithm is `no_std`, allocation-free, and deterministic across
//! platforms.
//!
//! # Quick Start
//!
//! ```
//! use hashkit::{Checksum, Crc32, Digest, FastHash, crypto::Sha256, fast::Xxh64};
//!
//! let d = Sha256::digest(b"abc");
//! assert!(Sha256::verify(b"abc", &d));
//!
//! assert_eq!(Xxh64::hash(b""), 0xEF46_DB37_51D8_E999);
//!
//! let mut crc = Crc32::new();
//! crc.update(b"hello ");
//! crc.update(b"world");
//! assert_eq!(crc.finalize(), Crc32::checksum(b"hello world"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Runtime CPU detection; `SipBuildHasher::random` |
//! | `alloc` | Yes | Implied by `std` |
//! | `hashes` | Yes | `crypto` and `fast` hash families |
//! | `checksums` | Yes | CRC-32 |
//! | `tracing` | No | `tracing` events from capability detection and the MeowHash gate |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! hashkit = { version = "0.1", default-features = false, features = ["hashes"] }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub use platform::{Description, describe};
pub use traits::VerificationError;

// =============================================================================
// Checksums
// =============================================================================

#[cfg(feature = "checksums")]
pub use checksum::{Checksum, ChecksumCombine, Crc32};

/// CRC-32 of the UTF-8 bytes of `s`.
///
/// ```
/// assert_eq!(hashkit::crc32_literal("123456789"), 0xCBF4_3926);
/// ```
#[cfg(feature = "checksums")]
#[inline]
#[must_use]
pub fn crc32_literal(s: &str) -> u32 {
  Crc32::checksum(s.as_bytes())
}

// =============================================================================
// Hashes
// =============================================================================

#[cfg(feature = "hashes")]
pub use hashes::{
  Blake2bDigest, Digest, Error, FastHash, Hash128, SipHashKey, Xof, combine, crypto, fast, hash_combine, literal,
  util,
};
