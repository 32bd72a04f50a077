//! Cryptographic digests and fast non-cryptographic hashes.
//!
//! This crate is `no_std` compatible and never allocates on a hashing path.
//! Dev-only dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - Cryptographic hash functions: MD5, SHA-1, SHA-2, BLAKE2b, BLAKE3.
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**): SipHash, Murmur3, CityHash, FarmHash, WyHash, xxHash,
//!   SpookyHash, MeowHash.
//! - [`combine`] - Folding already-computed hash values into one.
//! - [`literal`] - Named helpers that hash string literals.
//! - [`types`] - Digest and key value types shared by several algorithms.
//! - [`util`] - Byte codec: rotations, endian loads/stores, wide multiplies.
//!
//! # Example
//!
//! ```
//! use hashes::{Digest, FastHash, crypto::Sha256, fast::Xxh64};
//!
//! let d = Sha256::digest(b"abc");
//! assert_eq!(d[0], 0xba);
//! assert!(Sha256::verify(b"abc", &d));
//!
//! assert_eq!(Xxh64::hash(b""), 0xEF46_DB37_51D8_E999);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod combine;
pub mod crypto;
mod error;
pub mod fast;
pub mod literal;
pub mod types;
pub mod util;

pub use error::Error;
pub use traits::{Digest, FastHash, VerificationError, Xof};
pub use types::{Blake2bDigest, Hash128, SipHashKey};
