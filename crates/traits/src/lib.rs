//! Core hashing traits for hashkit.
//!
//! Every algorithm in the workspace implements one of the traits below. The
//! crate is `no_std` compatible; its only dependency is `thiserror` for the
//! error derive.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Cryptographic hash functions | SHA-256, BLAKE2b, BLAKE3 |
//! | [`Xof`] | Extendable-output readers | BLAKE3 XOF |
//! | [`FastHash`] | Seeded non-cryptographic hashes | SipHash, xxHash, CityHash |
//! | [`Checksum`] | Streaming checksums | CRC-32 |
//! | [`ChecksumCombine`] | Parallel checksum combination | CRC-32 combine |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error returned when an expected digest does not match
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bytes;
mod checksum;
mod digest;
pub mod error;
mod fast_hash;
mod xof;

pub use checksum::{Checksum, ChecksumCombine};
pub use digest::Digest;
pub use error::VerificationError;
pub use fast_hash::FastHash;
pub use xof::Xof;
