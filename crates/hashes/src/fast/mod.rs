//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.
//!
//! Every algorithm here reproduces its published reference outputs bit for
//! bit, except [`MeowHash`], which is a capability-gated AES lane hash with no
//! upstream compatibility claim.

pub mod city;
pub mod farm;
pub mod meow;
pub mod murmur3;
pub mod siphash;
pub mod spooky;
pub mod wyhash;
pub mod xxhash;

pub use city::{CityHash64, CityHash128};
pub use farm::{FarmHash64, FarmHash128};
pub use meow::MeowHash;
pub use murmur3::{Murmur3_32, Murmur3_128};
pub use siphash::{SipBuildHasher, SipHash, SipHash13, SipHash24, SipHash48, SipHasher};
pub use spooky::{Spooky32, Spooky64, Spooky128, SpookyHasher};
pub use wyhash::WyHash;
pub use xxhash::{Xxh32, Xxh32Hasher, Xxh64, Xxh64Hasher};

/// `len` bytes of the `i % 251` pattern used by the reference vector tables.
#[cfg(test)]
pub(crate) fn pattern(len: usize) -> alloc::vec::Vec<u8> {
  (0..len).map(|i| (i % 251) as u8).collect()
}
