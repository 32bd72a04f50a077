//! Named helpers for hashing string literals.
//!
//! Each function hashes the UTF-8 bytes of its argument with the algorithm's
//! default (unkeyed, zero-seed) configuration.
//!
//! ```
//! use hashes::literal::{sha256_literal, xxh64_literal};
//!
//! assert_eq!(sha256_literal("abc")[0], 0xba);
//! assert_eq!(xxh64_literal(""), 0xEF46_DB37_51D8_E999);
//! ```

use traits::{Digest, FastHash};

use crate::{
  crypto::{Blake3, Md5, Sha256, Sha384},
  fast::{CityHash64, WyHash, Xxh64},
};

#[inline]
#[must_use]
pub fn md5_literal(s: &str) -> [u8; 16] {
  Md5::digest_str(s)
}

#[deprecated(note = "SHA-1 is not collision resistant; use sha256_literal or blake3_literal")]
#[inline]
#[must_use]
pub fn sha1_literal(s: &str) -> [u8; 20] {
  #[allow(deprecated)]
  crate::crypto::Sha1::digest_str(s)
}

#[inline]
#[must_use]
pub fn sha256_literal(s: &str) -> [u8; 32] {
  Sha256::digest_str(s)
}

#[inline]
#[must_use]
pub fn sha384_literal(s: &str) -> [u8; 48] {
  Sha384::digest_str(s)
}

#[inline]
#[must_use]
pub fn blake3_literal(s: &str) -> [u8; 32] {
  Blake3::digest_str(s)
}

/// xxHash64, seed 0.
#[inline]
#[must_use]
pub fn xxh64_literal(s: &str) -> u64 {
  Xxh64::hash_str(s)
}

/// CityHash64 v1.1, unseeded.
#[inline]
#[must_use]
pub fn city64_literal(s: &str) -> u64 {
  CityHash64::hash_str(s)
}

/// WyHash final4, seed 0.
#[inline]
#[must_use]
pub fn wyhash_literal(s: &str) -> u64 {
  WyHash::hash_str(s)
}
