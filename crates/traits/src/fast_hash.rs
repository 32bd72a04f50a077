//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::{ffi::CStr, fmt::Debug};

use crate::bytes;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// The trait is one-shot. Algorithms that also stream (xxHash, SpookyHash,
/// SipHash) expose that through concrete hasher types.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (typically `u64`).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  ///
  /// Algorithms with a distinct unseeded variant (CityHash, FarmHash) override
  /// this to call it.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;

  /// Hash the UTF-8 bytes of `s`.
  #[inline]
  #[must_use]
  fn hash_str(s: &str) -> Self::Output {
    Self::hash(s.as_bytes())
  }

  /// Hash a C string up to, not including, its terminating NUL.
  #[inline]
  #[must_use]
  fn hash_c_str(s: &CStr) -> Self::Output {
    Self::hash(s.to_bytes())
  }

  /// Hash `len` bytes starting at `ptr`.
  ///
  /// # Safety
  ///
  /// When `len > 0`, `ptr` must be valid for reads of `len` bytes.
  ///
  /// # Panics
  ///
  /// Panics if `ptr` is null and `len > 0`.
  #[inline]
  #[must_use]
  unsafe fn hash_raw(ptr: *const u8, len: usize) -> Self::Output {
    // SAFETY: forwarded to the caller.
    Self::hash(unsafe { bytes::from_raw(ptr, len) })
  }

  /// `true` when `data` hashed under `seed` equals `expected`.
  #[inline]
  #[must_use]
  fn verify(seed: Self::Seed, data: &[u8], expected: Self::Output) -> bool {
    Self::hash_with_seed(seed, data) == expected
  }
}
