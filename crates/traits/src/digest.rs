//! Cryptographic digest traits.
//!
//! Shaped like [`crate::Checksum`]: streaming updates, idempotent finalize,
//! and reset support. The one-shot helpers accept byte slices, UTF-8 strings,
//! NUL-terminated C strings, and raw pointers, and every input form hashes the
//! same bytes to the same digest.

use core::{ffi::CStr, fmt::Debug};

use crate::{bytes, error::VerificationError};

/// Cryptographic hash function producing a fixed-size digest.
///
/// Implemented by MD5, SHA-1, the SHA-2 family, BLAKE2b, and BLAKE3 (hash mode).
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not disturb the streaming state
/// - splitting the input across any number of `update` calls must not change the digest
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Digest the UTF-8 bytes of `s`.
  #[inline]
  #[must_use]
  fn digest_str(s: &str) -> Self::Output {
    Self::digest(s.as_bytes())
  }

  /// Digest a C string up to, not including, its terminating NUL.
  #[inline]
  #[must_use]
  fn digest_c_str(s: &CStr) -> Self::Output {
    Self::digest(s.to_bytes())
  }

  /// Digest `len` bytes starting at `ptr`.
  ///
  /// A zero length hashes the empty input regardless of `ptr`.
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
  unsafe fn digest_raw(ptr: *const u8, len: usize) -> Self::Output {
    // SAFETY: forwarded to the caller.
    Self::digest(unsafe { bytes::from_raw(ptr, len) })
  }

  /// Recompute the digest of `data` and compare it against `expected`.
  ///
  /// The comparison does not exit early on the first differing byte.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the digests differ.
  #[inline]
  fn check(data: &[u8], expected: &Self::Output) -> Result<(), VerificationError> {
    let actual = Self::digest(data);
    if bytes::ct_eq(actual.as_ref(), expected.as_ref()) {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }

  /// `true` when `data` digests to `expected`.
  #[inline]
  #[must_use]
  fn verify(data: &[u8], expected: &Self::Output) -> bool {
    Self::check(data, expected).is_ok()
  }
}
