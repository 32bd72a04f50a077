//! Streaming checksum traits.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm with incremental updates.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF4_3926);
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"12345");
/// hasher.update(b"6789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u32` for CRC-32).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Resume from a previously finalized checksum.
  ///
  /// `Self::with_initial(Self::checksum(a))` followed by `update(b)` finalizes
  /// to `Self::checksum(a || b)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum without consuming the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

/// Checksums whose values can be spliced together.
///
/// Computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in O(log n)
/// time, so chunks can be checksummed independently and merged afterwards:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// ```rust,ignore
/// use checksum::{Checksum, ChecksumCombine, Crc32};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
/// let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());
/// assert_eq!(combined, Crc32::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
