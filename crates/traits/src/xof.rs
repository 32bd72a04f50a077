//! Extendable-output function (XOF) trait.

/// Extendable-output function producing an arbitrary number of bytes.
///
/// Successive calls continue the same output stream: squeezing 10 bytes and
/// then 22 yields the same 32 bytes as one 32-byte squeeze.
pub trait Xof: Clone {
  /// Squeeze output bytes into `out`.
  fn squeeze(&mut self, out: &mut [u8]);

  /// Squeeze exactly `N` bytes into a fresh array.
  #[inline]
  #[must_use]
  fn squeeze_array<const N: usize>(&mut self) -> [u8; N] {
    let mut out = [0u8; N];
    self.squeeze(&mut out);
    out
  }
}
