//! Byte-slice helpers shared by the convenience entry points.

/// Reborrow a raw `(ptr, len)` pair as a byte slice.
///
/// A zero length always yields the empty slice, whatever `ptr` is.
///
/// # Safety
///
/// When `len > 0`, `ptr` must be valid for reads of `len` bytes for the
/// lifetime `'a`, and the memory must not be mutated during that lifetime.
///
/// # Panics
///
/// Panics if `ptr` is null and `len > 0`.
#[inline]
#[must_use]
pub unsafe fn from_raw<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
  if len == 0 {
    return &[];
  }
  assert!(!ptr.is_null(), "null data pointer with non-zero length {len}");
  // SAFETY: caller guarantees `ptr` is readable for `len` bytes; non-null checked above.
  unsafe { core::slice::from_raw_parts(ptr, len) }
}

/// Compare two byte slices without an early exit on the first mismatch.
///
/// The running time depends only on the lengths, never on where the inputs
/// first differ.
#[inline]
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
  core::hint::black_box(diff) == 0
}
