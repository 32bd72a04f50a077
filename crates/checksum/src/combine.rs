//! GF(2) matrix operations for CRC combination.
//!
//! Given `crc(A)`, `crc(B)` and `len(B)`, these compute `crc(A || B)` without
//! touching the bytes of `A` again.
//!
//! # Mathematical Background
//!
//! For reflected CRCs:
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Multiplication by `x^(8*len(B))` is the matrix for "append one zero byte"
//! raised to the `len(B)` power by square-and-multiply, so combining costs
//! O(log len(B)) matrix products.

// Row indices are bounded loop counters (0..32).
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// GF(2) Matrix (32-bit CRC)
// ─────────────────────────────────────────────────────────────────────────────

/// A 32x32 GF(2) matrix stored as 32 rows.
///
/// Row `i` is the image of input bit `i`.
#[derive(Clone, Copy)]
pub struct Gf2Matrix32([u32; 32]);

impl Gf2Matrix32 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Apply the matrix to `vec`, read as a column vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u32) -> u32 {
    let mut result = 0u32;
    let mut i = 0;
    while i < 32 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (`self * other`).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix.
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shift Matrices
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the matrix that advances a reflected CRC by one zero bit.
///
/// One reflected step is `(crc >> 1) ^ (poly if crc & 1)`, so bit 0 maps to
/// `poly` and bit `j` maps to bit `j - 1`.
#[must_use]
pub const fn shift1_matrix_32(poly: u32) -> Gf2Matrix32 {
  let mut m = [0u32; 32];
  m[0] = poly;
  let mut j = 1;
  while j < 32 {
    m[j] = 1 << (j - 1);
    j += 1;
  }
  Gf2Matrix32(m)
}

/// Generate the matrix that advances a reflected CRC by one zero byte.
#[must_use]
pub const fn shift8_matrix_32(poly: u32) -> Gf2Matrix32 {
  shift1_matrix_32(poly).square().square().square()
}

// ─────────────────────────────────────────────────────────────────────────────
// Combine
// ─────────────────────────────────────────────────────────────────────────────

/// Combine two CRC-32 values into `crc(A || B)`.
///
/// # Arguments
///
/// * `crc_a` - Finalized CRC of `A`
/// * `crc_b` - Finalized CRC of `B`
/// * `len_b` - Length of `B` in bytes
/// * `shift8` - One-zero-byte matrix for the polynomial, see [`shift8_matrix_32`]
#[must_use]
pub const fn combine_crc32(crc_a: u32, crc_b: u32, len_b: usize, shift8: Gf2Matrix32) -> u32 {
  if len_b == 0 {
    return crc_a;
  }

  let mut mat = shift8;
  let mut result = Gf2Matrix32::identity();
  let mut remaining = len_b;
  while remaining > 0 {
    if remaining & 1 != 0 {
      result = result.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result.mul_vec(crc_a) ^ crc_b
}
