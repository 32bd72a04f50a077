//! CRC-32 implementation.
//!
//! - [`Crc32`] - CRC-32 IEEE (Ethernet, ZIP, PNG)
//!
//! Updates run the portable slice-by-8 kernel in `tables`.

use traits::{Checksum, ChecksumCombine};

use crate::{
  combine::{Gf2Matrix32, combine_crc32, shift8_matrix_32},
  tables::{generate_crc32_tables_8, slice8_32},
};

/// CRC-32 IEEE polynomial, reflected form of 0x04C11DB7.
pub const CRC32_POLY: u32 = 0xEDB8_8320;

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

static TABLES: [[u32; 256]; 8] = generate_crc32_tables_8(CRC32_POLY);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Type
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// Used in Ethernet FCS, ZIP, gzip, PNG, and many other formats.
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub struct Crc32 {
  state: u32,
}

impl Crc32 {
  const SHIFT8_MATRIX: Gf2Matrix32 = shift8_matrix_32(CRC32_POLY);

  /// Continue from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ !0 }
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self { state: !0 }
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = slice8_32(self.state, data, &TABLES);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine_crc32(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}
