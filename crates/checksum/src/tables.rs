//! Const-fn CRC-32 lookup tables and the portable slice-by-8 kernel.
//!
//! Tables are computed at compile time and embedded in the binary.
//! `tables[0]` is the classic bytewise table; `tables[k][i]` is the
//! contribution of byte `i` followed by `k` zero bytes.

// Table indices are bounded loop counters (0..256, 0..8) or masked with `& 0xFF`.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry.
///
/// Bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-32 lookup tables for slice-by-8 computation.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial
#[must_use]
pub const fn generate_crc32_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = crc32_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// Portable Kernel
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-32 state using the slice-by-8 algorithm.
///
/// `crc` is the pre-inverted running state. Whole 8-byte words go through
/// all eight tables; the remainder is folded bytewise through `tables[0]`.
#[inline]
pub fn slice8_32(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  for &byte in remainder {
    let index = ((crc ^ byte as u32) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc >> 8);
  }

  crc
}
