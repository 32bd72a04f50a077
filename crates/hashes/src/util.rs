//! Byte codec shared by every algorithm.
//!
//! Pure, stateless helpers. The `read_*`/`write_*` functions panic if the
//! requested word does not fit inside the slice at `offset`.
#![allow(clippy::indexing_slicing)] // Offsets are bounds-checked by slicing; panics are documented.

#[inline(always)]
#[must_use]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
#[must_use]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
#[must_use]
pub const fn rotl64(x: u64, n: u32) -> u64 {
  x.rotate_left(n)
}

#[inline(always)]
#[must_use]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

#[inline(always)]
#[must_use]
pub const fn bswap32(x: u32) -> u32 {
  x.swap_bytes()
}

#[inline(always)]
#[must_use]
pub const fn bswap64(x: u64) -> u64 {
  x.swap_bytes()
}

#[inline(always)]
#[must_use]
pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
  u32::from_le_bytes(word::<4>(data, offset))
}

#[inline(always)]
#[must_use]
pub fn read_u32_be(data: &[u8], offset: usize) -> u32 {
  u32::from_be_bytes(word::<4>(data, offset))
}

#[inline(always)]
#[must_use]
pub fn read_u64_le(data: &[u8], offset: usize) -> u64 {
  u64::from_le_bytes(word::<8>(data, offset))
}

#[inline(always)]
#[must_use]
pub fn read_u64_be(data: &[u8], offset: usize) -> u64 {
  u64::from_be_bytes(word::<8>(data, offset))
}

#[inline(always)]
pub fn write_u32_le(out: &mut [u8], offset: usize, v: u32) {
  out[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
}

#[inline(always)]
pub fn write_u32_be(out: &mut [u8], offset: usize, v: u32) {
  out[offset..offset + 4].copy_from_slice(&v.to_be_bytes());
}

#[inline(always)]
pub fn write_u64_le(out: &mut [u8], offset: usize, v: u64) {
  out[offset..offset + 8].copy_from_slice(&v.to_le_bytes());
}

#[inline(always)]
pub fn write_u64_be(out: &mut [u8], offset: usize, v: u64) {
  out[offset..offset + 8].copy_from_slice(&v.to_be_bytes());
}

/// Full 128-bit product of two 64-bit words, as `(low, high)`.
#[inline(always)]
#[must_use]
pub const fn mul64x64(a: u64, b: u64) -> (u64, u64) {
  let r = (a as u128) * (b as u128);
  (r as u64, (r >> 64) as u64)
}

/// Full 256-bit product of two 128-bit words, as `(low, high)`.
#[must_use]
pub const fn mul128x128(a: u128, b: u128) -> (u128, u128) {
  const LO: u128 = u64::MAX as u128;

  let (a_lo, a_hi) = (a & LO, a >> 64);
  let (b_lo, b_hi) = (b & LO, b >> 64);

  let ll = a_lo * b_lo;
  let lh = a_lo * b_hi;
  let hl = a_hi * b_lo;
  let hh = a_hi * b_hi;

  // At most 3 * (2^64 - 1): no overflow.
  let mid = (ll >> 64) + (lh & LO) + (hl & LO);
  let lo = (ll & LO) | (mid << 64);
  let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
  (lo, hi)
}

#[inline(always)]
fn word<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
  let mut w = [0u8; N];
  w.copy_from_slice(&data[offset..offset + N]);
  w
}
