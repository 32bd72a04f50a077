//! Meow-style AES-round hash (**NOT CRYPTO**), gated on AES-NI.
//!
//! Eight 128-bit lanes absorb the input in 128-byte blocks with one `aesdec`
//! round per lane per block; the final partial block is zero-padded in a stack
//! buffer. Lanes are folded together with the length and seed, then run
//! through further `aesdec` rounds.
//!
//! Bit compatibility with upstream Meow v0.5 is not claimed. Hosts without AES
//! round instructions get `None` rather than a software fallback.
//!
//! ```
//! use hashes::fast::MeowHash;
//!
//! match MeowHash::hash(0, b"meow") {
//!   Some(h) => assert_eq!(Some(h), MeowHash::hash(0, b"meow")),
//!   None => assert!(!MeowHash::is_available()),
//! }
//! ```

use core::ffi::CStr;

use platform::caps::x86;
use traits::bytes;

use crate::types::Hash128;

/// Lane seeds: hex digits of pi.
#[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
const PI: [u64; 16] = [
  0x243f_6a88_85a3_08d3,
  0x1319_8a2e_0370_7344,
  0xa409_3822_299f_31d0,
  0x082e_fa98_ec4e_6c89,
  0x4528_21e6_38d0_1377,
  0xbe54_66cf_34e9_0c6c,
  0xc0ac_29b7_c97c_50dd,
  0x3f84_d5b5_b547_0917,
  0x9216_d5d9_8979_fb1b,
  0xd131_0ba6_98df_b5ac,
  0x2ffd_72db_d01a_dfb7,
  0xb8e1_afed_6a26_7e96,
  0xba7c_9045_f12c_7f99,
  0x24a1_9947_b391_6cf7,
  0x0801_f2e2_858e_fc16,
  0x6369_20d8_7157_4e69,
];

#[cfg(target_arch = "x86_64")]
mod aesni {
  #![allow(clippy::indexing_slicing)] // Lane indices are taken mod LANES; the tail is shorter than BLOCK

  use core::arch::x86_64::*;

  use super::PI;
  use crate::{types::Hash128, util::read_u64_le};

  const LANES: usize = 8;
  const BLOCK: usize = LANES * 16;

  #[inline]
  #[target_feature(enable = "sse2")]
  fn lane_word(block: &[u8; BLOCK], lane: usize) -> __m128i {
    _mm_set_epi64x(
      read_u64_le(block, lane * 16 + 8) as i64,
      read_u64_le(block, lane * 16) as i64,
    )
  }

  #[inline]
  #[target_feature(enable = "aes")]
  fn absorb(lanes: &mut [__m128i; LANES], block: &[u8; BLOCK]) {
    for i in 0..LANES {
      let data = lane_word(block, i);
      let next = (i + 1) % LANES;
      lanes[i] = _mm_aesdec_si128(lanes[i], data);
      lanes[next] = _mm_add_epi64(lanes[next], data);
    }
  }

  #[target_feature(enable = "aes")]
  pub(super) fn hash(seed: u64, data: &[u8]) -> Hash128 {
    let mut lanes = [_mm_setzero_si128(); LANES];
    for (i, lane) in lanes.iter_mut().enumerate() {
      *lane = _mm_set_epi64x((PI[2 * i + 1] ^ seed) as i64, PI[2 * i] as i64);
    }

    let (blocks, tail) = data.as_chunks::<BLOCK>();
    for block in blocks {
      absorb(&mut lanes, block);
    }
    if !tail.is_empty() {
      let mut last = [0u8; BLOCK];
      last[..tail.len()].copy_from_slice(tail);
      absorb(&mut lanes, &last);
    }

    let mut acc = _mm_xor_si128(lanes[0], _mm_set_epi64x(seed as i64, data.len() as i64));
    for lane in &lanes[1..] {
      acc = _mm_aesdec_si128(acc, *lane);
    }
    for lane in &lanes {
      acc = _mm_aesdec_si128(acc, *lane);
    }
    acc = _mm_aesdec_si128(acc, _mm_setzero_si128());

    let low = _mm_cvtsi128_si64(acc) as u64;
    let high = _mm_cvtsi128_si64(_mm_unpackhi_epi64(acc, acc)) as u64;
    Hash128::new(low, high)
  }
}

/// Capability-gated Meow-style hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeowHash;

impl MeowHash {
  pub const OUTPUT_SIZE: usize = 16;

  /// `true` when the running CPU has the AES round instructions this hash needs.
  #[must_use]
  #[inline]
  pub fn is_available() -> bool {
    cfg!(target_arch = "x86_64") && platform::caps().has(x86::AES_READY)
  }

  /// Hash `data` under `seed`, or `None` when [`is_available`](Self::is_available) is `false`.
  #[must_use]
  pub fn hash(seed: u64, data: &[u8]) -> Option<Hash128> {
    if !Self::is_available() {
      #[cfg(feature = "tracing")]
      tracing::trace!(len = data.len(), "MeowHash unavailable: no AES-NI");
      return None;
    }

    #[cfg(target_arch = "x86_64")]
    {
      // SAFETY: is_available() confirmed AES-NI and SSE2 on this CPU.
      Some(unsafe { aesni::hash(seed, data) })
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
      let _ = (seed, data);
      None
    }
  }

  /// [`hash`](Self::hash) over the UTF-8 bytes of `s`.
  #[must_use]
  #[inline]
  pub fn hash_str(seed: u64, s: &str) -> Option<Hash128> {
    Self::hash(seed, s.as_bytes())
  }

  /// [`hash`](Self::hash) over the bytes of `s` before its NUL.
  #[must_use]
  #[inline]
  pub fn hash_c_str(seed: u64, s: &CStr) -> Option<Hash128> {
    Self::hash(seed, s.to_bytes())
  }

  /// [`hash`](Self::hash) over `len` bytes starting at `ptr`.
  ///
  /// # Safety
  ///
  /// When `len > 0`, `ptr` must be valid for reads of `len` bytes.
  ///
  /// # Panics
  ///
  /// Panics if `ptr` is null and `len > 0`, whether or not the hash is available.
  #[must_use]
  #[inline]
  pub unsafe fn hash_raw(seed: u64, ptr: *const u8, len: usize) -> Option<Hash128> {
    // SAFETY: forwarded to the caller.
    Self::hash(seed, unsafe { bytes::from_raw(ptr, len) })
  }
}
