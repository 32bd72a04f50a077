//! WyHash `final4` (**NOT CRYPTO**) with the default secret.
//!
//! Length thresholds: 0..=3 bytes are packed into one word, 4..=16 bytes are
//! read as two overlapping 4-byte pairs, 17..=47 bytes run a single 16-byte
//! lane, and 48 bytes and up run three independent 48-byte lanes first.
#![allow(clippy::indexing_slicing)] // Short-input byte picks are bounded by the length dispatch

use traits::FastHash;

use crate::util::{mul64x64, read_u32_le, read_u64_le};

const SECRET: [u64; 4] = [
  0x2d35_8dcc_aa6c_78a5,
  0x8bb8_4b93_962e_acc9,
  0x4b33_a62e_d433_d4a3,
  0x4d5a_2da5_1de1_aa47,
];

#[derive(Clone, Copy, Debug, Default)]
pub struct WyHash;

#[inline(always)]
const fn mix(a: u64, b: u64) -> u64 {
  let (lo, hi) = mul64x64(a, b);
  lo ^ hi
}

#[inline(always)]
fn r4(s: &[u8], offset: usize) -> u64 {
  read_u32_le(s, offset) as u64
}

#[inline(always)]
fn r3(s: &[u8]) -> u64 {
  let k = s.len();
  ((s[0] as u64) << 16) | ((s[k >> 1] as u64) << 8) | s[k - 1] as u64
}

fn wyhash(seed: u64, data: &[u8]) -> u64 {
  let len = data.len();
  let mut seed = seed ^ mix(seed ^ SECRET[0], SECRET[1]);

  let (a, b) = if len <= 16 {
    if len >= 4 {
      let step = (len >> 3) << 2;
      (
        (r4(data, 0) << 32) | r4(data, step),
        (r4(data, len - 4) << 32) | r4(data, len - 4 - step),
      )
    } else if len > 0 {
      (r3(data), 0)
    } else {
      (0, 0)
    }
  } else {
    let mut rest = data;
    if rest.len() >= 48 {
      let mut see1 = seed;
      let mut see2 = seed;
      while rest.len() >= 48 {
        seed = mix(read_u64_le(rest, 0) ^ SECRET[1], read_u64_le(rest, 8) ^ seed);
        see1 = mix(read_u64_le(rest, 16) ^ SECRET[2], read_u64_le(rest, 24) ^ see1);
        see2 = mix(read_u64_le(rest, 32) ^ SECRET[3], read_u64_le(rest, 40) ^ see2);
        rest = &rest[48..];
      }
      seed ^= see1 ^ see2;
    }
    while rest.len() > 16 {
      seed = mix(read_u64_le(rest, 0) ^ SECRET[1], read_u64_le(rest, 8) ^ seed);
      rest = &rest[16..];
    }
    // Always the last 16 bytes of the whole input.
    (read_u64_le(data, len - 16), read_u64_le(data, len - 8))
  };

  let (a, b) = mul64x64(a ^ SECRET[1], b ^ seed);
  mix(a ^ SECRET[0] ^ len as u64, b ^ SECRET[1])
}

impl FastHash for WyHash {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    wyhash(seed, data)
  }
}
