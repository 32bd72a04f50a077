//! xxHash32 and xxHash64 (**NOT CRYPTO**), one-shot and streaming.
//!
//! Both variants run four accumulator lanes over 16-byte (XXH32) or 32-byte
//! (XXH64) stripes once the input is at least one stripe long, fold the lanes,
//! absorb the remaining tail in word and byte steps, and finish with an
//! avalanche.
#![allow(clippy::indexing_slicing)] // Stripe buffers are fixed-size; tail slices are bounded by buf_len

use core::{cmp::min, fmt, hash::Hasher};

use traits::FastHash;

use crate::util::{read_u32_le, read_u64_le};

const P32_1: u32 = 0x9E37_79B1;
const P32_2: u32 = 0x85EB_CA77;
const P32_3: u32 = 0xC2B2_AE3D;
const P32_4: u32 = 0x27D4_EB2F;
const P32_5: u32 = 0x1656_67B1;

const P64_1: u64 = 0x9E37_79B1_85EB_CA87;
const P64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const P64_3: u64 = 0x1656_67B1_9E37_79F9;
const P64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const P64_5: u64 = 0x27D4_EB2F_1656_67C5;

const STRIPE32: usize = 16;
const STRIPE64: usize = 32;

// ---------------------------------------------------------------------------
// XXH32
// ---------------------------------------------------------------------------

#[inline(always)]
const fn round32(acc: u32, input: u32) -> u32 {
  acc.wrapping_add(input.wrapping_mul(P32_2)).rotate_left(13).wrapping_mul(P32_1)
}

#[derive(Clone, Copy)]
struct Lanes32([u32; 4]);

impl Lanes32 {
  #[inline]
  const fn new(seed: u32) -> Self {
    Self([
      seed.wrapping_add(P32_1).wrapping_add(P32_2),
      seed.wrapping_add(P32_2),
      seed,
      seed.wrapping_sub(P32_1),
    ])
  }

  #[inline(always)]
  fn stripe(&mut self, stripe: &[u8; STRIPE32]) {
    for (i, lane) in self.0.iter_mut().enumerate() {
      *lane = round32(*lane, read_u32_le(stripe, i * 4));
    }
  }

  #[inline]
  const fn converge(&self) -> u32 {
    let [v1, v2, v3, v4] = self.0;
    v1.rotate_left(1)
      .wrapping_add(v2.rotate_left(7))
      .wrapping_add(v3.rotate_left(12))
      .wrapping_add(v4.rotate_left(18))
  }
}

/// Absorb a tail shorter than one stripe and avalanche.
fn finish32(mut h: u32, tail: &[u8]) -> u32 {
  let (words, bytes) = tail.as_chunks::<4>();
  for word in words {
    h = h.wrapping_add(u32::from_le_bytes(*word).wrapping_mul(P32_3));
    h = h.rotate_left(17).wrapping_mul(P32_4);
  }
  for &byte in bytes {
    h = h.wrapping_add((byte as u32).wrapping_mul(P32_5));
    h = h.rotate_left(11).wrapping_mul(P32_1);
  }

  h ^= h >> 15;
  h = h.wrapping_mul(P32_2);
  h ^= h >> 13;
  h = h.wrapping_mul(P32_3);
  h ^ (h >> 16)
}

fn xxh32(seed: u32, data: &[u8]) -> u32 {
  let (stripes, tail) = data.as_chunks::<STRIPE32>();
  let h = if stripes.is_empty() {
    seed.wrapping_add(P32_5)
  } else {
    let mut lanes = Lanes32::new(seed);
    for stripe in stripes {
      lanes.stripe(stripe);
    }
    lanes.converge()
  };
  finish32(h.wrapping_add(data.len() as u32), tail)
}

/// xxHash32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh32;

impl FastHash for Xxh32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    xxh32(seed, data)
  }
}

/// Streaming xxHash32.
#[derive(Clone)]
pub struct Xxh32Hasher {
  seed: u32,
  lanes: Lanes32,
  buf: [u8; STRIPE32],
  buf_len: usize,
  total_len: u64,
}

impl Xxh32Hasher {
  #[must_use]
  #[inline]
  pub const fn with_seed(seed: u32) -> Self {
    Self {
      seed,
      lanes: Lanes32::new(seed),
      buf: [0u8; STRIPE32],
      buf_len: 0,
      total_len: 0,
    }
  }

  pub fn update(&mut self, mut data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.buf_len != 0 {
      let take = min(STRIPE32 - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];
      if self.buf_len < STRIPE32 {
        return;
      }
      self.lanes.stripe(&self.buf);
      self.buf_len = 0;
    }

    let (stripes, tail) = data.as_chunks::<STRIPE32>();
    for stripe in stripes {
      self.lanes.stripe(stripe);
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.buf_len = tail.len();
  }

  #[must_use]
  pub fn finalize(&self) -> u32 {
    let h = if self.total_len >= STRIPE32 as u64 {
      self.lanes.converge()
    } else {
      self.seed.wrapping_add(P32_5)
    };
    finish32(h.wrapping_add(self.total_len as u32), &self.buf[..self.buf_len])
  }

  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }
}

impl Default for Xxh32Hasher {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl fmt::Debug for Xxh32Hasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Xxh32Hasher")
      .field("seed", &self.seed)
      .field("total_len", &self.total_len)
      .finish_non_exhaustive()
  }
}

// ---------------------------------------------------------------------------
// XXH64
// ---------------------------------------------------------------------------

#[inline(always)]
const fn round64(acc: u64, input: u64) -> u64 {
  acc.wrapping_add(input.wrapping_mul(P64_2)).rotate_left(31).wrapping_mul(P64_1)
}

#[inline(always)]
const fn merge_round64(acc: u64, lane: u64) -> u64 {
  (acc ^ round64(0, lane)).wrapping_mul(P64_1).wrapping_add(P64_4)
}

#[derive(Clone, Copy)]
struct Lanes64([u64; 4]);

impl Lanes64 {
  #[inline]
  const fn new(seed: u64) -> Self {
    Self([
      seed.wrapping_add(P64_1).wrapping_add(P64_2),
      seed.wrapping_add(P64_2),
      seed,
      seed.wrapping_sub(P64_1),
    ])
  }

  #[inline(always)]
  fn stripe(&mut self, stripe: &[u8; STRIPE64]) {
    for (i, lane) in self.0.iter_mut().enumerate() {
      *lane = round64(*lane, read_u64_le(stripe, i * 8));
    }
  }

  #[inline]
  const fn converge(&self) -> u64 {
    let [v1, v2, v3, v4] = self.0;
    let h = v1
      .rotate_left(1)
      .wrapping_add(v2.rotate_left(7))
      .wrapping_add(v3.rotate_left(12))
      .wrapping_add(v4.rotate_left(18));
    merge_round64(merge_round64(merge_round64(merge_round64(h, v1), v2), v3), v4)
  }
}

fn finish64(mut h: u64, tail: &[u8]) -> u64 {
  let (words, rest) = tail.as_chunks::<8>();
  for word in words {
    h ^= round64(0, u64::from_le_bytes(*word));
    h = h.rotate_left(27).wrapping_mul(P64_1).wrapping_add(P64_4);
  }
  let (halves, bytes) = rest.as_chunks::<4>();
  for half in halves {
    h ^= (u32::from_le_bytes(*half) as u64).wrapping_mul(P64_1);
    h = h.rotate_left(23).wrapping_mul(P64_2).wrapping_add(P64_3);
  }
  for &byte in bytes {
    h ^= (byte as u64).wrapping_mul(P64_5);
    h = h.rotate_left(11).wrapping_mul(P64_1);
  }

  h ^= h >> 33;
  h = h.wrapping_mul(P64_2);
  h ^= h >> 29;
  h = h.wrapping_mul(P64_3);
  h ^ (h >> 32)
}

fn xxh64(seed: u64, data: &[u8]) -> u64 {
  let (stripes, tail) = data.as_chunks::<STRIPE64>();
  let h = if stripes.is_empty() {
    seed.wrapping_add(P64_5)
  } else {
    let mut lanes = Lanes64::new(seed);
    for stripe in stripes {
      lanes.stripe(stripe);
    }
    lanes.converge()
  };
  finish64(h.wrapping_add(data.len() as u64), tail)
}

/// xxHash64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh64;

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    xxh64(seed, data)
  }
}

/// Streaming xxHash64. Also usable as a [`core::hash::Hasher`].
#[derive(Clone)]
pub struct Xxh64Hasher {
  seed: u64,
  lanes: Lanes64,
  buf: [u8; STRIPE64],
  buf_len: usize,
  total_len: u64,
}

impl Xxh64Hasher {
  #[must_use]
  #[inline]
  pub const fn with_seed(seed: u64) -> Self {
    Self {
      seed,
      lanes: Lanes64::new(seed),
      buf: [0u8; STRIPE64],
      buf_len: 0,
      total_len: 0,
    }
  }

  pub fn update(&mut self, mut data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.buf_len != 0 {
      let take = min(STRIPE64 - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];
      if self.buf_len < STRIPE64 {
        return;
      }
      self.lanes.stripe(&self.buf);
      self.buf_len = 0;
    }

    let (stripes, tail) = data.as_chunks::<STRIPE64>();
    for stripe in stripes {
      self.lanes.stripe(stripe);
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.buf_len = tail.len();
  }

  #[must_use]
  pub fn finalize(&self) -> u64 {
    let h = if self.total_len >= STRIPE64 as u64 {
      self.lanes.converge()
    } else {
      self.seed.wrapping_add(P64_5)
    };
    finish64(h.wrapping_add(self.total_len), &self.buf[..self.buf_len])
  }

  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }
}

impl Default for Xxh64Hasher {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl fmt::Debug for Xxh64Hasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Xxh64Hasher")
      .field("seed", &self.seed)
      .field("total_len", &self.total_len)
      .finish_non_exhaustive()
  }
}

impl Hasher for Xxh64Hasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.finalize()
  }
}
