//! SpookyHash V2 (**NOT CRYPTO**).
//!
//! Messages under 192 bytes take the four-word short path. Longer messages
//! are absorbed in 96-byte blocks into twelve words of state; the last partial
//! block is zero-padded with its length in the final byte.
#![allow(clippy::indexing_slicing)] // State indices are taken mod 12; buffer slices are bounded by buf_len

use core::{cmp::min, fmt, hash::Hasher};

use traits::FastHash;

use crate::{types::Hash128, util::read_u64_le};

const NUM_VARS: usize = 12;
const BLOCK_SIZE: usize = NUM_VARS * 8;
const BUF_SIZE: usize = 2 * BLOCK_SIZE;
const SC_CONST: u64 = 0xdead_beef_dead_beef;

const MIX_ROT: [u32; NUM_VARS] = [11, 32, 43, 31, 17, 28, 39, 57, 55, 54, 22, 46];
const END_ROT: [u32; NUM_VARS] = [44, 15, 34, 21, 38, 33, 10, 13, 38, 53, 42, 54];

type State = [u64; NUM_VARS];

#[inline(always)]
fn block_words(block: &[u8; BLOCK_SIZE]) -> State {
  let mut words = [0u64; NUM_VARS];
  for (i, w) in words.iter_mut().enumerate() {
    *w = read_u64_le(block, i * 8);
  }
  words
}

#[inline(always)]
const fn init_state(seed1: u64, seed2: u64) -> State {
  [
    seed1, seed2, SC_CONST, seed1, seed2, SC_CONST, seed1, seed2, SC_CONST, seed1, seed2, SC_CONST,
  ]
}

#[inline(always)]
fn mix(s: &mut State, block: &[u8; BLOCK_SIZE]) {
  let data = block_words(block);
  for i in 0..NUM_VARS {
    let prev = (i + 11) % NUM_VARS;
    s[i] = s[i].wrapping_add(data[i]);
    s[(i + 2) % NUM_VARS] ^= s[(i + 10) % NUM_VARS];
    s[prev] ^= s[i];
    s[i] = s[i].rotate_left(MIX_ROT[i]);
    s[prev] = s[prev].wrapping_add(s[(i + 1) % NUM_VARS]);
  }
}

#[inline(always)]
fn end_partial(h: &mut State) {
  for (i, &rot) in END_ROT.iter().enumerate() {
    let prev = (i + 11) % NUM_VARS;
    let next = (i + 1) % NUM_VARS;
    h[prev] = h[prev].wrapping_add(h[next]);
    h[(i + 2) % NUM_VARS] ^= h[prev];
    h[next] = h[next].rotate_left(rot);
  }
}

fn end(h: &mut State, block: &[u8; BLOCK_SIZE]) {
  let data = block_words(block);
  for (x, d) in h.iter_mut().zip(data) {
    *x = x.wrapping_add(d);
  }
  end_partial(h);
  end_partial(h);
  end_partial(h);
}

#[inline(always)]
fn short_mix(h: &mut [u64; 4]) {
  const ROT: [u32; 12] = [50, 52, 30, 41, 54, 48, 38, 37, 62, 34, 5, 36];
  for (i, &rot) in ROT.iter().enumerate() {
    let a = (i + 2) % 4;
    let b = (i + 3) % 4;
    let c = i % 4;
    h[a] = h[a].rotate_left(rot).wrapping_add(h[b]);
    h[c] ^= h[a];
  }
}

#[inline(always)]
fn short_end(h: &mut [u64; 4]) {
  const ROT: [u32; 11] = [15, 52, 26, 51, 28, 9, 47, 54, 32, 25, 63];
  for (i, &rot) in ROT.iter().enumerate() {
    let a = (i + 2) % 4;
    let b = (i + 3) % 4;
    h[b] ^= h[a];
    h[a] = h[a].rotate_left(rot);
    h[b] = h[b].wrapping_add(h[a]);
  }
}

/// Little-endian value of up to eight bytes, zero-extended.
#[inline(always)]
fn partial_word(bytes: &[u8]) -> u64 {
  let mut buf = [0u8; 8];
  buf[..bytes.len()].copy_from_slice(bytes);
  u64::from_le_bytes(buf)
}

fn short(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  let mut h = [seed1, seed2, SC_CONST, SC_CONST];

  let (blocks, mut rest) = data.as_chunks::<32>();
  for block in blocks {
    h[2] = h[2].wrapping_add(read_u64_le(block, 0));
    h[3] = h[3].wrapping_add(read_u64_le(block, 8));
    short_mix(&mut h);
    h[0] = h[0].wrapping_add(read_u64_le(block, 16));
    h[1] = h[1].wrapping_add(read_u64_le(block, 24));
  }
  if rest.len() >= 16 {
    h[2] = h[2].wrapping_add(read_u64_le(rest, 0));
    h[3] = h[3].wrapping_add(read_u64_le(rest, 8));
    short_mix(&mut h);
    rest = &rest[16..];
  }

  h[3] = h[3].wrapping_add((data.len() as u64) << 56);
  match rest.len() {
    0 => {
      h[2] = h[2].wrapping_add(SC_CONST);
      h[3] = h[3].wrapping_add(SC_CONST);
    }
    1..=7 => h[2] = h[2].wrapping_add(partial_word(rest)),
    _ => {
      h[2] = h[2].wrapping_add(read_u64_le(rest, 0));
      h[3] = h[3].wrapping_add(partial_word(&rest[8..]));
    }
  }

  short_end(&mut h);
  (h[0], h[1])
}

fn finish_long(mut state: State, tail: &[u8]) -> (u64, u64) {
  let mut last = [0u8; BLOCK_SIZE];
  last[..tail.len()].copy_from_slice(tail);
  last[BLOCK_SIZE - 1] = tail.len() as u8;
  end(&mut state, &last);
  (state[0], state[1])
}

fn spooky128(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  if data.len() < BUF_SIZE {
    return short(data, seed1, seed2);
  }

  let mut state = init_state(seed1, seed2);
  let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
  for block in blocks {
    mix(&mut state, block);
  }
  finish_long(state, tail)
}

/// SpookyHash V2, 128-bit. The seed is the `(seed1, seed2)` pair as `(low, high)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky128;

impl FastHash for Spooky128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Hash128;
  type Seed = Hash128;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let (h1, h2) = spooky128(data, seed.low, seed.high);
    Hash128::new(h1, h2)
  }
}

/// SpookyHash V2, first 64 bits, both seed words set to `seed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky64;

impl FastHash for Spooky64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    spooky128(data, seed, seed).0
  }
}

/// SpookyHash V2, first 32 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky32;

impl FastHash for Spooky32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    spooky128(data, seed as u64, seed as u64).0 as u32
  }
}

/// Incremental SpookyHash V2.
///
/// Produces the same 128-bit value as [`Spooky128`] over the concatenation of
/// every `update`. `finalize` does not consume the state, so updates may
/// continue afterwards.
#[derive(Clone)]
pub struct SpookyHasher {
  seed: Hash128,
  state: State,
  buf: [u8; BUF_SIZE],
  buf_len: usize,
  total_len: u64,
}

impl SpookyHasher {
  #[must_use]
  #[inline]
  pub const fn new(seed: Hash128) -> Self {
    Self {
      seed,
      state: [0u64; NUM_VARS],
      buf: [0u8; BUF_SIZE],
      buf_len: 0,
      total_len: 0,
    }
  }

  pub fn update(&mut self, mut data: &[u8]) {
    if self.buf_len + data.len() < BUF_SIZE {
      self.buf[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
      self.buf_len += data.len();
      self.total_len = self.total_len.wrapping_add(data.len() as u64);
      return;
    }

    if self.total_len < BUF_SIZE as u64 {
      self.state = init_state(self.seed.low, self.seed.high);
    }
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.buf_len != 0 {
      let prefix = min(BUF_SIZE - self.buf_len, data.len());
      self.buf[self.buf_len..].copy_from_slice(&data[..prefix]);
      let (pair, _) = self.buf.as_chunks::<BLOCK_SIZE>();
      for block in pair {
        mix(&mut self.state, block);
      }
      data = &data[prefix..];
    }

    let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
      mix(&mut self.state, block);
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.buf_len = tail.len();
  }

  #[must_use]
  pub fn finalize(&self) -> Hash128 {
    let (h1, h2) = if self.total_len < BUF_SIZE as u64 {
      short(&self.buf[..self.buf_len], self.seed.low, self.seed.high)
    } else {
      // The buffer may hold one whole block plus a partial one.
      let mut state = self.state;
      let mut tail = &self.buf[..self.buf_len];
      if let Some((block, rest)) = tail.split_first_chunk::<BLOCK_SIZE>() {
        mix(&mut state, block);
        tail = rest;
      }
      finish_long(state, tail)
    };
    Hash128::new(h1, h2)
  }

  #[inline]
  pub fn reset(&mut self) {
    *self = Self::new(self.seed);
  }
}

impl Default for SpookyHasher {
  #[inline]
  fn default() -> Self {
    Self::new(Hash128::default())
  }
}

impl fmt::Debug for SpookyHasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SpookyHasher")
      .field("seed", &self.seed)
      .field("total_len", &self.total_len)
      .finish_non_exhaustive()
  }
}

impl Hasher for SpookyHasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.finalize().low
  }
}
