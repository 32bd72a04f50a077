//! SHA-1 (FIPS 180-4).
//!
//! Practical collisions exist; [`Sha1`] is deprecated and every use warns.
//! Behavior is unchanged: it still produces standard SHA-1 digests.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule
#![allow(deprecated)]

use traits::Digest;

use super::md::BlockBuffer;
use crate::util::{read_u32_be, rotl32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
  // 16-word ring: w[i & 15] holds W[i] once round i has scheduled it.
  let mut w = [0u32; 16];
  for (i, word) in w.iter_mut().enumerate() {
    *word = read_u32_be(block, i * 4);
  }

  let [mut a, mut b, mut c, mut d, mut e] = *state;

  for i in 0..80 {
    if i >= 16 {
      w[i & 15] = rotl32(w[(i + 13) & 15] ^ w[(i + 8) & 15] ^ w[(i + 2) & 15] ^ w[i & 15], 1);
    }
    let f = match i / 20 {
      0 => (b & c) | (!b & d),
      2 => (b & c) | (b & d) | (c & d),
      _ => b ^ c ^ d,
    };
    let t = rotl32(a, 5)
      .wrapping_add(f)
      .wrapping_add(e)
      .wrapping_add(K[i / 20])
      .wrapping_add(w[i & 15]);
    e = d;
    d = c;
    c = rotl32(b, 30);
    b = a;
    a = t;
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
}

/// Streaming SHA-1 hasher.
#[deprecated(note = "SHA-1 is not collision resistant; use Sha256, Blake2b256, or Blake3")]
#[derive(Clone, Debug)]
pub struct Sha1 {
  state: [u32; 5],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buffer: BlockBuffer::new(),
    }
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;
  type Output = [u8; 20];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.buffer.update(data, |block| compress(&mut self.state, block));
  }

  fn finalize(&self) -> Self::Output {
    let mut state = self.state;
    let bit_len = self.buffer.bit_len() as u64;
    self.buffer.pad(&bit_len.to_be_bytes(), |block| compress(&mut state, block));

    let mut out = [0u8; 20];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
