//! MD5 (RFC 1321).
//!
//! Broken for collision resistance; kept for interoperability with formats
//! that still carry MD5 fingerprints.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use super::md::BlockBuffer;
use crate::util::{read_u32_le, rotl32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// `floor(abs(sin(i + 1)) * 2^32)`.
const K: [u32; 64] = [
  0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
  0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
  0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
  0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
  0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
  0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
  0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
  0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left rotations, four per quarter.
const S: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
  let mut m = [0u32; 16];
  for (i, w) in m.iter_mut().enumerate() {
    *w = read_u32_le(block, i * 4);
  }

  let [mut a, mut b, mut c, mut d] = *state;

  for i in 0..64 {
    let (f, g) = match i / 16 {
      0 => ((b & c) | (!b & d), i),
      1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
      2 => (b ^ c ^ d, (3 * i + 5) % 16),
      _ => (c ^ (b | !d), (7 * i) % 16),
    };
    let t = f.wrapping_add(a).wrapping_add(K[i]).wrapping_add(m[g]);
    a = d;
    d = c;
    c = b;
    b = b.wrapping_add(rotl32(t, S[i / 16][i % 4]));
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
}

/// Streaming MD5 hasher.
#[derive(Clone, Debug)]
pub struct Md5 {
  state: [u32; 4],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Default for Md5 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buffer: BlockBuffer::new(),
    }
  }
}

impl Digest for Md5 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u8; 16];

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
    // MD5 is the one member of the family with a little-endian length.
    let bit_len = self.buffer.bit_len() as u64;
    self.buffer.pad(&bit_len.to_le_bytes(), |block| compress(&mut state, block));

    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
