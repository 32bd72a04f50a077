//! CityHash v1.1 (**NOT CRYPTO**): `CityHash64` and `CityHash128`.
//!
//! Inputs up to 64 bytes take one of three closed-form paths (0..=16, 17..=32,
//! 33..=64). Longer inputs hash the tail first and then run a 64-byte stride
//! loop over 56 bytes of state. The short-input helpers and the stride loop
//! are shared with [`super::farm`].
#![allow(clippy::indexing_slicing)] // Offsets are derived from the length-dispatch bounds

use core::mem::swap;

use traits::FastHash;

use crate::{
  types::Hash128,
  util::{read_u32_le, read_u64_le},
};

pub(crate) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(crate) const K1: u64 = 0xb492_b66f_be98_f273;
pub(crate) const K2: u64 = 0x9ae1_6a3b_2f90_404f;

const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

#[inline(always)]
pub(crate) fn fetch64(s: &[u8], offset: usize) -> u64 {
  read_u64_le(s, offset)
}

#[inline(always)]
fn fetch32(s: &[u8], offset: usize) -> u64 {
  read_u32_le(s, offset) as u64
}

#[inline(always)]
pub(crate) const fn shift_mix(v: u64) -> u64 {
  v ^ (v >> 47)
}

#[inline(always)]
pub(crate) const fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
  let mut a = (u ^ v).wrapping_mul(mul);
  a ^= a >> 47;
  let mut b = (v ^ a).wrapping_mul(mul);
  b ^= b >> 47;
  b.wrapping_mul(mul)
}

/// 128-to-64 bit fold of `(u, v)`.
#[inline(always)]
pub(crate) const fn hash_len_16(u: u64, v: u64) -> u64 {
  hash_len_16_mul(u, v, K_MUL)
}

pub(crate) fn hash_len_0_to_16(s: &[u8]) -> u64 {
  let len = s.len();
  if len >= 8 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(s, 0).wrapping_add(K2);
    let b = fetch64(s, len - 8);
    let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
    let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
    return hash_len_16_mul(c, d, mul);
  }
  if len >= 4 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch32(s, 0);
    return hash_len_16_mul((len as u64).wrapping_add(a << 3), fetch32(s, len - 4), mul);
  }
  if len > 0 {
    let a = s[0] as u32;
    let b = s[len >> 1] as u32;
    let c = s[len - 1] as u32;
    let y = a.wrapping_add(b << 8);
    let z = (len as u32).wrapping_add(c << 2);
    return shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0)).wrapping_mul(K2);
  }
  K2
}

pub(crate) fn hash_len_17_to_32(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K1);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  hash_len_16_mul(
    a.wrapping_add(b).rotate_right(43).wrapping_add(c.rotate_right(30)).wrapping_add(d),
    a.wrapping_add(b.wrapping_add(K2).rotate_right(18)).wrapping_add(c),
    mul,
  )
}

fn hash_len_33_to_64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K2);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 24);
  let d = fetch64(s, len - 32);
  let e = fetch64(s, 16).wrapping_mul(K2);
  let f = fetch64(s, 24).wrapping_mul(9);
  let g = fetch64(s, len - 8);
  let h = fetch64(s, len - 16).wrapping_mul(mul);
  let u = a.wrapping_add(g).rotate_right(43).wrapping_add(b.rotate_right(30).wrapping_add(c).wrapping_mul(9));
  let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
  let w = u.wrapping_add(v).wrapping_mul(mul).swap_bytes().wrapping_add(h);
  let x = e.wrapping_add(f).rotate_right(42).wrapping_add(c);
  let y = v.wrapping_add(w).wrapping_mul(mul).swap_bytes().wrapping_add(g).wrapping_mul(mul);
  let z = e.wrapping_add(f).wrapping_add(c);
  let a = x.wrapping_add(z).wrapping_mul(mul).wrapping_add(y).swap_bytes().wrapping_add(b);
  let b = shift_mix(z.wrapping_add(a).wrapping_mul(mul).wrapping_add(d).wrapping_add(h)).wrapping_mul(mul);
  b.wrapping_add(x)
}

#[inline(always)]
const fn weak_hash_len_32_with_seeds_raw(w: u64, x: u64, y: u64, z: u64, a: u64, b: u64) -> (u64, u64) {
  let a = a.wrapping_add(w);
  let b = b.wrapping_add(a).wrapping_add(z).rotate_right(21);
  let c = a;
  let a = a.wrapping_add(x).wrapping_add(y);
  let b = b.wrapping_add(a.rotate_right(44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

/// 16-byte hash of `s[0..32]` mixed with `a` and `b`.
#[inline(always)]
pub(crate) fn weak_hash_len_32_with_seeds(s: &[u8], a: u64, b: u64) -> (u64, u64) {
  weak_hash_len_32_with_seeds_raw(fetch64(s, 0), fetch64(s, 8), fetch64(s, 16), fetch64(s, 24), a, b)
}

/// The 56 bytes of state carried through the long-input stride loop.
#[derive(Clone, Copy)]
pub(crate) struct LongState {
  pub(crate) x: u64,
  pub(crate) y: u64,
  pub(crate) z: u64,
  pub(crate) v: (u64, u64),
  pub(crate) w: (u64, u64),
}

impl LongState {
  /// Absorb one 64-byte stride starting at `s[0]`.
  #[inline(always)]
  pub(crate) fn round(&mut self, s: &[u8], mul: u64) {
    self.x = self
      .x
      .wrapping_add(self.y)
      .wrapping_add(self.v.0)
      .wrapping_add(fetch64(s, 8))
      .rotate_right(37)
      .wrapping_mul(mul);
    self.y = self.y.wrapping_add(self.v.1).wrapping_add(fetch64(s, 48)).rotate_right(42).wrapping_mul(mul);
    self.x ^= self.w.1;
    self.y = self.y.wrapping_add(self.v.0).wrapping_add(fetch64(s, 40));
    self.z = self.z.wrapping_add(self.w.0).rotate_right(33).wrapping_mul(mul);
    self.v = weak_hash_len_32_with_seeds(s, self.v.1.wrapping_mul(mul), self.x.wrapping_add(self.w.0));
    self.w = weak_hash_len_32_with_seeds(
      &s[32..],
      self.z.wrapping_add(self.w.1),
      self.y.wrapping_add(fetch64(s, 16)),
    );
    swap(&mut self.z, &mut self.x);
  }
}

fn city_hash64(s: &[u8]) -> u64 {
  let len = s.len();
  if len <= 16 {
    return hash_len_0_to_16(s);
  }
  if len <= 32 {
    return hash_len_17_to_32(s);
  }
  if len <= 64 {
    return hash_len_33_to_64(s);
  }

  // Seed the state from the last 64 bytes, then stride from the front.
  let x = fetch64(s, len - 40);
  let y = fetch64(s, len - 16).wrapping_add(fetch64(s, len - 56));
  let z = hash_len_16(fetch64(s, len - 48).wrapping_add(len as u64), fetch64(s, len - 24));
  let mut st = LongState {
    x: x.wrapping_mul(K1).wrapping_add(fetch64(s, 0)),
    y,
    z,
    v: weak_hash_len_32_with_seeds(&s[len - 64..], len as u64, z),
    w: weak_hash_len_32_with_seeds(&s[len - 32..], y.wrapping_add(K1), x),
  };

  for stride in s[..(len - 1) & !63].chunks_exact(64) {
    st.round(stride, K1);
  }

  hash_len_16(
    hash_len_16(st.v.0, st.w.0)
      .wrapping_add(shift_mix(st.y).wrapping_mul(K1))
      .wrapping_add(st.z),
    hash_len_16(st.v.1, st.w.1).wrapping_add(st.x),
  )
}

/// Seeded 128-bit hash for inputs under 128 bytes.
fn city_murmur(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  let mut a = seed.low;
  let mut b = seed.high;
  let mut c;
  let mut d;

  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len_0_to_16(s));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(s, 0) } else { c }));
  } else {
    c = hash_len_16(fetch64(s, len - 8).wrapping_add(K1), a);
    d = hash_len_16(b.wrapping_add(len as u64), c.wrapping_add(fetch64(s, len - 16)));
    a = a.wrapping_add(d);
    for chunk in s.chunks_exact(16).take((len - 1) / 16) {
      a ^= shift_mix(fetch64(chunk, 0).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(fetch64(chunk, 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
    }
  }

  let a = hash_len_16(a, c);
  let b = hash_len_16(d, b);
  Hash128::new(a ^ b, hash_len_16(b, a))
}

pub(crate) fn city_hash128_with_seed(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  if len < 128 {
    return city_murmur(s, seed);
  }

  let x = seed.low;
  let y = seed.high;
  let z = (len as u64).wrapping_mul(K1);
  let v0 = (y ^ K1).rotate_right(49).wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  let mut st = LongState {
    x,
    y,
    z,
    v: (v0, v0.rotate_right(42).wrapping_mul(K1).wrapping_add(fetch64(s, 8))),
    w: (
      y.wrapping_add(z).rotate_right(35).wrapping_mul(K1).wrapping_add(x),
      x.wrapping_add(fetch64(s, 88)).rotate_right(53).wrapping_mul(K1),
    ),
  };

  let (pairs, _) = s.as_chunks::<128>();
  for pair in pairs {
    st.round(&pair[..64], K1);
    st.round(&pair[64..], K1);
  }

  let LongState {
    mut x,
    mut y,
    mut z,
    mut v,
    mut w,
  } = st;
  x = x.wrapping_add(v.0.wrapping_add(z).rotate_right(49).wrapping_mul(K0));
  y = y.wrapping_mul(K0).wrapping_add(w.1.rotate_right(37));
  z = z.wrapping_mul(K0).wrapping_add(w.0.rotate_right(27));
  w.0 = w.0.wrapping_mul(9);
  v.0 = v.0.wrapping_mul(K0);

  // Up to four 32-byte windows ending at the last byte, walking backwards.
  let rem = len % 128;
  let mut tail_done = 0;
  while tail_done < rem {
    tail_done += 32;
    let t = &s[len - tail_done..];
    y = x.wrapping_add(y).rotate_right(42).wrapping_mul(K0).wrapping_add(v.1);
    w.0 = w.0.wrapping_add(fetch64(t, 16));
    x = x.wrapping_mul(K0).wrapping_add(w.0);
    z = z.wrapping_add(w.1).wrapping_add(fetch64(t, 0));
    w.1 = w.1.wrapping_add(v.0);
    v = weak_hash_len_32_with_seeds(t, v.0.wrapping_add(z), v.1);
    v.0 = v.0.wrapping_mul(K0);
  }

  let x = hash_len_16(x, v.0);
  let y = hash_len_16(y.wrapping_add(z), w.0);
  Hash128::new(
    hash_len_16(x.wrapping_add(v.1), w.1).wrapping_add(y),
    hash_len_16(x.wrapping_add(w.1), y.wrapping_add(v.1)),
  )
}

pub(crate) fn city_hash128(s: &[u8]) -> Hash128 {
  if s.len() >= 16 {
    city_hash128_with_seed(&s[16..], Hash128::new(fetch64(s, 0), fetch64(s, 8).wrapping_add(K0)))
  } else {
    city_hash128_with_seed(s, Hash128::new(K0, K1))
  }
}

/// CityHash64 v1.1.
///
/// `hash` is the unseeded function; `hash_with_seed(seed, data)` is
/// `CityHash64WithSeed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash64;

impl CityHash64 {
  /// `CityHash64WithSeeds`.
  #[must_use]
  #[inline]
  pub fn hash_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
    hash_len_16(city_hash64(data).wrapping_sub(seed0), seed1)
  }
}

impl FastHash for CityHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    city_hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    Self::hash_with_seeds(data, K2, seed)
  }
}

/// CityHash128 v1.1.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash128;

impl FastHash for CityHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Hash128;
  type Seed = Hash128;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    city_hash128(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    city_hash128_with_seed(data, seed)
  }
}
