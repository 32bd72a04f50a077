//! FarmHash fingerprints (**NOT CRYPTO**).
//!
//! [`FarmHash64`] is `farmhashna::Hash64`, the portable function behind
//! `Fingerprint64`. [`FarmHash128`] is `farmhashcc::Fingerprint128`, which is
//! CityHash128 v1.1. Both are stable across platforms and releases.
#![allow(clippy::indexing_slicing)] // Offsets are derived from the length-dispatch bounds

use traits::FastHash;

use super::city::{
  K0, K1, K2, LongState, city_hash128, city_hash128_with_seed, fetch64, hash_len_0_to_16, hash_len_16,
  hash_len_16_mul, hash_len_17_to_32, shift_mix, weak_hash_len_32_with_seeds,
};
use crate::types::Hash128;

fn hash_len_33_to_64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K2);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  let y = a.wrapping_add(b).rotate_right(43).wrapping_add(c.rotate_right(30)).wrapping_add(d);
  let z = hash_len_16_mul(y, a.wrapping_add(b.wrapping_add(K2).rotate_right(18)).wrapping_add(c), mul);
  let e = fetch64(s, 16).wrapping_mul(mul);
  let f = fetch64(s, 24);
  let g = y.wrapping_add(fetch64(s, len - 32)).wrapping_mul(mul);
  let h = z.wrapping_add(fetch64(s, len - 24)).wrapping_mul(mul);
  hash_len_16_mul(
    e.wrapping_add(f).rotate_right(43).wrapping_add(g.rotate_right(30)).wrapping_add(h),
    e.wrapping_add(f.wrapping_add(a).rotate_right(18)).wrapping_add(g),
    mul,
  )
}

fn farm_hash64(s: &[u8]) -> u64 {
  const SEED: u64 = 81;

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

  let y = SEED.wrapping_mul(K1).wrapping_add(113);
  let mut st = LongState {
    x: SEED.wrapping_mul(K2).wrapping_add(fetch64(s, 0)),
    y,
    z: shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2),
    v: (0, 0),
    w: (0, 0),
  };

  // Stride everything but the last 1..=64 bytes.
  for stride in s[..((len - 1) / 64) * 64].chunks_exact(64) {
    st.round(stride, K1);
  }

  // The last 64 bytes get one more round under a state-dependent multiplier.
  let mul = K1.wrapping_add((st.z & 0xff) << 1);
  let last = &s[len - 64..];
  let LongState {
    mut x,
    mut y,
    mut z,
    mut v,
    mut w,
  } = st;
  w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
  v.0 = v.0.wrapping_add(w.0);
  w.0 = w.0.wrapping_add(v.0);
  x = x
    .wrapping_add(y)
    .wrapping_add(v.0)
    .wrapping_add(fetch64(last, 8))
    .rotate_right(37)
    .wrapping_mul(mul);
  y = y.wrapping_add(v.1).wrapping_add(fetch64(last, 48)).rotate_right(42).wrapping_mul(mul);
  x ^= w.1.wrapping_mul(9);
  y = y.wrapping_add(v.0.wrapping_mul(9)).wrapping_add(fetch64(last, 40));
  z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(mul);
  v = weak_hash_len_32_with_seeds(last, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
  w = weak_hash_len_32_with_seeds(&last[32..], z.wrapping_add(w.1), y.wrapping_add(fetch64(last, 16)));
  core::mem::swap(&mut z, &mut x);

  hash_len_16_mul(
    hash_len_16_mul(v.0, w.0, mul)
      .wrapping_add(shift_mix(y).wrapping_mul(K0))
      .wrapping_add(z),
    hash_len_16_mul(v.1, w.1, mul).wrapping_add(x),
    mul,
  )
}

/// `farmhashna` 64-bit fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarmHash64;

impl FarmHash64 {
  /// `Hash64WithSeeds`.
  #[must_use]
  #[inline]
  pub fn hash_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
    hash_len_16(farm_hash64(data).wrapping_sub(seed0), seed1)
  }
}

impl FastHash for FarmHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    farm_hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    Self::hash_with_seeds(data, K2, seed)
  }
}

/// `farmhashcc` 128-bit fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarmHash128;

impl FastHash for FarmHash128 {
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fast::{CityHash128, pattern};

  /// `(len, hash, seed 0x1234567890abcdef, seeds (0x0123456789abcdef, 0xfedcba9876543210))`
  const VECTORS: &[(usize, u64, u64, u64)] = &[
    (0, 0x9ae16a3b2f90404f, 0x15615811497ca75f, 0xcb0b0ef713007cf7),
    (1, 0xbe6056edf5e94b54, 0x7de612c78b70e7d8, 0x26ee570858f569d7),
    (2, 0xc2a04665ed038d75, 0x1a2b2422cfce1795, 0x4224fe43b3e372cf),
    (3, 0x94a13d22e9eba49a, 0x4d9d0be1e292fd72, 0xa0af7b114f64b2fc),
    (4, 0x82bffd898958e540, 0x3c8e357454f345c4, 0x64dac180ed2e0759),
    (5, 0xb4bfa9e87732c149, 0x8c139fd77471b2f9, 0x2f561f11a5f3dd99),
    (7, 0xa2e0bff20db0a6a1, 0xf022287b7154d4f4, 0x4ed28b61f34f32e1),
    (8, 0xad5a13e1e8e93b98, 0x323e0cf733bb7c76, 0x2e09bbbe6cf87084),
    (9, 0x81371e150e4ad84f, 0x92f10e02d446396e, 0x0692e63eababf289),
    (12, 0x9fd5df33aefc3d7d, 0xda465e64690c885c, 0x0cd442d6ebea7fc2),
    (15, 0x862a51555943bd9d, 0x05ab0f9323dd1a83, 0x74b080e325a314b9),
    (16, 0x0efd25a0a34156d4, 0xca82a54e2cafdcea, 0x2b590158a2834858),
    (17, 0xbbb6a6f8f20d1f1c, 0x4ab9ef307f90ea26, 0x4b4f6c3e35a946a4),
    (24, 0x3f3b313dcbd16ec7, 0xeba69c1d26e28faa, 0x5a403701329fa40c),
    (31, 0xfbd950af27ef6941, 0x88ac46bc6afc3a8b, 0xec09a8785cc27b96),
    (32, 0x1a9d8199972cdf49, 0xd51c3db7d07ccd3f, 0x3e7d2c05882253ab),
    (33, 0xe8756ec1cb75524e, 0xf4588ffa9b9d9597, 0x78b19298d75d6ed2),
    (40, 0x08f45b937b49468c, 0xd08f0374e6366284, 0xf01aa095232dc8a9),
    (47, 0x9b525fd6f7475a40, 0x4541c64d12f4d31d, 0xb9c725312cb8f9aa),
    (48, 0xf39d81eacd9b8a63, 0x2359ba446492d7b7, 0xe97b44c58a60c1dd),
    (49, 0xc9870386e5274d91, 0x1784978030593f89, 0xfed4b457a69a8e4f),
    (63, 0x01c1f788a248076f, 0x7cdb121e35b127cc, 0x8e0a9d6648e9299d),
    (64, 0xf58504bb53decc4b, 0xb9d9a84652d898ac, 0x5ba49fd4d44c3034),
    (65, 0xc6a3282c3e793dbe, 0xd617a6eead4be51d, 0xcffaa923a4bbe043),
    (80, 0x1bf2e60e23c3eb0a, 0x5a50ec07ed7d4ca7, 0x26c9aa34507697ad),
    (95, 0xc5e0d074d83f0d5f, 0x6ba8938367b84fd6, 0x6cac4a6fde724fba),
    (96, 0x9262c6b1d31b6c87, 0xa43afceae9e5d774, 0xc04edd4f92798619),
    (97, 0xe01a595db9500cb5, 0x1432fde91eb89e39, 0x587083aee64d7769),
    (127, 0xea8be9fa05393db5, 0x7bd64ad79004b57b, 0x461db7033d32fc3e),
    (128, 0x1c484c95f0ea5dd3, 0x8a67e42ae18a99b7, 0x6ad78b4a115d1a29),
    (129, 0xce8ba3741121083e, 0x385c2887e7afb9fd, 0x1acc283ebc7803a0),
    (150, 0xc44a300e5947c6d0, 0xac0e72de24898257, 0x9e548833a475d9f6),
    (191, 0xa109fdabd652b68b, 0x617f5932b4a1a138, 0x8d62be15d5643470),
    (192, 0x6a48f302825fe8d4, 0xff43516f925c0b30, 0xb495e1c519c27483),
    (193, 0x7c2613a6ee7a0ecb, 0x724679ec107c3127, 0xf29d8b90870dcabd),
    (255, 0x02dc4ce62570736a, 0x63fef789bb306ce5, 0x53ca4b60cbbc5fd1),
    (256, 0x652f5bb2be1bbe40, 0x291e249dba8b7064, 0x7de1752d11ba0354),
    (257, 0x0f08ae56c44c8fad, 0x6d4939821f85134d, 0xb7c581435e130e2f),
    (1000, 0x9bda5937b0a3cfa1, 0x4ffa2d0dcb999dca, 0xc126226b9d7a6ad6),
    (1024, 0xb7697d3aa5511da8, 0xaf4075f27676c38d, 0x180b6021352ab229),
  ];

  #[test]
  fn farmhashna_vectors() {
    for &(len, plain, seeded, seeds) in VECTORS {
      let data = pattern(len);
      assert_eq!(FarmHash64::hash(&data), plain, "len = {len}");
      assert_eq!(FarmHash64::hash_with_seed(0x1234_5678_90ab_cdef, &data), seeded, "seed len = {len}");
      assert_eq!(
        FarmHash64::hash_with_seeds(&data, 0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
        seeds,
        "seeds len = {len}"
      );
    }
  }

  #[test]
  fn known_strings() {
    assert_eq!(FarmHash64::hash(b""), 0x9ae1_6a3b_2f90_404f);
    assert_eq!(FarmHash64::hash(b"hello world"), 0x588f_b747_8bd6_b01b);
  }

  #[test]
  fn fingerprint128_is_city128() {
    for len in [0usize, 15, 16, 17, 127, 128, 129, 300] {
      let data = pattern(len);
      assert_eq!(FarmHash128::hash(&data), CityHash128::hash(&data), "len = {len}");
    }
  }
}
