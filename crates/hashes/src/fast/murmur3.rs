//! MurmurHash3 (**NOT CRYPTO**): the `x86_32` and `x64_128` variants.
#![allow(clippy::indexing_slicing)] // Tail split at fixed offsets

use traits::FastHash;

use crate::{types::Hash128, util::read_u64_le};

#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_32;

#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_128;

const C1_32: u32 = 0xcc9e_2d51;
const C2_32: u32 = 0x1b87_3593;

const C1_64: u64 = 0x87c3_7b91_1142_53d5;
const C2_64: u64 = 0x4cf5_ad43_2745_937f;

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

#[inline(always)]
const fn fmix64(mut k: u64) -> u64 {
  k ^= k >> 33;
  k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
  k ^= k >> 33;
  k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  k ^= k >> 33;
  k
}

#[inline(always)]
const fn mix_k1_32(k1: u32) -> u32 {
  k1.wrapping_mul(C1_32).rotate_left(15).wrapping_mul(C2_32)
}

#[inline(always)]
const fn mix_k1_64(k1: u64) -> u64 {
  k1.wrapping_mul(C1_64).rotate_left(31).wrapping_mul(C2_64)
}

#[inline(always)]
const fn mix_k2_64(k2: u64) -> u64 {
  k2.wrapping_mul(C2_64).rotate_left(33).wrapping_mul(C1_64)
}

/// Little-endian load of up to 8 bytes.
#[inline(always)]
fn load_partial(bytes: &[u8]) -> u64 {
  bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
  let mut h1 = seed;

  let (blocks, tail) = data.as_chunks::<4>();
  for block in blocks {
    h1 ^= mix_k1_32(u32::from_le_bytes(*block));
    h1 = h1.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
  }

  if !tail.is_empty() {
    h1 ^= mix_k1_32(load_partial(tail) as u32);
  }

  fmix32(h1 ^ data.len() as u32)
}

fn murmur3_128(seed: u32, data: &[u8]) -> Hash128 {
  let mut h1 = seed as u64;
  let mut h2 = seed as u64;

  let (blocks, tail) = data.as_chunks::<16>();
  for block in blocks {
    let k1 = read_u64_le(block, 0);
    let k2 = read_u64_le(block, 8);

    h1 ^= mix_k1_64(k1);
    h1 = h1.rotate_left(27).wrapping_add(h2).wrapping_mul(5).wrapping_add(0x52dc_e729);

    h2 ^= mix_k2_64(k2);
    h2 = h2.rotate_left(31).wrapping_add(h1).wrapping_mul(5).wrapping_add(0x3849_5ab5);
  }

  if tail.len() > 8 {
    h2 ^= mix_k2_64(load_partial(&tail[8..]));
  }
  if !tail.is_empty() {
    h1 ^= mix_k1_64(load_partial(&tail[..tail.len().min(8)]));
  }

  let len = data.len() as u64;
  h1 ^= len;
  h2 ^= len;

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  h1 = fmix64(h1);
  h2 = fmix64(h2);

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  Hash128::new(h1, h2)
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    murmur3_32(seed, data)
  }
}

impl FastHash for Murmur3_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Hash128;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    murmur3_128(seed, data)
  }
}
