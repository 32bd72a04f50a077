//! SHA-384 and SHA-512 (FIPS 180-4).
//!
//! Both run the same 80-round compression over 128-byte blocks with a 128-bit
//! big-endian length suffix; they differ only in initial state and in how
//! many output bytes are kept.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use super::md::BlockBuffer;
use crate::util::{read_u64_be, rotr64};

const BLOCK_LEN: usize = 128;

const SHA384_H0: [u64; 8] = [
  0xcbbb9d5dc1059ed8,
  0x629a292a367cd507,
  0x9159015a3070dd17,
  0x152fecd8f70e5939,
  0x67332667ffc00b31,
  0x8eb44a8768581511,
  0xdb0c2e0d64f98fa7,
  0x47b5481dbefa4fa4,
];

const SHA512_H0: [u64; 8] = [
  0x6a09e667f3bcc908,
  0xbb67ae8584caa73b,
  0x3c6ef372fe94f82b,
  0xa54ff53a5f1d36f1,
  0x510e527fade682d1,
  0x9b05688c2b3e6c1f,
  0x1f83d9abfb41bd6b,
  0x5be0cd19137e2179,
];

const K: [u64; 80] = [
  0x428a_2f98_d728_ae22, 0x7137_4491_23ef_65cd, 0xb5c0_fbcf_ec4d_3b2f, 0xe9b5_dba5_8189_dbbc,
  0x3956_c25b_f348_b538, 0x59f1_11f1_b605_d019, 0x923f_82a4_af19_4f9b, 0xab1c_5ed5_da6d_8118,
  0xd807_aa98_a303_0242, 0x1283_5b01_4570_6fbe, 0x2431_85be_4ee4_b28c, 0x550c_7dc3_d5ff_b4e2,
  0x72be_5d74_f27b_896f, 0x80de_b1fe_3b16_96b1, 0x9bdc_06a7_25c7_1235, 0xc19b_f174_cf69_2694,
  0xe49b_69c1_9ef1_4ad2, 0xefbe_4786_384f_25e3, 0x0fc1_9dc6_8b8c_d5b5, 0x240c_a1cc_77ac_9c65,
  0x2de9_2c6f_592b_0275, 0x4a74_84aa_6ea6_e483, 0x5cb0_a9dc_bd41_fbd4, 0x76f9_88da_8311_53b5,
  0x983e_5152_ee66_dfab, 0xa831_c66d_2db4_3210, 0xb003_27c8_98fb_213f, 0xbf59_7fc7_beef_0ee4,
  0xc6e0_0bf3_3da8_8fc2, 0xd5a7_9147_930a_a725, 0x06ca_6351_e003_826f, 0x1429_2967_0a0e_6e70,
  0x27b7_0a85_46d2_2ffc, 0x2e1b_2138_5c26_c926, 0x4d2c_6dfc_5ac4_2aed, 0x5338_0d13_9d95_b3df,
  0x650a_7354_8baf_63de, 0x766a_0abb_3c77_b2a8, 0x81c2_c92e_47ed_aee6, 0x9272_2c85_1482_353b,
  0xa2bf_e8a1_4cf1_0364, 0xa81a_664b_bc42_3001, 0xc24b_8b70_d0f8_9791, 0xc76c_51a3_0654_be30,
  0xd192_e819_d6ef_5218, 0xd699_0624_5565_a910, 0xf40e_3585_5771_202a, 0x106a_a070_32bb_d1b8,
  0x19a4_c116_b8d2_d0c8, 0x1e37_6c08_5141_ab53, 0x2748_774c_df8e_eb99, 0x34b0_bcb5_e19b_48a8,
  0x391c_0cb3_c5c9_5a63, 0x4ed8_aa4a_e341_8acb, 0x5b9c_ca4f_7763_e373, 0x682e_6ff3_d6b2_b8a3,
  0x748f_82ee_5def_b2fc, 0x78a5_636f_4317_2f60, 0x84c8_7814_a1f0_ab72, 0x8cc7_0208_1a64_39ec,
  0x90be_fffa_2363_1e28, 0xa450_6ceb_de82_bde9, 0xbef9_a3f7_b2c6_7915, 0xc671_78f2_e372_532b,
  0xca27_3ece_ea26_619c, 0xd186_b8c7_21c0_c207, 0xeada_7dd6_cde0_eb1e, 0xf57d_4f7f_ee6e_d178,
  0x06f0_67aa_7217_6fba, 0x0a63_7dc5_a2c8_98a6, 0x113f_9804_bef9_0dae, 0x1b71_0b35_131c_471b,
  0x28db_77f5_2304_7d84, 0x32ca_ab7b_40c7_2493, 0x3c9e_be0a_15c9_bebc, 0x431d_67c4_9c10_0d4c,
  0x4cc5_d4be_cb3e_42b6, 0x597f_299c_fc65_7e2a, 0x5fcb_6fab_3ad6_faec, 0x6c44_198c_4a47_5817,
];

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u64; 16];
  for (i, word) in w.iter_mut().enumerate() {
    *word = read_u64_be(block, i * 8);
  }

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  macro_rules! round {
    ($i:expr) => {{
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add((e & f) ^ (!e & g))
        .wrapping_add(K[$i])
        .wrapping_add(w[$i & 15]);
      let t2 = big_sigma0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));
      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }};
  }

  for i in 0..16 {
    round!(i);
  }
  for i in 16..80 {
    w[i & 15] = small_sigma1(w[(i + 14) & 15])
      .wrapping_add(w[(i + 9) & 15])
      .wrapping_add(small_sigma0(w[(i + 1) & 15]))
      .wrapping_add(w[i & 15]);
    round!(i);
  }

  for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *s = s.wrapping_add(v);
  }
}

/// Shared 64-bit-word core: state plus 128-byte block buffer.
#[derive(Clone, Debug)]
struct Core {
  state: [u64; 8],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Core {
  #[inline]
  const fn new(h0: [u64; 8]) -> Self {
    Self {
      state: h0,
      buffer: BlockBuffer::new(),
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.buffer.update(data, |block| compress(&mut self.state, block));
  }

  /// Full 64-byte serialization of the padded final state.
  fn finalize(&self) -> [u8; 64] {
    let mut state = self.state;
    let bit_len = self.buffer.bit_len();
    self.buffer.pad(&bit_len.to_be_bytes(), |block| compress(&mut state, block));

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

/// Streaming SHA-384 hasher.
#[derive(Clone, Debug)]
pub struct Sha384(Core);

impl Default for Sha384 {
  #[inline]
  fn default() -> Self {
    Self(Core::new(SHA384_H0))
  }
}

impl Digest for Sha384 {
  const OUTPUT_SIZE: usize = 48;
  type Output = [u8; 48];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let full = self.0.finalize();
    let mut out = [0u8; 48];
    out.copy_from_slice(&full[..48]);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

/// Streaming SHA-512 hasher.
#[derive(Clone, Debug)]
pub struct Sha512(Core);

impl Default for Sha512 {
  #[inline]
  fn default() -> Self {
    Self(Core::new(SHA512_H0))
  }
}

impl Digest for Sha512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.0.finalize()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
