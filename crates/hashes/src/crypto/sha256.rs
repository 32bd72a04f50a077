//! SHA-256 (FIPS 180-4).
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use super::md::BlockBuffer;
use crate::util::{read_u32_be, rotr32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u32; 16];
  for (i, word) in w.iter_mut().enumerate() {
    *word = read_u32_be(block, i * 4);
  }

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for i in 0..64 {
    if i >= 16 {
      w[i & 15] = small_sigma1(w[(i + 14) & 15])
        .wrapping_add(w[(i + 9) & 15])
        .wrapping_add(small_sigma0(w[(i + 1) & 15]))
        .wrapping_add(w[i & 15]);
    }

    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(K[i])
      .wrapping_add(w[i & 15]);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *s = s.wrapping_add(v);
  }
}

/// Streaming SHA-256 hasher.
#[derive(Clone, Debug)]
pub struct Sha256 {
  state: [u32; 8],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buffer: BlockBuffer::new(),
    }
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

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

    let mut out = [0u8; 32];
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

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{string::String, vec::Vec};
  use core::fmt::Write;

  use super::*;

  fn hex32(bytes: &[u8; 32]) -> String {
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
  }

  #[test]
  fn known_vectors() {
    // NIST FIPS 180-4 test vectors (short messages).
    assert_eq!(
      hex32(&Sha256::digest(b"")),
      "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
      hex32(&Sha256::digest(b"abc")),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
      hex32(&Sha256::digest(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
      )),
      "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );

    let million_a = alloc::vec![b'a'; 1_000_000];
    assert_eq!(
      hex32(&Sha256::digest(&million_a)),
      "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
  }

  #[test]
  fn padding_boundaries() {
    const CASES: &[(usize, &str)] = &[
      (0, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
      (1, "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d"),
      (3, "ae4b3280e56e2faf83f414a6e3dabe9d5fbe18976544c05fed121accb85b53fc"),
      (55, "463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59"),
      (56, "da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562"),
      (57, "2fe741af801cc238602ac0ec6a7b0c3a8a87c7fc7d7f02a3fe03d1c12eac4d8f"),
      (63, "29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488"),
      (64, "fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108"),
      (65, "4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781"),
      (111, "60780e9451bdc43cf4530ffc95cbb0c4eb24dae2c39f55f334d679e076c08065"),
      (112, "09373f127d34e61dbbaa8bc4499c87074f2ddb10e1b465f506d7d70a15011979"),
      (113, "13aaa9b5fb739cdb0e2af99d9ac0a409390adc4d1cb9b41f1ef94f8552060e92"),
      (119, "da18797ed7c3a777f0847f429724a2d8cd5138e6ed2895c3fa1a6d39d18f7ec6"),
      (120, "f52b23db1fbb6ded89ef42a23ce0c8922c45f25c50b568a93bf1c075420bbb7c"),
      (127, "92ca0fa6651ee2f97b884b7246a562fa71250fedefe5ebf270d31c546bfea976"),
      (128, "471fb943aa23c511f6f72f8d1652d9c880cfa392ad80503120547703e56a2be5"),
      (129, "5099c6a56203f9687f7d33f4bfdf576d31dc91f6b695ecea38b2770c87631135"),
      (1000, "4e4c294b331f7a2099a379bec34b9f9fc03dc46ab465d998f4d683da53487e6d"),
    ];
    for &(len, expected) in CASES {
      assert_eq!(hex32(&Sha256::digest(&pattern(len))), expected, "len = {len}");
    }
  }

  #[test]
  fn input_forms_agree() {
    let expected = Sha256::digest(b"hello");
    assert_eq!(Sha256::digest_str("hello"), expected);
    assert_eq!(Sha256::digest_c_str(c"hello"), expected);
    // SAFETY: the literal outlives the call.
    assert_eq!(unsafe { Sha256::digest_raw(b"hello".as_ptr(), 5) }, expected);
    // SAFETY: zero length never reads.
    assert_eq!(unsafe { Sha256::digest_raw(core::ptr::null(), 0) }, Sha256::digest(b""));
    assert_eq!(Sha256::digest_vectored(&[b"he", b"", b"llo"]), expected);
  }

  #[test]
  fn verify_and_check() {
    let d = Sha256::digest(b"abc");
    assert!(Sha256::verify(b"abc", &d));
    assert!(Sha256::check(b"abc", &d).is_ok());
    assert!(!Sha256::verify(b"abd", &d));
    assert_eq!(Sha256::check(b"abd", &d), Err(traits::VerificationError::new()));
  }

  #[test]
  fn streaming_matches_oneshot() {
    let data = pattern(1000);
    let expected = Sha256::digest(&data);
    for split in [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 128, 999, 1000] {
      let mut h = Sha256::new();
      h.update(&data[..split]);
      h.update(&data[split..]);
      assert_eq!(h.finalize(), expected, "split = {split}");
    }
  }
}
