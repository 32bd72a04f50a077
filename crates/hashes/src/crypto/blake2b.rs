//! BLAKE2b (RFC 7693).
//!
//! Keyed and unkeyed hashing with any output length from 1 to 64 bytes. The
//! key length and output length are folded into the initial state, so a
//! 32-byte digest is not a prefix of the 64-byte digest of the same input.
//!
//! [`Blake2b`] takes its parameters at runtime; [`Blake2b256`] and
//! [`Blake2b512`] fix the output length and implement [`Digest`].
#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use core::{ffi::CStr, fmt};

use traits::{
  Digest,
  bytes::{self, ct_eq},
};

use crate::{Error, types::Blake2bDigest, util::rotr64};

const BLOCK_LEN: usize = 128;

const IV: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

/// Message word permutation per round; rounds 10 and 11 reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

const ROUNDS: usize = 12;

const KEY_LEN_MAX: usize = 64;

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = rotr64(v[d] ^ v[a], 32);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 24);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = rotr64(v[d] ^ v[a], 16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 63);
}

/// Compress one block. `t` is the byte count including this block.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: u128, is_last: bool) {
  let (words, _) = block.as_chunks::<8>();
  let mut m = [0u64; 16];
  for (dst, src) in m.iter_mut().zip(words) {
    *dst = u64::from_le_bytes(*src);
  }

  let mut v = [0u64; 16];
  v[..8].copy_from_slice(h);
  v[8..].copy_from_slice(&IV);
  v[12] ^= t as u64;
  v[13] ^= (t >> 64) as u64;
  if is_last {
    v[14] = !v[14];
  }

  for r in 0..ROUNDS {
    let s = &SIGMA[r % 10];
    // Columns, then diagonals.
    g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
    g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
  }

  for i in 0..8 {
    h[i] ^= v[i] ^ v[i + 8];
  }
}

/// Streaming BLAKE2b with runtime output length and optional key.
///
/// A keyed hasher holds a private copy of the key until it is dropped so
/// that [`reset`](Self::reset) can re-absorb it. The one-shot functions drop
/// that copy before returning.
///
/// ```
/// use hashes::crypto::Blake2b;
///
/// let mut h = Blake2b::new_with_params(20, b"secret key")?;
/// h.update(b"hello ");
/// h.update(b"world");
/// let digest = h.finalize();
/// assert_eq!(digest.len(), 20);
/// assert_eq!(digest, Blake2b::hash(b"hello world", 20, b"secret key")?);
/// # Ok::<(), hashes::Error>(())
/// ```
#[derive(Clone)]
pub struct Blake2b {
  h: [u64; 8],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  bytes_hashed: u128,
  out_len: u8,
  key: [u8; KEY_LEN_MAX],
  key_len: u8,
}

impl Blake2b {
  /// Largest output length, in bytes.
  pub const MAX_OUT_LEN: usize = Blake2bDigest::MAX_LEN;
  /// Largest key length, in bytes.
  pub const MAX_KEY_LEN: usize = KEY_LEN_MAX;

  /// Create a hasher producing `out_len` bytes, keyed with `key` (may be empty).
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidOutputLength`] unless `1 <= out_len <= 64`.
  /// - [`Error::KeyTooLong`] if `key` is longer than 64 bytes.
  pub fn new_with_params(out_len: usize, key: &[u8]) -> Result<Self, Error> {
    if out_len == 0 || out_len > Self::MAX_OUT_LEN {
      return Err(Error::InvalidOutputLength {
        requested: out_len,
        max: Self::MAX_OUT_LEN,
      });
    }
    if key.len() > Self::MAX_KEY_LEN {
      return Err(Error::KeyTooLong {
        len: key.len(),
        max: Self::MAX_KEY_LEN,
      });
    }
    Ok(Self::init(out_len, key))
  }

  /// Unkeyed hasher producing `out_len` bytes.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidOutputLength`] unless `1 <= out_len <= 64`.
  #[inline]
  pub fn new(out_len: usize) -> Result<Self, Error> {
    Self::new_with_params(out_len, &[])
  }

  /// Callers guarantee `1 <= out_len <= 64` and `key.len() <= 64`.
  fn init(out_len: usize, key: &[u8]) -> Self {
    let mut h = IV;
    // Parameter block word 0: digest length, key length, fanout = 1, depth = 1.
    h[0] ^= 0x0101_0000 | ((key.len() as u64) << 8) | out_len as u64;

    let mut stored = [0u8; Self::MAX_KEY_LEN];
    stored[..key.len()].copy_from_slice(key);

    let mut state = Self {
      h,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
      out_len: out_len as u8,
      key: stored,
      key_len: key.len() as u8,
    };

    // A key occupies one full zero-padded block ahead of the message. It stays
    // buffered so that an empty message finalizes on the key block alone.
    if !key.is_empty() {
      state.buf[..key.len()].copy_from_slice(key);
      state.buf_len = BLOCK_LEN;
    }
    state
  }

  /// Output length in bytes.
  #[inline]
  #[must_use]
  pub const fn out_len(&self) -> usize {
    self.out_len as usize
  }

  pub fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // A full buffer is only compressed once more input proves it is not
      // the last block.
      if self.buf_len == BLOCK_LEN && !data.is_empty() {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, &self.buf, self.bytes_hashed, false);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    let (to_compress, held) = match (blocks.split_last(), rest.is_empty()) {
      (Some((last, init)), true) => (init, Some(last)),
      _ => (blocks, None),
    };
    for block in to_compress {
      self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
      compress(&mut self.h, block, self.bytes_hashed, false);
    }

    if let Some(last) = held {
      self.buf = *last;
      self.buf_len = BLOCK_LEN;
    } else if !rest.is_empty() {
      self.buf[..rest.len()].copy_from_slice(rest);
      self.buf_len = rest.len();
    }
  }

  /// Finalize without consuming the hasher.
  #[must_use]
  pub fn finalize(&self) -> Blake2bDigest {
    let mut h = self.h;
    let mut buf = self.buf;
    buf[self.buf_len..].fill(0);
    let t = self.bytes_hashed.wrapping_add(self.buf_len as u128);
    compress(&mut h, &buf, t, true);

    let mut out = [0u8; Blake2bDigest::MAX_LEN];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    Blake2bDigest::from_state_bytes(out, self.out_len())
  }

  /// Restart with the same key and output length.
  pub fn reset(&mut self) {
    let key_len = self.key_len as usize;
    let key = self.key;
    *self = Self::init(self.out_len(), &key[..key_len]);
  }

  /// One-shot keyed hash; pass an empty `key` for unkeyed hashing.
  ///
  /// # Errors
  ///
  /// Same as [`Blake2b::new_with_params`].
  pub fn hash(data: &[u8], out_len: usize, key: &[u8]) -> Result<Blake2bDigest, Error> {
    let mut h = Self::new_with_params(out_len, key)?;
    h.update(data);
    Ok(h.finalize())
  }

  /// [`hash`](Self::hash) over the UTF-8 bytes of `s`.
  ///
  /// # Errors
  ///
  /// Same as [`Blake2b::new_with_params`].
  #[inline]
  pub fn hash_str(s: &str, out_len: usize, key: &[u8]) -> Result<Blake2bDigest, Error> {
    Self::hash(s.as_bytes(), out_len, key)
  }

  /// [`hash`](Self::hash) over the bytes of `s` before its NUL.
  ///
  /// # Errors
  ///
  /// Same as [`Blake2b::new_with_params`].
  #[inline]
  pub fn hash_c_str(s: &CStr, out_len: usize, key: &[u8]) -> Result<Blake2bDigest, Error> {
    Self::hash(s.to_bytes(), out_len, key)
  }

  /// [`hash`](Self::hash) over `len` bytes starting at `ptr`.
  ///
  /// # Safety
  ///
  /// When `len > 0`, `ptr` must be valid for reads of `len` bytes.
  ///
  /// # Panics
  ///
  /// Panics if `ptr` is null and `len > 0`.
  ///
  /// # Errors
  ///
  /// Same as [`Blake2b::new_with_params`].
  #[inline]
  pub unsafe fn hash_raw(ptr: *const u8, len: usize, out_len: usize, key: &[u8]) -> Result<Blake2bDigest, Error> {
    // SAFETY: forwarded to the caller.
    Self::hash(unsafe { bytes::from_raw(ptr, len) }, out_len, key)
  }

  /// `true` when `data` hashes to `expected` under `key`, at `expected.len()` bytes.
  #[must_use]
  pub fn verify(data: &[u8], key: &[u8], expected: &Blake2bDigest) -> bool {
    match Self::hash(data, expected.len(), key) {
      Ok(actual) => ct_eq(actual.as_bytes(), expected.as_bytes()),
      Err(_) => false,
    }
  }
}

impl fmt::Debug for Blake2b {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2b")
      .field("out_len", &self.out_len)
      .field("keyed", &(self.key_len != 0))
      .finish_non_exhaustive()
  }
}

macro_rules! fixed_blake2b {
  ($(#[$meta:meta])* $name:ident, $len:literal) => {
    $(#[$meta])*
    #[derive(Clone, Debug)]
    pub struct $name(Blake2b);

    impl $name {
      /// Keyed variant.
      ///
      /// # Errors
      ///
      /// [`Error::KeyTooLong`] if `key` is longer than 64 bytes.
      pub fn new_keyed(key: &[u8]) -> Result<Self, Error> {
        Blake2b::new_with_params($len, key).map(Self)
      }

      /// One-shot keyed digest.
      ///
      /// # Errors
      ///
      /// [`Error::KeyTooLong`] if `key` is longer than 64 bytes.
      pub fn keyed_digest(key: &[u8], data: &[u8]) -> Result<[u8; $len], Error> {
        let mut h = Self::new_keyed(key)?;
        h.update(data);
        Ok(h.finalize())
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self(Blake2b::init($len, &[]))
      }
    }

    impl Digest for $name {
      const OUTPUT_SIZE: usize = $len;
      type Output = [u8; $len];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.0.update(data);
      }

      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $len];
        out.copy_from_slice(self.0.finalize().as_bytes());
        out
      }

      #[inline]
      fn reset(&mut self) {
        self.0.reset();
      }
    }
  };
}

fixed_blake2b!(
  /// BLAKE2b with a 32-byte digest.
  Blake2b256,
  32
);
fixed_blake2b!(
  /// BLAKE2b with a 64-byte digest.
  Blake2b512,
  64
);
