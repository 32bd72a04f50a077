//! SipHash (**NOT CRYPTO**).
//!
//! SipHash is a *keyed* hash designed to defend hash tables against collision
//! attacks on untrusted inputs. It is not a cryptographic MAC.
//!
//! The round counts are const parameters of a single implementation:
//! [`SipHash13`] (fast), [`SipHash24`] (standard) and [`SipHash48`] (strong).

use core::{fmt, hash::Hasher, marker::PhantomData};

use traits::FastHash;

use crate::types::SipHashKey;

/// SipHash-c-d over a [`SipHashKey`], producing a `u64`.
pub struct SipHash<const C: usize, const D: usize>;

pub type SipHash13 = SipHash<1, 3>;
pub type SipHash24 = SipHash<2, 4>;
pub type SipHash48 = SipHash<4, 8>;

impl<const C: usize, const D: usize> Clone for SipHash<C, D> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const C: usize, const D: usize> Copy for SipHash<C, D> {}

impl<const C: usize, const D: usize> Default for SipHash<C, D> {
  #[inline]
  fn default() -> Self {
    Self
  }
}

impl<const C: usize, const D: usize> fmt::Debug for SipHash<C, D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SipHash{C}{D}")
  }
}

const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

#[derive(Clone, Copy)]
struct State {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
}

impl State {
  #[inline(always)]
  const fn new(key: SipHashKey) -> Self {
    Self {
      v0: C0 ^ key.k0,
      v1: C1 ^ key.k1,
      v2: C2 ^ key.k0,
      v3: C3 ^ key.k1,
    }
  }

  #[inline(always)]
  fn sip_round(&mut self) {
    self.v0 = self.v0.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(13);
    self.v1 ^= self.v0;
    self.v0 = self.v0.rotate_left(32);

    self.v2 = self.v2.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(16);
    self.v3 ^= self.v2;

    self.v0 = self.v0.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(21);
    self.v3 ^= self.v0;

    self.v2 = self.v2.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(17);
    self.v1 ^= self.v2;
    self.v2 = self.v2.rotate_left(32);
  }

  #[inline(always)]
  fn compress<const C: usize>(&mut self, m: u64) {
    self.v3 ^= m;
    for _ in 0..C {
      self.sip_round();
    }
    self.v0 ^= m;
  }

  /// Absorb the length-tagged last word and run the `D` finalization rounds.
  #[inline(always)]
  fn finish<const C: usize, const D: usize>(mut self, last: u64) -> u64 {
    self.compress::<C>(last);
    self.v2 ^= 0xff;
    for _ in 0..D {
      self.sip_round();
    }
    self.v0 ^ self.v1 ^ self.v2 ^ self.v3
  }
}

/// Little-endian load of up to 7 trailing bytes.
#[inline(always)]
fn load_tail(tail: &[u8]) -> u64 {
  tail.iter().rev().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Last word: the tail bytes with `len mod 256` in the top byte.
#[inline(always)]
fn last_word(tail: u64, len: usize) -> u64 {
  ((len as u64) << 56) | tail
}

#[inline]
fn siphash<const C: usize, const D: usize>(key: SipHashKey, data: &[u8]) -> u64 {
  let mut state = State::new(key);
  let (blocks, tail) = data.as_chunks::<8>();
  for block in blocks {
    state.compress::<C>(u64::from_le_bytes(*block));
  }
  state.finish::<C, D>(last_word(load_tail(tail), data.len()))
}

impl<const C: usize, const D: usize> FastHash for SipHash<C, D> {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = SipHashKey;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    siphash::<C, D>(seed, data)
  }
}

/// Streaming SipHash usable anywhere a [`core::hash::Hasher`] is expected.
///
/// Up to 7 bytes are buffered between writes; `finish` does not consume the
/// hasher.
///
/// The hasher keeps its key (readable through [`key`](Self::key)) so that
/// [`reset`](Self::reset) restarts under the same key.
pub struct SipHasher<const C: usize, const D: usize> {
  key: SipHashKey,
  state: State,
  tail: u64,
  ntail: usize,
  length: usize,
  _rounds: PhantomData<SipHash<C, D>>,
}

pub type SipHasher13 = SipHasher<1, 3>;
pub type SipHasher24 = SipHasher<2, 4>;
pub type SipHasher48 = SipHasher<4, 8>;

impl<const C: usize, const D: usize> SipHasher<C, D> {
  #[must_use]
  #[inline]
  pub const fn new_with_key(key: SipHashKey) -> Self {
    Self {
      key,
      state: State::new(key),
      tail: 0,
      ntail: 0,
      length: 0,
      _rounds: PhantomData,
    }
  }

  #[must_use]
  #[inline]
  pub const fn key(&self) -> SipHashKey {
    self.key
  }

  /// Return to the freshly keyed state.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::new_with_key(self.key);
  }
}

impl<const C: usize, const D: usize> Clone for SipHasher<C, D> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      key: self.key,
      state: self.state,
      tail: self.tail,
      ntail: self.ntail,
      length: self.length,
      _rounds: PhantomData,
    }
  }
}

impl<const C: usize, const D: usize> Default for SipHasher<C, D> {
  #[inline]
  fn default() -> Self {
    Self::new_with_key(SipHashKey::default())
  }
}

impl<const C: usize, const D: usize> fmt::Debug for SipHasher<C, D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SipHasher")
      .field("rounds", &(C, D))
      .field("length", &self.length)
      .finish_non_exhaustive()
  }
}

impl<const C: usize, const D: usize> Hasher for SipHasher<C, D> {
  fn write(&mut self, mut bytes: &[u8]) {
    self.length = self.length.wrapping_add(bytes.len());

    if self.ntail != 0 {
      let fill = (8 - self.ntail).min(bytes.len());
      let (head, rest) = bytes.split_at(fill);
      self.tail |= load_tail(head) << (8 * self.ntail);
      self.ntail += fill;
      bytes = rest;
      if self.ntail < 8 {
        return;
      }
      self.state.compress::<C>(self.tail);
      self.tail = 0;
      self.ntail = 0;
    }

    let (blocks, tail) = bytes.as_chunks::<8>();
    for block in blocks {
      self.state.compress::<C>(u64::from_le_bytes(*block));
    }
    self.tail = load_tail(tail);
    self.ntail = tail.len();
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.state.finish::<C, D>(last_word(self.tail, self.length))
  }
}

/// [`core::hash::BuildHasher`] producing [`SipHasher`]s under one fixed key.
pub struct SipBuildHasher<const C: usize, const D: usize> {
  key: SipHashKey,
}

impl<const C: usize, const D: usize> SipBuildHasher<C, D> {
  #[must_use]
  #[inline]
  pub const fn new(key: SipHashKey) -> Self {
    Self { key }
  }

  /// A builder keyed from the standard library's per-process random state.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn random() -> Self {
    use core::hash::BuildHasher;
    use std::hash::RandomState;

    let k0 = RandomState::new().hash_one(C0);
    let k1 = RandomState::new().hash_one(C1);
    Self::new(SipHashKey::new(k0, k1))
  }
}

impl<const C: usize, const D: usize> Clone for SipBuildHasher<C, D> {
  #[inline]
  fn clone(&self) -> Self {
    Self { key: self.key }
  }
}

impl<const C: usize, const D: usize> Default for SipBuildHasher<C, D> {
  #[inline]
  fn default() -> Self {
    Self::new(SipHashKey::default())
  }
}

impl<const C: usize, const D: usize> fmt::Debug for SipBuildHasher<C, D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SipBuildHasher").field("rounds", &(C, D)).finish_non_exhaustive()
  }
}

impl<const C: usize, const D: usize> core::hash::BuildHasher for SipBuildHasher<C, D> {
  type Hasher = SipHasher<C, D>;

  #[inline]
  fn build_hasher(&self) -> Self::Hasher {
    SipHasher::new_with_key(self.key)
  }
}
