//! Value types shared across algorithms.

use core::fmt;

use crate::Error;

/// A 128-bit hash result as two 64-bit words.
///
/// Produced by CityHash128, FarmHash128, Murmur3-128, SpookyHash128, and
/// MeowHash. Conversion to `u128` puts `high` in the upper 64 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash128 {
  pub low: u64,
  pub high: u64,
}

impl Hash128 {
  #[inline]
  #[must_use]
  pub const fn new(low: u64, high: u64) -> Self {
    Self { low, high }
  }

  #[inline]
  #[must_use]
  pub const fn as_u128(self) -> u128 {
    ((self.high as u128) << 64) | self.low as u128
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(v: u128) -> Self {
    Self {
      low: v as u64,
      high: (v >> 64) as u64,
    }
  }
}

impl From<u128> for Hash128 {
  #[inline]
  fn from(v: u128) -> Self {
    Self::from_u128(v)
  }
}

impl From<Hash128> for u128 {
  #[inline]
  fn from(h: Hash128) -> Self {
    h.as_u128()
  }
}

impl From<(u64, u64)> for Hash128 {
  #[inline]
  fn from((low, high): (u64, u64)) -> Self {
    Self { low, high }
  }
}

impl fmt::LowerHex for Hash128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}{:016x}", self.high, self.low)
  }
}

/// 128-bit SipHash key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SipHashKey {
  pub k0: u64,
  pub k1: u64,
}

impl SipHashKey {
  #[inline]
  #[must_use]
  pub const fn new(k0: u64, k1: u64) -> Self {
    Self { k0, k1 }
  }

  /// Key from 16 bytes, both words little-endian (the reference layout).
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: &[u8; 16]) -> Self {
    let (lo, hi) = bytes.split_at(8);
    let mut k0 = [0u8; 8];
    let mut k1 = [0u8; 8];
    k0.copy_from_slice(lo);
    k1.copy_from_slice(hi);
    Self {
      k0: u64::from_le_bytes(k0),
      k1: u64::from_le_bytes(k1),
    }
  }

  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 16] {
    let mut out = [0u8; 16];
    let (lo, hi) = out.split_at_mut(8);
    lo.copy_from_slice(&self.k0.to_le_bytes());
    hi.copy_from_slice(&self.k1.to_le_bytes());
    out
  }
}

impl From<[u64; 2]> for SipHashKey {
  #[inline]
  fn from([k0, k1]: [u64; 2]) -> Self {
    Self { k0, k1 }
  }
}

const BLAKE2B_MAX_LEN: usize = 64;

/// Variable-length BLAKE2b digest (1 to 64 bytes).
///
/// The output length is bound into the BLAKE2b initial state, so two digests
/// are equal only if their lengths match and then their significant bytes
/// match. Bytes past `len` are always zero and never compared.
#[derive(Clone, Copy)]
pub struct Blake2bDigest {
  bytes: [u8; BLAKE2B_MAX_LEN],
  len: u8,
}

impl Blake2bDigest {
  /// Largest BLAKE2b output, in bytes.
  pub const MAX_LEN: usize = BLAKE2B_MAX_LEN;

  /// Build from a full state serialization, keeping the first `len` bytes.
  #[inline]
  pub(crate) fn from_state_bytes(mut bytes: [u8; BLAKE2B_MAX_LEN], len: usize) -> Self {
    let len = len.clamp(1, Self::MAX_LEN);
    if let Some(tail) = bytes.get_mut(len..) {
      tail.fill(0);
    }
    Self { bytes, len: len as u8 }
  }

  /// Wrap an existing digest, e.g. one read back from storage.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidOutputLength`] unless `1 <= bytes.len() <= 64`.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
    if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
      return Err(Error::InvalidOutputLength {
        requested: bytes.len(),
        max: Self::MAX_LEN,
      });
    }
    let mut buf = [0u8; Self::MAX_LEN];
    if let Some(dst) = buf.get_mut(..bytes.len()) {
      dst.copy_from_slice(bytes);
    }
    Ok(Self {
      bytes: buf,
      len: bytes.len() as u8,
    })
  }

  /// Number of significant bytes.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)] // Never empty: 1 <= len <= 64.
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// The significant bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len()).unwrap_or(&self.bytes)
  }
}

impl AsRef<[u8]> for Blake2bDigest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq for Blake2bDigest {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.as_bytes() == other.as_bytes()
  }
}

impl Eq for Blake2bDigest {}

impl core::hash::Hash for Blake2bDigest {
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    state.write_u8(self.len);
    state.write(self.as_bytes());
  }
}

impl fmt::Debug for Blake2bDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Blake2bDigest({}:", self.len)?;
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    f.write_str(")")
  }
}
