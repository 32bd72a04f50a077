//! CPU capability representation.
//!
//! [`Caps`] is a 64-bit feature bitset. Bits 0-31 hold x86_64 features and
//! bits 32-63 hold aarch64 features; only the bits of the running
//! architecture are ever set.
//!
//! ```ignore
//! use platform::caps::x86;
//!
//! if platform::caps().has(x86::AES_READY) {
//!     // AES-NI rounds are legal here
//! }
//! ```

/// CPU capabilities: a 64-bit feature bitset.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Caps(u64);

impl Caps {
  /// No features.
  pub const NONE: Self = Self(0);

  /// Create a capability set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Raw bit pattern.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    self.0 & required.0 == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Names of every feature present, in bit order.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    FEATURE_NAMES
      .iter()
      .filter(move |(caps, _)| self.has(*caps))
      .map(|&(_, name)| name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_set().entries(self.names()).finish()
  }
}

/// Target architecture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  Aarch64,
  #[default]
  Other,
}

impl Arch {
  /// Architecture of the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    #[cfg(target_arch = "x86_64")]
    {
      Self::X86_64
    }
    #[cfg(target_arch = "aarch64")]
    {
      Self::Aarch64
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
      Self::Other
    }
  }

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::Aarch64 => "aarch64",
      Self::Other => "other",
    }
  }
}

impl core::fmt::Display for Arch {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

/// x86_64 features (bits 0-31).
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const SSSE3: Caps = Caps::bit(1);
  pub const SSE41: Caps = Caps::bit(2);
  pub const AESNI: Caps = Caps::bit(3);
  pub const PCLMULQDQ: Caps = Caps::bit(4);

  /// Everything the AES-round hashes need.
  pub const AES_READY: Caps = Caps(SSE2.0 | AESNI.0);
}

/// aarch64 features (bits 32-63).
pub mod aarch64 {
  use super::Caps;

  pub const NEON: Caps = Caps::bit(32);
  pub const AES: Caps = Caps::bit(33);
  pub const PMULL: Caps = Caps::bit(34);
}

const FEATURE_NAMES: [(Caps, &str); 8] = [
  (x86::SSE2, "sse2"),
  (x86::SSSE3, "ssse3"),
  (x86::SSE41, "sse4.1"),
  (x86::AESNI, "aes"),
  (x86::PCLMULQDQ, "pclmulqdq"),
  (aarch64::NEON, "neon"),
  (aarch64::AES, "aes"),
  (aarch64::PMULL, "pmull"),
];

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, vec::Vec};

  use super::*;

  #[test]
  fn has_requires_every_bit() {
    let c = x86::SSE2 | x86::AESNI;
    assert!(c.has(x86::AES_READY));
    assert!(c.has(x86::SSE2));
    assert!(!x86::SSE2.has(x86::AES_READY));
    assert!(c.has(Caps::NONE));
  }

  #[test]
  fn names_follow_bit_order() {
    let c = x86::AESNI | x86::SSE2;
    assert_eq!(c.names().collect::<Vec<_>>(), ["sse2", "aes"]);
    assert_eq!(format!("{c:?}"), r#"{"sse2", "aes"}"#);
  }

  #[test]
  fn architecture_bits_are_disjoint() {
    let x = x86::SSE2 | x86::SSSE3 | x86::SSE41 | x86::AESNI | x86::PCLMULQDQ;
    let a = aarch64::NEON | aarch64::AES | aarch64::PMULL;
    assert_eq!(x.bits() & a.bits(), 0);
    assert_eq!(x.bits() >> 32, 0);
    assert_eq!(a.bits() & 0xFFFF_FFFF, 0);
  }

  #[test]
  fn arch_display() {
    assert_eq!(format!("{}", Arch::X86_64), "x86_64");
    assert_eq!(Arch::default(), Arch::Other);
  }
}
