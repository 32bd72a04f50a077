//! Capability detection.
//!
//! Compile-time features (`cfg!(target_feature = ...)`) are always included.
//! With `std`, runtime detection adds whatever the running CPU reports.

use crate::caps::Caps;

/// Detect capabilities without caching.
#[must_use]
pub fn detect_uncached() -> Caps {
  // Miri cannot interpret SIMD intrinsics, so always report portable.
  if cfg!(miri) {
    return Caps::NONE;
  }

  let caps = compile_time().union(runtime());

  #[cfg(feature = "tracing")]
  tracing::debug!(arch = crate::Arch::current().name(), caps = ?caps, "detected CPU capabilities");

  caps
}

/// `caps` when `enabled`, otherwise nothing.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
const fn when(enabled: bool, caps: Caps) -> Caps {
  if enabled { caps } else { Caps::NONE }
}

#[cfg(target_arch = "x86_64")]
const fn compile_time() -> Caps {
  use crate::caps::x86;

  // SSE2 is baseline on x86_64.
  x86::SSE2
    .union(when(cfg!(target_feature = "ssse3"), x86::SSSE3))
    .union(when(cfg!(target_feature = "sse4.1"), x86::SSE41))
    .union(when(cfg!(target_feature = "aes"), x86::AESNI))
    .union(when(cfg!(target_feature = "pclmulqdq"), x86::PCLMULQDQ))
}

#[cfg(target_arch = "aarch64")]
const fn compile_time() -> Caps {
  use crate::caps::aarch64;

  aarch64::NEON.union(when(cfg!(target_feature = "aes"), aarch64::AES.union(aarch64::PMULL)))
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const fn compile_time() -> Caps {
  Caps::NONE
}

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn runtime() -> Caps {
  use crate::caps::x86;

  let mut caps = Caps::NONE;
  if std::arch::is_x86_feature_detected!("ssse3") {
    caps |= x86::SSSE3;
  }
  if std::arch::is_x86_feature_detected!("sse4.1") {
    caps |= x86::SSE41;
  }
  if std::arch::is_x86_feature_detected!("aes") {
    caps |= x86::AESNI;
  }
  if std::arch::is_x86_feature_detected!("pclmulqdq") {
    caps |= x86::PCLMULQDQ;
  }
  caps
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn runtime() -> Caps {
  use crate::caps::aarch64;

  let mut caps = Caps::NONE;
  if std::arch::is_aarch64_feature_detected!("aes") {
    caps |= aarch64::AES;
  }
  if std::arch::is_aarch64_feature_detected!("pmull") {
    caps |= aarch64::PMULL;
  }
  caps
}

#[cfg(not(all(feature = "std", any(target_arch = "x86_64", target_arch = "aarch64"))))]
fn runtime() -> Caps {
  Caps::NONE
}
