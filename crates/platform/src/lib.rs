//! CPU feature detection for hashkit.
//!
//! Algorithms with hardware-accelerated paths (MeowHash needs AES-NI) query
//! [`caps()`] instead of running ad-hoc detection.
//!
//! ```ignore
//! use platform::caps::x86;
//!
//! if platform::caps().has(x86::AES_READY) {
//!     // AES path
//! }
//! ```
//!
//! - Compile-time features are detected via `cfg!`, with no runtime cost.
//! - With `std`, runtime detection results are cached in a `OnceLock`.
//!   Without `std`, only compile-time features are reported.
//! - Under Miri, detection always reports portable-only caps.
//! - With the `tracing` feature, the first detection emits a `debug!` event.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::{Arch, Caps};
pub use detect::detect_uncached;

/// Detected CPU capabilities of the running machine.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Caps> = OnceLock::new();
    *CACHED.get_or_init(detect_uncached)
  }

  #[cfg(not(feature = "std"))]
  {
    detect_uncached()
  }
}

/// Summary of the detected platform, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  /// Compilation target architecture.
  pub arch: Arch,
  /// Detected capabilities.
  pub caps: Caps,
  /// `true` when AES round instructions are usable.
  pub aes: bool,
  /// `true` when runtime detection was available (the `std` feature).
  pub runtime_detection: bool,
}

impl core::fmt::Display for Description {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} caps={:?} aes={}", self.arch, self.caps, self.aes)?;
    if !self.runtime_detection {
      f.write_str(" (compile-time only)")?;
    }
    Ok(())
  }
}

/// Describe the running platform.
#[must_use]
pub fn describe() -> Description {
  let detected = caps();
  Description {
    arch: Arch::current(),
    caps: detected,
    aes: detected.has(caps::x86::AES_READY) || detected.has(caps::aarch64::AES),
    runtime_detection: cfg!(all(feature = "std", not(miri))),
  }
}
