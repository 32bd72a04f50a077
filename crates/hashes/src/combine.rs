//! Folding already-computed hash values into one.
//!
//! `combine(seed, v) = seed ^ (v + GOLDEN + (seed << 6) + (seed >> 2))`, all
//! additions wrapping. The fold is order-sensitive. It mixes hash values only;
//! it never reads byte buffers.

/// 32-bit golden-ratio constant.
pub const GOLDEN32: u32 = 0x9e37_79b9;
/// 64-bit golden-ratio constant.
pub const GOLDEN64: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
#[must_use]
pub const fn combine32(seed: u32, value: u32) -> u32 {
  seed ^ value.wrapping_add(GOLDEN32).wrapping_add(seed << 6).wrapping_add(seed >> 2)
}

#[inline]
#[must_use]
pub const fn combine64(seed: u64, value: u64) -> u64 {
  seed ^ value.wrapping_add(GOLDEN64).wrapping_add(seed << 6).wrapping_add(seed >> 2)
}

/// Fold `values` left to right into `seed`.
#[inline]
#[must_use]
pub fn combine_all32<I: IntoIterator<Item = u32>>(seed: u32, values: I) -> u32 {
  values.into_iter().fold(seed, combine32)
}

/// Fold `values` left to right into `seed`.
#[inline]
#[must_use]
pub fn combine_all64<I: IntoIterator<Item = u64>>(seed: u64, values: I) -> u64 {
  values.into_iter().fold(seed, combine64)
}

/// Variadic 64-bit combine: `hash_combine!(seed; a, b, c)` folds `a`, `b`,
/// `c` into `seed` in that order.
///
/// ```
/// use hashes::{combine::combine64, hash_combine};
///
/// assert_eq!(hash_combine!(0; 1, 2), combine64(combine64(0, 1), 2));
/// assert_eq!(hash_combine!(7;), 7);
/// ```
#[macro_export]
macro_rules! hash_combine {
  ($seed:expr; $($value:expr),* $(,)?) => {{
    let acc: u64 = $seed;
    $( let acc = $crate::combine::combine64(acc, $value); )*
    acc
  }};
}
