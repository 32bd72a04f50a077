/// Errors returned when constructing a parameterized hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// Requested digest length is outside `1..=max`.
  #[error("invalid output length {requested}, expected 1..={max}")]
  InvalidOutputLength { requested: usize, max: usize },

  /// Key is longer than the algorithm accepts.
  #[error("key is {len} bytes, at most {max} allowed")]
  KeyTooLong { len: usize, max: usize },
}
