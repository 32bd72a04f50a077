//! Error types shared across the hashkit crates.
//!
//! Individual crates define additional errors as needed.

/// An expected digest did not match the recomputed one.
///
/// Returned by [`Digest::check`](crate::Digest::check). Carries no detail
/// about where the digests diverged.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn check(computed: &[u8; 32], expected: &[u8; 32]) -> Result<(), VerificationError> {
///   if traits::bytes::ct_eq(computed, expected) {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(check(&[0u8; 32], &[1u8; 32]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("verification failed")]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(VerificationError::new().to_string(), "verification failed");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", VerificationError::new()), "VerificationError");
  }

  #[test]
  fn default_matches_new() {
    let err: VerificationError = Default::default();
    assert_eq!(err, VerificationError::new());
  }

  #[test]
  fn propagates_through_question_mark() {
    fn inner() -> Result<(), VerificationError> {
      Err(VerificationError::new())
    }
    fn outer() -> Result<u8, VerificationError> {
      inner()?;
      Ok(1)
    }
    assert_eq!(outer(), Err(VerificationError::new()));
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    fn assert_error<T: Error + Send + Sync + 'static>() {}
    assert_error::<VerificationError>();
    assert!(VerificationError::new().source().is_none());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<VerificationError>(), 0);
  }
}
