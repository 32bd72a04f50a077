use hashes::crypto::{Sha256, Sha384, Sha512};
use proptest::prelude::*;
use traits::Digest as _;

fn sha256_ref(data: &[u8]) -> [u8; 32] {
  use sha2::Digest as _;
  sha2::Sha256::digest(data).into()
}

fn sha384_ref(data: &[u8]) -> [u8; 48] {
  use sha2::Digest as _;
  let out = sha2::Sha384::digest(data);
  let mut bytes = [0u8; 48];
  bytes.copy_from_slice(&out);
  bytes
}

fn sha512_ref(data: &[u8]) -> [u8; 64] {
  use sha2::Digest as _;
  let out = sha2::Sha512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

/// Feed `data` in pieces whose sizes come from the data itself.
fn stream<D: traits::Digest>(data: &[u8]) -> D::Output {
  let mut h = D::new();
  let mut i = 0usize;
  while i < data.len() {
    let step = (data[i] as usize % 97) + 1;
    let end = core::cmp::min(data.len(), i + step);
    h.update(&data[i..end]);
    i = end;
  }
  h.finalize()
}

proptest! {
  #[test]
  fn sha256_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha256::digest(&data), sha256_ref(&data));
  }

  #[test]
  fn sha256_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(stream::<Sha256>(&data), sha256_ref(&data));
  }

  #[test]
  fn sha384_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha384::digest(&data), sha384_ref(&data));
  }

  #[test]
  fn sha384_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(stream::<Sha384>(&data), sha384_ref(&data));
  }

  #[test]
  fn sha512_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha512::digest(&data), sha512_ref(&data));
  }

  #[test]
  fn sha512_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(stream::<Sha512>(&data), sha512_ref(&data));
  }
}

#[test]
fn padding_boundaries_match_sha2() {
  // One byte either side of where the length field stops fitting in the last block.
  for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 111, 112, 113, 127, 128, 129, 1000] {
    let data = vec![0x61u8; len];
    assert_eq!(Sha256::digest(&data), sha256_ref(&data), "sha256 len = {len}");
    assert_eq!(Sha384::digest(&data), sha384_ref(&data), "sha384 len = {len}");
    assert_eq!(Sha512::digest(&data), sha512_ref(&data), "sha512 len = {len}");
  }
}
