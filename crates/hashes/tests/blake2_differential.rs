use hashes::crypto::{Blake2b, Blake2b256, Blake2b512};
use proptest::prelude::*;
use traits::Digest as _;

fn blake2b_ref(data: &[u8], out_len: usize, key: &[u8]) -> Vec<u8> {
  blake2b_simd::Params::new()
    .hash_length(out_len)
    .key(key)
    .hash(data)
    .as_bytes()
    .to_vec()
}

proptest! {
  #[test]
  fn blake2b512_one_shot_matches_blake2b_simd(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2b512::digest(&data).to_vec(), blake2b_ref(&data, 64, &[]));
  }

  #[test]
  fn blake2b256_one_shot_matches_blake2b_simd(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2b256::digest(&data).to_vec(), blake2b_ref(&data, 32, &[]));
  }

  #[test]
  fn blake2b512_streaming_matches_blake2b_simd(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2b_ref(&data, 64, &[]);
    let mut h = Blake2b512::new();

    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }
    prop_assert_eq!(h.finalize().to_vec(), expected);
  }

  #[test]
  fn blake2b_any_length_and_key(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    out_len in 1usize..=64,
    key in proptest::collection::vec(any::<u8>(), 0..=64),
  ) {
    let ours = Blake2b::hash(&data, out_len, &key).unwrap();
    let expected = blake2b_ref(&data, out_len, &key);
    prop_assert_eq!(ours.as_bytes(), expected.as_slice());
  }

  #[test]
  fn blake2b_keyed_streaming(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    key in proptest::collection::vec(any::<u8>(), 1..=64),
  ) {
    let expected = blake2b_ref(&data, 48, &key);
    let mut h = Blake2b::new_with_params(48, &key).unwrap();

    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }
    let ours = h.finalize();
    prop_assert_eq!(ours.as_bytes(), expected.as_slice());
  }

  #[test]
  fn blake2b256_keyed_matches(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    key in proptest::collection::vec(any::<u8>(), 0..=64),
  ) {
    let ours = Blake2b256::keyed_digest(&key, &data).unwrap();
    prop_assert_eq!(ours.to_vec(), blake2b_ref(&data, 32, &key));
  }
}

#[test]
fn rejects_bad_parameters() {
  assert_eq!(
    Blake2b::new(0).unwrap_err(),
    hashes::Error::InvalidOutputLength { requested: 0, max: 64 }
  );
  assert_eq!(
    Blake2b::new_with_params(32, &[0u8; 65]).unwrap_err(),
    hashes::Error::KeyTooLong { len: 65, max: 64 }
  );
}
