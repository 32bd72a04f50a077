use core::hash::Hasher as _;

use hashes::{
  SipHashKey,
  fast::{
    SipHash13, SipHash24,
    siphash::{SipHasher13, SipHasher24},
  },
};
use proptest::prelude::*;
use traits::FastHash as _;

fn siphasher13_ref(key: [u64; 2], data: &[u8]) -> u64 {
  let mut h = siphasher::sip::SipHasher13::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

fn siphasher24_ref(key: [u64; 2], data: &[u8]) -> u64 {
  let mut h = siphasher::sip::SipHasher24::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

proptest! {
  #[test]
  fn siphash13_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash13::hash_with_seed(SipHashKey::from(key), &data);
    prop_assert_eq!(ours, siphasher13_ref(key, &data));
  }

  #[test]
  fn siphash24_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = SipHash24::hash_with_seed(SipHashKey::from(key), &data);
    prop_assert_eq!(ours, siphasher24_ref(key, &data));
  }

  #[test]
  fn key_bytes_match_siphasher(key in any::<[u8; 16]>(), data in proptest::collection::vec(any::<u8>(), 0..256)) {
    let ours = SipHash24::hash_with_seed(SipHashKey::from_bytes(&key), &data);
    let mut h = siphasher::sip::SipHasher24::new_with_key(&key);
    h.write(&data);
    prop_assert_eq!(ours, h.finish());
  }

  #[test]
  fn streaming_hasher_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let mut h13 = SipHasher13::new_with_key(SipHashKey::from(key));
    let mut h24 = SipHasher24::new_with_key(SipHashKey::from(key));
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h13.write(&data[i..end]);
      h24.write(&data[i..end]);
      i = end;
    }
    prop_assert_eq!(h13.finish(), siphasher13_ref(key, &data));
    prop_assert_eq!(h24.finish(), siphasher24_ref(key, &data));
  }
}
