//! Algorithm-independent properties of the public surface.
#![allow(deprecated)]

use core::hash::Hasher as _;

use hashes::{
  Hash128,
  crypto::{Blake2b, Blake2b256, Blake2b512, Blake3, Md5, Sha1, Sha256, Sha384, Sha512},
  fast::{
    CityHash64, CityHash128, FarmHash64, FarmHash128, Murmur3_32, Murmur3_128, SipHash24, SipHasher, Spooky32, Spooky64,
    Spooky128, SpookyHasher, WyHash, Xxh32, Xxh64,
  },
};
use proptest::prelude::*;
use traits::{Digest, FastHash};

fn deterministic_digest<D: Digest>(data: &[u8]) -> bool {
  D::digest(data) == D::digest(data)
}

fn reset_restores<D: Digest>(junk: &[u8], data: &[u8]) -> bool {
  let mut h = D::new();
  h.update(junk);
  h.reset();
  h.update(data);
  h.finalize() == D::digest(data)
}

fn finalize_is_idempotent<D: Digest>(data: &[u8]) -> bool {
  let mut h = D::new();
  h.update(data);
  h.finalize() == h.finalize()
}

fn check_digest<D: Digest>(data: &[u8]) -> bool {
  let d = D::digest(data);
  let mut wrong = data.to_vec();
  wrong.push(0);
  D::verify(data, &d) && D::check(data, &d).is_ok() && !D::verify(&wrong, &d)
}

fn check_all_digests(data: &[u8], junk: &[u8]) -> bool {
  macro_rules! all {
    ($f:ident($($arg:expr),*)) => {
      $f::<Md5>($($arg),*)
        && $f::<Sha1>($($arg),*)
        && $f::<Sha256>($($arg),*)
        && $f::<Sha384>($($arg),*)
        && $f::<Sha512>($($arg),*)
        && $f::<Blake2b256>($($arg),*)
        && $f::<Blake2b512>($($arg),*)
        && $f::<Blake3>($($arg),*)
    };
  }
  all!(deterministic_digest(data))
    && all!(reset_restores(junk, data))
    && all!(finalize_is_idempotent(data))
    && all!(check_digest(data))
}

fn fast_verify<H: FastHash>(seed: H::Seed, data: &[u8]) -> bool {
  H::verify(seed, data, H::hash_with_seed(seed, data)) && H::hash_with_seed(seed, data) == H::hash_with_seed(seed, data)
}

proptest! {
  #[test]
  fn digest_contracts(data in proptest::collection::vec(any::<u8>(), 0..2048), junk in proptest::collection::vec(any::<u8>(), 0..300)) {
    prop_assert!(check_all_digests(&data, &junk));
  }

  #[test]
  fn fast_hash_contracts(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..1024)) {
    prop_assert!(fast_verify::<CityHash64>(seed, &data));
    prop_assert!(fast_verify::<CityHash128>(Hash128::new(seed, !seed), &data));
    prop_assert!(fast_verify::<FarmHash64>(seed, &data));
    prop_assert!(fast_verify::<FarmHash128>(Hash128::new(seed, seed), &data));
    prop_assert!(fast_verify::<Murmur3_32>(seed as u32, &data));
    prop_assert!(fast_verify::<Murmur3_128>(seed as u32, &data));
    prop_assert!(fast_verify::<SipHash24>(hashes::SipHashKey::new(seed, 1), &data));
    prop_assert!(fast_verify::<Spooky32>(seed as u32, &data));
    prop_assert!(fast_verify::<Spooky64>(seed, &data));
    prop_assert!(fast_verify::<Spooky128>(Hash128::new(seed, 0), &data));
    prop_assert!(fast_verify::<WyHash>(seed, &data));
    prop_assert!(fast_verify::<Xxh32>(seed as u32, &data));
    prop_assert!(fast_verify::<Xxh64>(seed, &data));
  }

  #[test]
  fn single_bit_flip_changes_digest(data in proptest::collection::vec(any::<u8>(), 1..1024), pos in any::<prop::sample::Index>(), bit in 0u8..8) {
    let mut flipped = data.clone();
    let i = pos.index(data.len());
    flipped[i] ^= 1 << bit;
    let key = hashes::SipHashKey::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
    prop_assert_ne!(Md5::digest(&data), Md5::digest(&flipped));
    prop_assert_ne!(Sha1::digest(&data), Sha1::digest(&flipped));
    prop_assert_ne!(Sha256::digest(&data), Sha256::digest(&flipped));
    prop_assert_ne!(Sha384::digest(&data), Sha384::digest(&flipped));
    prop_assert_ne!(Blake2b512::digest(&data), Blake2b512::digest(&flipped));
    prop_assert_ne!(Blake3::digest(&data), Blake3::digest(&flipped));
    prop_assert_ne!(SipHash24::hash_with_seed(key, &data), SipHash24::hash_with_seed(key, &flipped));
    prop_assert_ne!(CityHash128::hash(&data), CityHash128::hash(&flipped));
    prop_assert_ne!(FarmHash128::hash(&data), FarmHash128::hash(&flipped));
    prop_assert_ne!(Murmur3_128::hash(&data), Murmur3_128::hash(&flipped));
    prop_assert_ne!(Spooky128::hash(&data), Spooky128::hash(&flipped));
    prop_assert_ne!(Xxh64::hash(&data), Xxh64::hash(&flipped));
    prop_assert_ne!(WyHash::hash(&data), WyHash::hash(&flipped));
  }

  #[test]
  fn spooky_streaming_any_split(data in proptest::collection::vec(any::<u8>(), 0..2048), seed in any::<u64>()) {
    let seed = Hash128::new(seed, seed.rotate_left(17));
    let mut h = SpookyHasher::new(seed);
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }
    prop_assert_eq!(h.finalize(), Spooky128::hash_with_seed(seed, &data));
  }

  #[test]
  fn siphasher_matches_one_shot(k0 in any::<u64>(), k1 in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..512)) {
    let key = hashes::SipHashKey::new(k0, k1);
    let mut h = SipHasher::<2, 4>::new_with_key(key);
    for b in &data {
      h.write(core::slice::from_ref(b));
    }
    prop_assert_eq!(h.finish(), SipHash24::hash_with_seed(key, &data));
  }
}

#[test]
fn blake2b_lengths_are_independent_functions() {
  // Output length is a parameter, so the 32-byte digest is not a prefix of the 64-byte one.
  let d32 = Blake2b256::digest(b"abc");
  let d64 = Blake2b512::digest(b"abc");
  assert_ne!(&d64[..32], &d32[..]);
  assert_eq!(Blake2b::hash(b"abc", 32, &[]).unwrap().as_bytes(), &d32[..]);
}

#[test]
fn str_and_c_str_overloads_agree() {
  let c = c"The quick brown fox";
  let s = "The quick brown fox";
  assert_eq!(Sha256::digest_c_str(c), Sha256::digest_str(s));
  assert_eq!(Md5::digest_c_str(c), Md5::digest(s.as_bytes()));
  assert_eq!(Xxh64::hash_c_str(c), Xxh64::hash_str(s));
  assert_eq!(CityHash64::hash_c_str(c), CityHash64::hash(s.as_bytes()));
}

#[test]
fn raw_pointer_overloads() {
  let data = b"raw bytes";
  // SAFETY: pointer and length come from a live slice.
  let d = unsafe { Sha256::digest_raw(data.as_ptr(), data.len()) };
  assert_eq!(d, Sha256::digest(data));
  // SAFETY: zero length never dereferences the pointer.
  let empty = unsafe { Xxh32::hash_raw(core::ptr::null(), 0) };
  assert_eq!(empty, Xxh32::hash(b""));
}

#[test]
#[should_panic]
fn raw_null_with_length_panics() {
  // SAFETY: the null check fires before any read.
  let _ = unsafe { WyHash::hash_raw(core::ptr::null(), 4) };
}
