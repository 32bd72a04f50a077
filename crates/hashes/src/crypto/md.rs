//! Merkle–Damgård block buffering and padding.
//!
//! MD5, SHA-1, and the SHA-2 family all consume whole blocks, buffer the
//! remainder, and finish with `0x80`, zero fill, and the message bit length
//! in the last 8 (64-byte blocks) or 16 (128-byte blocks) bytes. The length
//! suffix spills into a second block once the remainder reaches
//! `N - suffix_len` bytes.
#![allow(clippy::indexing_slicing)] // `pos < N` is maintained by every mutation.

#[derive(Clone, Debug)]
pub(crate) struct BlockBuffer<const N: usize> {
  block: [u8; N],
  pos: usize,
  bytes_hashed: u128,
}

impl<const N: usize> BlockBuffer<N> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      block: [0u8; N],
      pos: 0,
      bytes_hashed: 0,
    }
  }

  /// Message length in bits, modulo 2^128.
  #[inline]
  pub(crate) const fn bit_len(&self) -> u128 {
    self.bytes_hashed.wrapping_mul(8)
  }

  /// Absorb `data`, calling `compress` once per completed block.
  ///
  /// After return, fewer than `N` bytes are pending.
  pub(crate) fn update(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
    self.bytes_hashed = self.bytes_hashed.wrapping_add(data.len() as u128);

    if self.pos != 0 {
      let take = core::cmp::min(N - self.pos, data.len());
      self.block[self.pos..self.pos + take].copy_from_slice(&data[..take]);
      self.pos += take;
      data = &data[take..];

      if self.pos < N {
        return;
      }
      compress(&self.block);
      self.pos = 0;
    }

    let (blocks, rest) = data.as_chunks::<N>();
    for block in blocks {
      compress(block);
    }
    self.block[..rest.len()].copy_from_slice(rest);
    self.pos = rest.len();
  }

  /// Pad the pending bytes and compress the final one or two blocks.
  ///
  /// `suffix` is the already-encoded bit length. The buffer itself is left
  /// untouched so finalization can be repeated.
  pub(crate) fn pad(&self, suffix: &[u8], mut compress: impl FnMut(&[u8; N])) {
    let boundary = N - suffix.len();
    let mut block = self.block;
    let mut pos = self.pos;

    block[pos] = 0x80;
    pos += 1;

    if pos > boundary {
      block[pos..].fill(0);
      compress(&block);
      block = [0u8; N];
      pos = 0;
    }

    block[pos..boundary].fill(0);
    block[boundary..].copy_from_slice(suffix);
    compress(&block);
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::BlockBuffer;

  fn collect(pending: usize) -> Vec<[u8; 64]> {
    let mut buf = BlockBuffer::<64>::new();
    let data = [0xAAu8; 64];
    buf.update(&data[..pending], |_| {});
    let mut out = Vec::new();
    buf.pad(&(buf.bit_len() as u64).to_be_bytes(), |b| out.push(*b));
    out
  }

  #[test]
  fn padding_threshold_is_56() {
    assert_eq!(collect(0).len(), 1);
    assert_eq!(collect(55).len(), 1);
    assert_eq!(collect(56).len(), 2);
    assert_eq!(collect(63).len(), 2);
  }

  #[test]
  fn padding_layout() {
    let one = collect(3);
    assert_eq!(&one[0][..4], &[0xAA, 0xAA, 0xAA, 0x80]);
    assert!(one[0][4..56].iter().all(|&b| b == 0));
    assert_eq!(&one[0][56..], &24u64.to_be_bytes());

    let two = collect(56);
    assert_eq!(two[0][56], 0x80);
    assert!(two[0][57..].iter().all(|&b| b == 0));
    assert!(two[1][..56].iter().all(|&b| b == 0));
    assert_eq!(&two[1][56..], &448u64.to_be_bytes());
  }

  #[test]
  fn wide_suffix_threshold_is_112() {
    for (pending, blocks) in [(111usize, 1usize), (112, 2), (127, 2)] {
      let mut buf = BlockBuffer::<128>::new();
      buf.update(&[0u8; 128][..pending], |_| {});
      let mut n = 0;
      buf.pad(&buf.bit_len().to_be_bytes(), |_| n += 1);
      assert_eq!(n, blocks, "pending = {pending}");
    }
  }

  #[test]
  fn split_updates_compress_same_blocks() {
    let data: Vec<u8> = (0..300u32).map(|i| i as u8).collect();
    let mut whole = Vec::new();
    let mut a = BlockBuffer::<64>::new();
    a.update(&data, |b| whole.push(*b));

    let mut pieces = Vec::new();
    let mut b = BlockBuffer::<64>::new();
    for chunk in data.chunks(7) {
      b.update(chunk, |blk| pieces.push(*blk));
    }
    assert_eq!(whole, pieces);
    assert_eq!(a.bit_len(), b.bit_len());
  }
}
