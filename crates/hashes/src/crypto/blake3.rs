//! BLAKE3 (hash, keyed hash, key derivation, XOF).
//!
//! Input is split into 1024-byte chunks, each hashed as up to sixteen 64-byte
//! blocks. Chunk chaining values are merged pairwise into a binary tree that
//! grows from the left; the root node is compressed with the `ROOT` flag and
//! can be expanded into any number of output bytes by varying its output block
//! counter.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + internal block parsing

use core::{cmp::min, fmt};

use traits::{Digest, Xof};

const OUT_LEN: usize = 32;
const KEY_LEN: usize = 32;
const BLOCK_LEN: usize = 64;
const CHUNK_LEN: usize = 1024;

/// Deep enough for 2^54 chunks, i.e. 2^64 bytes of input.
const MAX_DEPTH: usize = 54;

const CHUNK_START: u32 = 1 << 0;
const CHUNK_END: u32 = 1 << 1;
const PARENT: u32 = 1 << 2;
const ROOT: u32 = 1 << 3;
const KEYED_HASH: u32 = 1 << 4;
const DERIVE_KEY_CONTEXT: u32 = 1 << 5;
const DERIVE_KEY_MATERIAL: u32 = 1 << 6;

const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Message word permutation applied between rounds.
const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

#[inline(always)]
fn g(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, mx: u32, my: u32) {
  state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
  state[d] = (state[d] ^ state[a]).rotate_right(16);
  state[c] = state[c].wrapping_add(state[d]);
  state[b] = (state[b] ^ state[c]).rotate_right(12);
  state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
  state[d] = (state[d] ^ state[a]).rotate_right(8);
  state[c] = state[c].wrapping_add(state[d]);
  state[b] = (state[b] ^ state[c]).rotate_right(7);
}

#[inline(always)]
fn round(state: &mut [u32; 16], m: &[u32; 16]) {
  g(state, 0, 4, 8, 12, m[0], m[1]);
  g(state, 1, 5, 9, 13, m[2], m[3]);
  g(state, 2, 6, 10, 14, m[4], m[5]);
  g(state, 3, 7, 11, 15, m[6], m[7]);
  g(state, 0, 5, 10, 15, m[8], m[9]);
  g(state, 1, 6, 11, 12, m[10], m[11]);
  g(state, 2, 7, 8, 13, m[12], m[13]);
  g(state, 3, 4, 9, 14, m[14], m[15]);
}

#[inline(always)]
fn permute(m: &mut [u32; 16]) {
  let original = *m;
  for (dst, &src) in m.iter_mut().zip(MSG_PERMUTATION.iter()) {
    *dst = original[src];
  }
}

fn compress(chaining_value: &[u32; 8], block_words: &[u32; 16], counter: u64, block_len: u32, flags: u32) -> [u32; 16] {
  let mut state = [
    chaining_value[0],
    chaining_value[1],
    chaining_value[2],
    chaining_value[3],
    chaining_value[4],
    chaining_value[5],
    chaining_value[6],
    chaining_value[7],
    IV[0],
    IV[1],
    IV[2],
    IV[3],
    counter as u32,
    (counter >> 32) as u32,
    block_len,
    flags,
  ];
  let mut m = *block_words;

  for r in 0..7 {
    round(&mut state, &m);
    if r < 6 {
      permute(&mut m);
    }
  }

  for i in 0..8 {
    state[i] ^= state[i + 8];
    state[i + 8] ^= chaining_value[i];
  }
  state
}

#[inline(always)]
fn first_8_words(words: [u32; 16]) -> [u32; 8] {
  let mut out = [0u32; 8];
  out.copy_from_slice(&words[..8]);
  out
}

#[inline]
fn words_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
  let mut out = [0u32; N];
  for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
  }
  out
}

#[inline]
fn words_to_le_bytes<const N: usize>(words: &[u32], out: &mut [u8; N]) {
  for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
    chunk.copy_from_slice(&word.to_le_bytes());
  }
}

/// Everything needed to produce either a chaining value or root output for
/// one node.
#[derive(Clone, Copy)]
struct OutputState {
  input_chaining_value: [u32; 8],
  block_words: [u32; 16],
  counter: u64,
  block_len: u32,
  flags: u32,
}

impl OutputState {
  #[inline]
  fn chaining_value(&self) -> [u32; 8] {
    first_8_words(compress(
      &self.input_chaining_value,
      &self.block_words,
      self.counter,
      self.block_len,
      self.flags,
    ))
  }

  /// Root output block number `output_block_counter` (64 bytes).
  #[inline]
  fn root_output_block(&self, output_block_counter: u64) -> [u8; 2 * OUT_LEN] {
    let words = compress(
      &self.input_chaining_value,
      &self.block_words,
      output_block_counter,
      self.block_len,
      self.flags | ROOT,
    );
    let mut out = [0u8; 2 * OUT_LEN];
    words_to_le_bytes(&words, &mut out);
    out
  }

  #[inline]
  fn root_hash(&self) -> [u8; OUT_LEN] {
    let block = self.root_output_block(0);
    let mut out = [0u8; OUT_LEN];
    out.copy_from_slice(&block[..OUT_LEN]);
    out
  }
}

#[derive(Clone, Copy)]
struct ChunkState {
  chaining_value: [u32; 8],
  chunk_counter: u64,
  block: [u8; BLOCK_LEN],
  block_len: u8,
  blocks_compressed: u8,
  flags: u32,
}

impl ChunkState {
  #[inline]
  fn new(key_words: [u32; 8], chunk_counter: u64, flags: u32) -> Self {
    Self {
      chaining_value: key_words,
      chunk_counter,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      blocks_compressed: 0,
      flags,
    }
  }

  #[inline]
  fn len(&self) -> usize {
    BLOCK_LEN * self.blocks_compressed as usize + self.block_len as usize
  }

  #[inline]
  fn start_flag(&self) -> u32 {
    if self.blocks_compressed == 0 { CHUNK_START } else { 0 }
  }

  /// Absorb at most the rest of this chunk. A full block is compressed only
  /// when more input follows, so the final block is always still buffered for
  /// `output` to tag with `CHUNK_END`.
  fn update(&mut self, mut input: &[u8]) {
    while !input.is_empty() {
      if self.block_len as usize == BLOCK_LEN {
        let block_words = words_from_le_bytes::<16>(&self.block);
        self.chaining_value = first_8_words(compress(
          &self.chaining_value,
          &block_words,
          self.chunk_counter,
          BLOCK_LEN as u32,
          self.flags | self.start_flag(),
        ));
        self.blocks_compressed += 1;
        self.block = [0u8; BLOCK_LEN];
        self.block_len = 0;
      }

      let start = self.block_len as usize;
      let take = min(BLOCK_LEN - start, input.len());
      self.block[start..start + take].copy_from_slice(&input[..take]);
      self.block_len += take as u8;
      input = &input[take..];
    }
  }

  #[inline]
  fn output(&self) -> OutputState {
    OutputState {
      input_chaining_value: self.chaining_value,
      block_words: words_from_le_bytes::<16>(&self.block),
      counter: self.chunk_counter,
      block_len: self.block_len as u32,
      flags: self.flags | self.start_flag() | CHUNK_END,
    }
  }
}

#[inline]
fn parent_output(left_child_cv: [u32; 8], right_child_cv: [u32; 8], key_words: [u32; 8], flags: u32) -> OutputState {
  let mut block_words = [0u32; 16];
  block_words[..8].copy_from_slice(&left_child_cv);
  block_words[8..].copy_from_slice(&right_child_cv);
  OutputState {
    input_chaining_value: key_words,
    block_words,
    counter: 0,
    block_len: BLOCK_LEN as u32,
    flags: PARENT | flags,
  }
}

/// Streaming BLAKE3 hasher.
///
/// ```
/// use hashes::{Digest, Xof, crypto::Blake3};
///
/// let mut h = Blake3::new();
/// h.update(b"abc");
/// assert_eq!(h.finalize()[..4], [0x64, 0x37, 0xb3, 0xac]);
///
/// let mut long = [0u8; 100];
/// h.finalize_xof().squeeze(&mut long);
/// assert_eq!(long[..32], h.finalize());
/// ```
#[derive(Clone)]
pub struct Blake3 {
  key_words: [u32; 8],
  chunk_state: ChunkState,
  cv_stack: [[u32; 8]; MAX_DEPTH],
  cv_stack_len: u8,
  flags: u32,
}

impl Default for Blake3 {
  #[inline]
  fn default() -> Self {
    Self::new_internal(IV, 0)
  }
}

impl fmt::Debug for Blake3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake3")
      .field("chunk_counter", &self.chunk_state.chunk_counter)
      .field("flags", &self.flags)
      .finish_non_exhaustive()
  }
}

impl Blake3 {
  #[inline]
  fn new_internal(key_words: [u32; 8], flags: u32) -> Self {
    Self {
      key_words,
      chunk_state: ChunkState::new(key_words, 0, flags),
      cv_stack: [[0u32; 8]; MAX_DEPTH],
      cv_stack_len: 0,
      flags,
    }
  }

  /// Hasher for the keyed hash function.
  #[must_use]
  #[inline]
  pub fn new_keyed(key: &[u8; KEY_LEN]) -> Self {
    Self::new_internal(words_from_le_bytes::<8>(key), KEYED_HASH)
  }

  /// Hasher for the key derivation function.
  ///
  /// `context` should be hardcoded, globally unique, and application-specific.
  #[must_use]
  pub fn new_derive_key(context: &str) -> Self {
    let mut context_hasher = Self::new_internal(IV, DERIVE_KEY_CONTEXT);
    context_hasher.update(context.as_bytes());
    let context_key = context_hasher.root_output().root_hash();
    Self::new_internal(words_from_le_bytes::<8>(&context_key), DERIVE_KEY_MATERIAL)
  }

  /// Keyed hash of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn keyed_digest(key: &[u8; KEY_LEN], data: &[u8]) -> [u8; OUT_LEN] {
    let mut h = Self::new_keyed(key);
    h.update(data);
    h.finalize()
  }

  /// Derive a 32-byte key from `key_material` under `context`.
  #[inline]
  #[must_use]
  pub fn derive_key(context: &str, key_material: &[u8]) -> [u8; OUT_LEN] {
    let mut h = Self::new_derive_key(context);
    h.update(key_material);
    h.finalize()
  }

  /// Extendable output for `data`.
  #[inline]
  #[must_use]
  pub fn xof(data: &[u8]) -> Blake3Xof {
    let mut h = Self::new();
    h.update(data);
    h.finalize_xof()
  }

  /// Keyed extendable output for `data`.
  #[inline]
  #[must_use]
  pub fn keyed_xof(key: &[u8; KEY_LEN], data: &[u8]) -> Blake3Xof {
    let mut h = Self::new_keyed(key);
    h.update(data);
    h.finalize_xof()
  }

  /// Finalize into an extendable output reader. The first 32 bytes equal
  /// [`finalize`](Digest::finalize).
  #[must_use]
  #[inline]
  pub fn finalize_xof(&self) -> Blake3Xof {
    Blake3Xof::new(self.root_output())
  }

  #[inline]
  fn push_stack(&mut self, cv: [u32; 8]) {
    self.cv_stack[self.cv_stack_len as usize] = cv;
    self.cv_stack_len += 1;
  }

  #[inline]
  fn pop_stack(&mut self) -> [u32; 8] {
    self.cv_stack_len -= 1;
    self.cv_stack[self.cv_stack_len as usize]
  }

  /// Push a completed chunk's chaining value, first merging every subtree it
  /// completes. `total_chunks` counts chunks including this one; each trailing
  /// zero bit is one finished subtree.
  fn add_chunk_chaining_value(&mut self, mut new_cv: [u32; 8], mut total_chunks: u64) {
    while total_chunks & 1 == 0 {
      new_cv = parent_output(self.pop_stack(), new_cv, self.key_words, self.flags).chaining_value();
      total_chunks >>= 1;
    }
    self.push_stack(new_cv);
  }

  /// Fold the current chunk and every stacked subtree into the root node.
  fn root_output(&self) -> OutputState {
    let mut output = self.chunk_state.output();
    for left in self.cv_stack[..self.cv_stack_len as usize].iter().rev() {
      output = parent_output(*left, output.chaining_value(), self.key_words, self.flags);
    }
    output
  }
}

impl Digest for Blake3 {
  const OUTPUT_SIZE: usize = OUT_LEN;
  type Output = [u8; OUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut input: &[u8]) {
    while !input.is_empty() {
      // A full chunk is only finished once more input arrives; the last
      // chunk must reach `root_output` unmerged.
      if self.chunk_state.len() == CHUNK_LEN {
        let chunk_cv = self.chunk_state.output().chaining_value();
        let total_chunks = self.chunk_state.chunk_counter + 1;
        self.add_chunk_chaining_value(chunk_cv, total_chunks);
        self.chunk_state = ChunkState::new(self.key_words, total_chunks, self.flags);
      }

      let take = min(CHUNK_LEN - self.chunk_state.len(), input.len());
      self.chunk_state.update(&input[..take]);
      input = &input[take..];
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.root_output().root_hash()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::new_internal(self.key_words, self.flags);
  }
}

/// BLAKE3 extendable output reader.
///
/// Each 64-byte output block is an independent compression of the root node
/// with its own counter.
#[derive(Clone)]
pub struct Blake3Xof {
  output: OutputState,
  block_counter: u64,
  buf: [u8; 2 * OUT_LEN],
  buf_pos: usize,
}

impl Blake3Xof {
  #[inline]
  fn new(output: OutputState) -> Self {
    Self {
      output,
      block_counter: 0,
      buf: [0u8; 2 * OUT_LEN],
      buf_pos: 2 * OUT_LEN,
    }
  }
}

impl fmt::Debug for Blake3Xof {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake3Xof")
      .field("block_counter", &self.block_counter)
      .finish_non_exhaustive()
  }
}

impl Xof for Blake3Xof {
  fn squeeze(&mut self, mut out: &mut [u8]) {
    while !out.is_empty() {
      if self.buf_pos == self.buf.len() {
        self.buf = self.output.root_output_block(self.block_counter);
        self.block_counter = self.block_counter.wrapping_add(1);
        self.buf_pos = 0;
      }
      let take = min(self.buf.len() - self.buf_pos, out.len());
      out[..take].copy_from_slice(&self.buf[self.buf_pos..self.buf_pos + take]);
      self.buf_pos += take;
      out = &mut out[take..];
    }
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  const KEY: &[u8; 32] = b"whats the Elvish word for friend";
  const CONTEXT: &str = "BLAKE3 2019-12-27 16:29:52 test vectors context";

  struct VectorCase {
    len: usize,
    hash: &'static str,
    keyed: &'static str,
    derive: &'static str,
  }

  const CASES: &[VectorCase] = &[
    VectorCase {
      len: 0,
      hash: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
      keyed: "92b2b75604ed3c761f9d6f62392c8a9227ad0ea3f09573e783f1498a4ed60d26",
      derive: "2cc39783c223154fea8dfb7c1b1660f2ac2dcbd1c1de8277b0b0dd39b7e50d7d",
    },
    VectorCase {
      len: 1,
      hash: "2d3adedff11b61f14c886e35afa036736dcd87a74d27b5c1510225d0f592e213",
      keyed: "6d7878dfff2f485635d39013278ae14f1454b8c0a3a2d34bc1ab38228a80c95b",
      derive: "b3e2e340a117a499c6cf2398a19ee0d29cca2bb7404c73063382693bf66cb06c",
    },
    VectorCase {
      len: 63,
      hash: "e9bc37a594daad83be9470df7f7b3798297c3d834ce80ba85d6e207627b7db7b",
      keyed: "bb1eb5d4afa793c1ebdd9fb08def6c36d10096986ae0cfe148cd101170ce37ae",
      derive: "b6451e30b953c206e34644c6803724e9d2725e0893039cfc49584f991f451af3",
    },
    VectorCase {
      len: 64,
      hash: "4eed7141ea4a5cd4b788606bd23f46e212af9cacebacdc7d1f4c6dc7f2511b98",
      keyed: "ba8ced36f327700d213f120b1a207a3b8c04330528586f414d09f2f7d9ccb7e6",
      derive: "a5c4a7053fa86b64746d4bb688d06ad1f02a18fce9afd3e818fefaa7126bf73e",
    },
    VectorCase {
      len: 65,
      hash: "de1e5fa0be70df6d2be8fffd0e99ceaa8eb6e8c93a63f2d8d1c30ecb6b263dee",
      keyed: "c0a4edefa2d2accb9277c371ac12fcdbb52988a86edc54f0716e1591b4326e72",
      derive: "51fd05c3c1cfbc8ed67d139ad76f5cf8236cd2acd26627a30c104dfd9d3ff8a8",
    },
    VectorCase {
      len: 1023,
      hash: "10108970eeda3eb932baac1428c7a2163b0e924c9a9e25b35bba72b28f70bd11",
      keyed: "c951ecdf03288d0fcc96ee3413563d8a6d3589547f2c2fb36d9786470f1b9d6e",
      derive: "74a16c1c3d44368a86e1ca6df64be6a2f64cce8f09220787450722d85725dea5",
    },
    VectorCase {
      len: 1024,
      hash: "42214739f095a406f3fc83deb889744ac00df831c10daa55189b5d121c855af7",
      keyed: "75c46f6f3d9eb4f55ecaaee480db732e6c2105546f1e675003687c31719c7ba4",
      derive: "7356cd7720d5b66b6d0697eb3177d9f8d73a4a5c5e968896eb6a689684302706",
    },
    VectorCase {
      len: 1025,
      hash: "d00278ae47eb27b34faecf67b4fe263f82d5412916c1ffd97c8cb7fb814b8444",
      keyed: "357dc55de0c7e382c900fd6e320acc04146be01db6a8ce7210b7189bd664ea69",
      derive: "effaa245f065fbf82ac186839a249707c3bddf6d3fdda22d1b95a3c970379bcb",
    },
    VectorCase {
      len: 2048,
      hash: "e776b6028c7cd22a4d0ba182a8bf62205d2ef576467e838ed6f2529b85fba24a",
      keyed: "879cf1fa2ea0e79126cb1063617a05b6ad9d0b696d0d757cf053439f60a99dd1",
      derive: "7b2945cb4fef70885cc5d78a87bf6f6207dd901ff239201351ffac04e1088a23",
    },
    VectorCase {
      len: 2049,
      hash: "5f4d72f40d7a5f82b15ca2b2e44b1de3c2ef86c426c95c1af0b6879522563030",
      keyed: "9f29700902f7c86e514ddc4df1e3049f258b2472b6dd5267f61bf13983b78dd5",
      derive: "2ea477c5515cc3dd606512ee72bb3e0e758cfae7232826f35fb98ca1bcbdf273",
    },
    VectorCase {
      len: 3072,
      hash: "b98cb0ff3623be03326b373de6b9095218513e64f1ee2edd2525c7ad1e5cffd2",
      keyed: "044a0e7b172a312dc02a4c9a818c036ffa2776368d7f528268d2e6b5df191770",
      derive: "050df97f8c2ead654d9bb3ab8c9178edcd902a32f8495949feadcc1e0480c46b",
    },
    VectorCase {
      len: 3073,
      hash: "7124b49501012f81cc7f11ca069ec9226cecb8a2c850cfe644e327d22d3e1cd3",
      keyed: "68dede9bef00ba89e43f31a6825f4cf433389fedae75c04ee9f0cf16a427c95a",
      derive: "72613c9ec9ff7e40f8f5c173784c532ad852e827dba2bf85b2ab4b76f7079081",
    },
    VectorCase {
      len: 4096,
      hash: "015094013f57a5277b59d8475c0501042c0b642e531b0a1c8f58d2163229e969",
      keyed: "befc660aea2f1718884cd8deb9902811d332f4fc4a38cf7c7300d597a081bfc0",
      derive: "1e0d7f3db8c414c97c6307cbda6cd27ac3b030949da8e23be1a1a924ad2f25b9",
    },
    VectorCase {
      len: 4097,
      hash: "9b4052b38f1c5fc8b1f9ff7ac7b27cd242487b3d890d15c96a1c25b8aa0fb995",
      keyed: "00df940cd36bb9fa7cbbc3556744e0dbc8191401afe70520ba292ee3ca80abbc",
      derive: "aca51029626b55fda7117b42a7c211f8c6e9ba4fe5b7a8ca922f34299500ead8",
    },
    VectorCase {
      len: 5120,
      hash: "9cadc15fed8b5d854562b26a9536d9707cadeda9b143978f319ab34230535833",
      keyed: "2c493e48e9b9bf31e0553a22b23503c0a3388f035cece68eb438d22fa1943e20",
      derive: "7a7acac8a02adcf3038d74cdd1d34527de8a0fcc0ee3399d1262397ce5817f60",
    },
    VectorCase {
      len: 5121,
      hash: "628bd2cb2004694adaab7bbd778a25df25c47b9d4155a55f8fbd79f2fe154cff",
      keyed: "6ccf1c34753e7a044db80798ecd0782a8f76f33563accaddbfbb2e0ea4b2d024",
      derive: "b07f01e518e702f7ccb44a267e9e112d403a7b3f4883a47ffbed4b48339b3c34",
    },
    VectorCase {
      len: 6144,
      hash: "3e2e5b74e048f3add6d21faab3f83aa44d3b2278afb83b80b3c35164ebeca205",
      keyed: "3d6b6d21281d0ade5b2b016ae4034c5dec10ca7e475f90f76eac7138e9bc8f1d",
      derive: "2a95beae63ddce523762355cf4b9c1d8f131465780a391286a5d01abb5683a15",
    },
    VectorCase {
      len: 6145,
      hash: "f1323a8631446cc50536a9f705ee5cb619424d46887f3c376c695b70e0f0507f",
      keyed: "9ac301e9e39e45e3250a7e3b3df701aa0fb6889fbd80eeecf28dbc6300fbc539",
      derive: "379bcc61d0051dd489f686c13de00d5b14c505245103dc040d9e4dd1facab8e5",
    },
    VectorCase {
      len: 7168,
      hash: "61da957ec2499a95d6b8023e2b0e604ec7f6b50e80a9678b89d2628e99ada77a",
      keyed: "b42835e40e9d4a7f42ad8cc04f85a963a76e18198377ed84adddeaecacc6f3fc",
      derive: "11c37a112765370c94a51415d0d651190c288566e295d505defdad895dae2237",
    },
    VectorCase {
      len: 7169,
      hash: "a003fc7a51754a9b3c7fae0367ab3d782dccf28855a03d435f8cfe74605e7817",
      keyed: "ed9b1a922c046fdb3d423ae34e143b05ca1bf28b710432857bf738bcedbfa511",
      derive: "554b0a5efea9ef183f2f9b931b7497995d9eb26f5c5c6dad2b97d62fc5ac31d9",
    },
    VectorCase {
      len: 8192,
      hash: "aae792484c8efe4f19e2ca7d371d8c467ffb10748d8a5a1ae579948f718a2a63",
      keyed: "dc9637c8845a770b4cbf76b8daec0eebf7dc2eac11498517f08d44c8fc00d58a",
      derive: "ad01d7ae4ad059b0d33baa3c01319dcf8088094d0359e5fd45d6aeaa8b2d0c3d",
    },
  ];

  fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex
      .as_bytes()
      .chunks_exact(2)
      .map(|pair| {
        let hi = (pair[0] as char).to_digit(16).unwrap();
        let lo = (pair[1] as char).to_digit(16).unwrap();
        ((hi << 4) | lo) as u8
      })
      .collect()
  }

  fn input_pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
  }

  #[test]
  fn official_vectors() {
    for case in CASES {
      let input = input_pattern(case.len);
      assert_eq!(&Blake3::digest(&input)[..], &hex_to_bytes(case.hash)[..], "hash len = {}", case.len);
      assert_eq!(
        &Blake3::keyed_digest(KEY, &input)[..],
        &hex_to_bytes(case.keyed)[..],
        "keyed len = {}",
        case.len
      );
      assert_eq!(
        &Blake3::derive_key(CONTEXT, &input)[..],
        &hex_to_bytes(case.derive)[..],
        "derive len = {}",
        case.len
      );
    }
  }

  #[test]
  fn official_xof_prefixes() {
    const XOF: &[(usize, &str)] = &[
      (0, "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262e00f03e7b69af26b7faaf09fcd333050338ddfe085b8cc869ca98b206c08243a26f5487789e8f660afe6c99ef9e0c52b92e7393024a80459cf91f476f9ffdbda7001c22e159b402631f277ca96f2defdf1078282314e763699a31c5363165421cce14d"),
      (1025, "d00278ae47eb27b34faecf67b4fe263f82d5412916c1ffd97c8cb7fb814b8444f4c4a22b4b399155358a994e52bf255de60035742ec71bd08ac275a1b51cc6bfe332b0ef84b409108cda080e6269ed4b3e2c3f7d722aa4cdc98d16deb554e5627be8f955c98e1d5f9565a9194cad0c4285f93700062d9595adb992ae68ff12800ab67a"),
      (8192, "aae792484c8efe4f19e2ca7d371d8c467ffb10748d8a5a1ae579948f718a2a635fe51a27db045a567c1ad51be5aa34c01c6651c4d9b5b5ac5d0fd58cf18dd61a47778566b797a8c67df7b1d60b97b19288d2d877bb2df417ace009dcb0241ca1257d62712b6a4043b4ff33f690d849da91ea3bf711ed583cb7b7a7da2839ba71309bbf"),
    ];
    for &(len, expected) in XOF {
      let expected = hex_to_bytes(expected);
      let mut out = alloc::vec![0u8; expected.len()];
      Blake3::xof(&input_pattern(len)).squeeze(&mut out);
      assert_eq!(out, expected, "len = {len}");
    }
  }

  #[test]
  fn abc() {
    assert_eq!(
      &Blake3::digest(b"abc")[..],
      &hex_to_bytes("6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85")[..]
    );
  }

  #[test]
  fn chunk_boundary_lengths_are_distinct() {
    let d1023 = Blake3::digest(&[0x61; 1023]);
    let d1024 = Blake3::digest(&[0x61; 1024]);
    let d1025 = Blake3::digest(&[0x61; 1025]);
    assert_ne!(d1023, d1024);
    assert_ne!(d1024, d1025);
    assert_ne!(d1023, d1025);
  }

  #[test]
  fn streaming_matches_oneshot() {
    let data = input_pattern(5 * CHUNK_LEN + 17);
    let expected = Blake3::digest(&data);
    for split in [0usize, 1, 63, 64, 65, 1023, 1024, 1025, 2048, 4096, 5 * CHUNK_LEN] {
      let mut h = Blake3::new();
      h.update(&data[..split]);
      h.update(&data[split..]);
      assert_eq!(h.finalize(), expected, "split = {split}");
    }
    let mut h = Blake3::new();
    for byte in &data {
      h.update(core::slice::from_ref(byte));
    }
    assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn xof_squeezes_are_sequential() {
    let mut whole = [0u8; 200];
    Blake3::xof(b"seek-free").squeeze(&mut whole);

    let mut xof = Blake3::xof(b"seek-free");
    let mut parts = [0u8; 200];
    let (a, rest) = parts.split_at_mut(10);
    let (b, c) = rest.split_at_mut(54);
    xof.squeeze(a);
    xof.squeeze(b);
    xof.squeeze(c);
    assert_eq!(whole, parts);
  }

  #[test]
  fn xof_prefix_is_digest() {
    let mut out = [0u8; 32];
    Blake3::keyed_xof(KEY, b"prefix").squeeze(&mut out);
    assert_eq!(out, Blake3::keyed_digest(KEY, b"prefix"));
  }

  #[test]
  fn reset_keeps_mode() {
    let mut h = Blake3::new_keyed(KEY);
    h.update(b"garbage");
    h.reset();
    h.update(b"message");
    assert_eq!(h.finalize(), Blake3::keyed_digest(KEY, b"message"));
  }
}
