//! Cryptographic hash functions.
//!
//! MD5 and SHA-1 are kept for interoperability with existing formats only;
//! both are broken for collision resistance.

pub mod blake2b;
pub mod blake3;
mod md;
pub mod md5;
pub mod sha1;
pub mod sha256;
pub mod sha512;

pub use blake2b::{Blake2b, Blake2b256, Blake2b512};
pub use blake3::{Blake3, Blake3Xof};
pub use md5::Md5;
#[allow(deprecated)]
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha512::{Sha384, Sha512};
