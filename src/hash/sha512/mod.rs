//! SHA-512 (FIPS 180-4).
//!
//! - `computations`: round constants, Σ/σ mixing functions and the
//!   80-round compression loop
//! - `core`: block compression, the one-shot `sha512` function and the
//!   incremental [`Sha512`] hasher

mod computations;
mod core;

pub use self::core::{Sha512, compress, hashblocks, sha512};

/// Size of a SHA-512 digest in bytes.
pub const DIGEST_BYTES: usize = 64;

/// Size of a SHA-512 message block in bytes.
pub const BLOCK_BYTES: usize = 128;

/// Initial hash value H(0) for SHA-512.
pub(crate) const H512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];
