//! Random source seam.
//!
//! Randomness is an external collaborator: the crate never keeps generator
//! state of its own. Key generation takes any `RngCore + CryptoRng`
//! implementation and draws bytes through [`fill_random`]. With the
//! `getrandom` feature (on by default) the operating system generator is
//! re-exported as [`OsRng`] for the convenience constructors.

use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;

/// Fills `buffer` with uniformly random bytes from `rng`.
///
/// This is the only place key generation touches the random source.
pub fn fill_random<R: RngCore + CryptoRng>(rng: &mut R, buffer: &mut [u8]) {
    rng.fill_bytes(buffer);
}
