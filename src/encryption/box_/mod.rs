//! Curve25519-XSalsa20-Poly1305 public-key authenticated encryption.
//!
//! `beforenm` turns an X25519 shared secret into a secretbox key with
//! HSalsa20; `seal` and `open` are secretbox under that key. The
//! `_afternm` variants take a precomputed [`SharedKey`] so the scalar
//! multiplication can be amortized over many messages to the same peer.

mod core;

#[cfg(feature = "getrandom")]
pub use self::core::generate_keypair;
pub use self::core::{
    BOX_ZERO_BYTES, NONCE_BYTES, PUBLIC_KEY_BYTES, PublicKey, SECRET_KEY_BYTES, SHARED_KEY_BYTES,
    SecretKey, SharedKey, ZERO_BYTES, beforenm, keypair, open, open_afternm, seal, seal_afternm,
};
