//! Salsa20 family.
//!
//! - `core`: the Salsa20 block function and the HSalsa20 key-derivation
//!   function
//! - `stream`: the XSalsa20 stream cipher (24-byte nonce) built from both
//!
//! None of this authenticates anything. Secretbox and box pair the stream
//! with Poly1305.

mod core;
mod stream;

pub use self::core::{SIGMA, core_hsalsa20, core_salsa20};
pub use self::stream::{KEY_BYTES, NONCE_BYTES, stream, stream_xor};
