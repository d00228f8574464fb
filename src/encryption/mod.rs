//! Symmetric and public-key authenticated encryption.
//!
//! - `salsa20`  
//!   Salsa20 and HSalsa20 cores and the XSalsa20 stream cipher.
//!
//! - `poly1305`  
//!   The Poly1305 one-time authenticator.
//!
//! - `secretbox`  
//!   XSalsa20-Poly1305 authenticated encryption under a shared 32-byte key.
//!
//! - `box_`  
//!   Curve25519-XSalsa20-Poly1305: X25519 key agreement, HSalsa20 key
//!   derivation and secretbox. Named `box_` because `box` is reserved.
//!
//! Secretbox and box buffers follow the NaCl layout: the first 32 bytes of
//! every plaintext are zero padding and the first 32 bytes of every
//! ciphertext are 16 zero bytes followed by the 16-byte tag.
//!
//! Nonce reuse with the same key is catastrophic and must be avoided.

pub mod box_;
pub mod poly1305;
pub mod salsa20;
pub mod secretbox;
