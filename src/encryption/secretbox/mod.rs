//! XSalsa20-Poly1305 secret-key authenticated encryption.
//!
//! ## Buffer layout
//!
//! ```text
//! message:    [ 0 × 32            | payload ... ]
//! ciphertext: [ 0 × 16 | tag × 16 | encrypted payload ... ]
//! ```
//!
//! Both buffers are the same length, at least `ZERO_BYTES`.

mod core;

pub use self::core::{BOX_ZERO_BYTES, KEY_BYTES, NONCE_BYTES, ZERO_BYTES, open, seal};
