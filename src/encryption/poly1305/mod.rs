//! Poly1305 message authentication code.
//!
//! The implementation is split into two layers:
//!
//! - `mac`: the internal accumulator (key clamping, block absorption,
//!   modular reduction, final tag computation)
//! - `core`: the one-shot `onetimeauth` / `onetimeauth_verify` interface
//!
//! Poly1305 is a *one-time* authenticator: reusing a key for two messages
//! lets an observer forge tags.

mod core;
mod mac;

pub use self::core::{KEY_BYTES, TAG_BYTES, onetimeauth, onetimeauth_verify};
