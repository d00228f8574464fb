//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-512 with a pure-Rust implementation. It is the
//! hash behind Ed25519 and the HMAC authenticator.

pub mod sha512;

/// Re-export of the SHA-512 convenience function.
pub use sha512::sha512;
