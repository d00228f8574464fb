//! Digital signature schemes.
//!
//! Each submodule corresponds to one signature scheme and owns its key
//! types, signing logic and verification rules.
//!
//! ## Ed25519
//!
//! The `ed25519` module implements Ed25519 (RFC 8032, pure variant) over
//! the twisted Edwards form of Curve25519. It shares field arithmetic
//! with [`crate::keys::x25519`] and hashes with [`crate::hash::sha512`].

pub mod ed25519;
