//! Key agreement.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman scalar
//! multiplication with the Montgomery ladder of RFC 7748. It works on
//! x-coordinates only and is used for shared-secret derivation by
//! [`crate::encryption::box_`], not for signatures.
//!
//! Signatures over the birationally equivalent Edwards curve live in
//! [`crate::signatures`].

pub mod x25519;
