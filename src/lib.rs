//! Compact, constant-time cryptographic primitives in the NaCl style.
//!
//! This crate provides the building blocks of the NaCl `box` and
//! `secretbox` constructions together with Ed25519 signatures, implemented
//! from scratch on a single shared Curve25519 field arithmetic.
//!
//! The focus is on **clarity, predictability and auditability**. Every
//! primitive works on caller-owned, fixed-layout buffers and never
//! allocates.
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-512, one-shot and incremental, plus the raw multi-block
//!   compression entry point.
//!
//! - `auth`
//!   HMAC-SHA-512 keyed with 32 bytes and truncated to a 32-byte tag.
//!
//! - `encryption`
//!   Salsa20 / HSalsa20 / XSalsa20, the Poly1305 one-time authenticator,
//!   and the `secretbox` and `box_` authenticated-encryption constructions
//!   built from them.
//!
//! - `keys`
//!   X25519 scalar multiplication (RFC 7748).
//!
//! - `signatures`
//!   Ed25519 (RFC 8032) with NaCl's `seed ‖ public key` secret-key layout.
//!
//! - `ct`
//!   Constant-time comparison of 16- and 32-byte strings.
//!
//! - `rng`
//!   The random-source seam used by key generation.
//!
//! # Errors
//!
//! Leaf primitives are total. Operations that verify something or take a
//! caller-sized buffer return [`Result`]. On authentication failure, output
//! buffers are zero-filled so unauthenticated plaintext is never released.
//!
//! # Features
//!
//! - `getrandom` (default): OS-backed `generate_keypair()` helpers and the
//!   [`rng::OsRng`] re-export.
//!
//! # Design goals
//!
//! - No heap allocations
//! - No secret-dependent branches or memory accesses
//! - Secrets wiped with `zeroize` when they go out of scope
//! - Byte-exact compatibility with NaCl buffer layouts

mod curve25519;
mod error;

pub mod auth;
pub mod ct;
pub mod encryption;
pub mod hash;
pub mod keys;
pub mod rng;
pub mod signatures;

pub use error::{Error, Result};
