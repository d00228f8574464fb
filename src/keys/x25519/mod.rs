//! X25519 scalar multiplication.
//!
//! ## Structure
//!
//! - `core`  
//!   Scalar clamping and the Montgomery ladder over projective `(X : Z)`
//!   pairs, built on the shared Curve25519 field arithmetic.
//!
//! Public keys are `scalarmult_base(secret)`; a shared secret is
//! `scalarmult(own_secret, peer_public)`. Inputs are not validated: a
//! low-order peer point yields an all-zero output, which is returned as-is.

mod core;

pub use self::core::{POINT_BYTES, SCALAR_BYTES, scalarmult, scalarmult_base};
