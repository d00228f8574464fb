//! Curve25519 arithmetic shared by X25519 and Ed25519.
//!
//! - `field`: arithmetic in 𝔽ₚ, `p = 2²⁵⁵ − 19`
//! - `edwards`: the twisted Edwards group in extended coordinates
//! - `scalar`: reduction modulo the group order `L`
//! - `constants`: curve parameters in limb form
//!
//! Nothing here is public. The key exchange and signature modules build
//! their byte-oriented APIs on top of these types.

pub(crate) mod constants;
pub(crate) mod edwards;
pub(crate) mod field;
pub(crate) mod scalar;
