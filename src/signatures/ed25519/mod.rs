//! Ed25519 signatures.
//!
//! ## Structure
//!
//! - `core`  
//!   Key types, key generation, signing and verification, in both the
//!   attached form (`sign` / `open`, signature prepended to the message)
//!   and the detached form (`sign_detached` / `verify_detached`).
//!
//! Secret keys are 64 bytes, `seed ‖ public key`, the layout NaCl uses.

mod core;

#[cfg(feature = "getrandom")]
pub use self::core::generate_keypair;
pub use self::core::{
    PUBLIC_KEY_BYTES, PublicKey, SECRET_KEY_BYTES, SEED_BYTES, SIGNATURE_BYTES, SecretKey,
    Signature, keypair, keypair_from_seed, open, sign, sign_detached, verify_detached,
};
