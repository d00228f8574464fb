//! Secret-key message authentication.
//!
//! The authenticator is HMAC with SHA-512 as the underlying hash, keyed with
//! a 32-byte secret and truncated to a 32-byte tag. The truncation is part of
//! the external contract: tags are interoperable only at this length.

mod hmac;

pub use hmac::{KEY_BYTES, TAG_BYTES, auth, verify};
