//! Error type shared by every fallible operation in the crate.
//!
//! Leaf primitives (field arithmetic, the Salsa20 core, SHA-512, Poly1305,
//! HMAC, X25519) are total and never fail. Operations that verify something
//! or consume a caller-sized buffer, `stream_xor` included, return
//! [`Error`].

/// Errors from cryptographic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A tag or signature did not match the data it claims to authenticate.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A compressed Edwards point does not decode to a point on the curve.
    #[error("invalid curve point encoding")]
    InvalidPoint,

    /// The input is shorter than the minimum the construction requires.
    #[error("buffer too short: need at least {minimum} bytes, got {actual}")]
    BufferTooShort { minimum: usize, actual: usize },

    /// An output buffer does not have the length the operation produces.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
