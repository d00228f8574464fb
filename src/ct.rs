//! Constant-time comparison of fixed-size byte strings.
//!
//! Every tag and signature check in the crate funnels through these two
//! functions. The comparison XOR-accumulates all bytes before deciding, so
//! the running time does not depend on the position of the first mismatch.

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Compares two 16-byte strings in constant time.
///
/// Used for Poly1305 tags.
pub fn verify_16(x: &[u8; 16], y: &[u8; 16]) -> Result<()> {
    verify(x, y)
}

/// Compares two 32-byte strings in constant time.
///
/// Used for HMAC tags and the `R` half of Ed25519 signatures.
pub fn verify_32(x: &[u8; 32], y: &[u8; 32]) -> Result<()> {
    verify(x, y)
}

#[inline(always)]
fn verify(x: &[u8], y: &[u8]) -> Result<()> {
    if bool::from(x.ct_eq(y)) {
        Ok(())
    } else {
        Err(Error::AuthenticationFailed)
    }
}
