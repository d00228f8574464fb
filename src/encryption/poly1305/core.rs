//! Poly1305 one-time authenticator.
//!
//! A Poly1305 key authenticates exactly one message. Secretbox derives a
//! fresh key from the first 32 bytes of the XSalsa20 keystream for every
//! `(key, nonce)` pair.

use super::mac::Poly1305;
use crate::ct::verify_16;
use crate::error::Result;

/// One-time key size in bytes.
pub const KEY_BYTES: usize = 32;

/// Tag size in bytes.
pub const TAG_BYTES: usize = 16;

/// Computes the Poly1305 tag of `message` under a one-time key.
///
/// The message is processed in 16-byte blocks; the last block may be
/// shorter.
pub fn onetimeauth(message: &[u8], one_time_key: &[u8; KEY_BYTES]) -> [u8; TAG_BYTES] {
    let mut mac = Poly1305::new(one_time_key);

    for chunk in message.chunks(16) {
        mac.update_block(chunk);
    }

    mac.finalize()
}

/// Recomputes the tag of `message` and compares it to `tag` in constant time.
pub fn onetimeauth_verify(
    tag: &[u8; TAG_BYTES],
    message: &[u8],
    one_time_key: &[u8; KEY_BYTES],
) -> Result<()> {
    let expected = onetimeauth(message, one_time_key);

    verify_16(tag, &expected).inspect_err(|_| {
        tracing::debug!(message_len = message.len(), "poly1305 tag rejected");
    })
}
