use zeroize::Zeroize;

use crate::ct::verify_32;
use crate::error::Result;
use crate::hash::sha512::{BLOCK_BYTES, Sha512};

/// Authenticator key size in bytes.
pub const KEY_BYTES: usize = 32;

/// Authenticator tag size in bytes (SHA-512 output truncated to 256 bits).
pub const TAG_BYTES: usize = 32;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Computes the 32-byte HMAC-SHA-512 tag of `message` under `key`.
///
/// The key is zero-extended to the 128-byte SHA-512 block, XORed with the
/// inner pad and hashed in front of the message; the inner digest is then
/// hashed behind the key XORed with the outer pad. Only the first 32 bytes
/// of the outer digest are returned.
pub fn auth(message: &[u8], key: &[u8; KEY_BYTES]) -> [u8; TAG_BYTES] {
    let mut pad = [IPAD; BLOCK_BYTES];
    for (p, k) in pad.iter_mut().zip(key) {
        *p ^= k;
    }

    let mut inner = Sha512::new();
    inner.update(&pad);
    inner.update(message);
    let mut inner_digest = inner.finalize();

    // Switch the key block from the inner pad to the outer pad.
    for p in pad.iter_mut() {
        *p ^= IPAD ^ OPAD;
    }

    let mut outer = Sha512::new();
    outer.update(&pad);
    outer.update(&inner_digest);
    let digest = outer.finalize();

    pad.zeroize();
    inner_digest.zeroize();

    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&digest[..TAG_BYTES]);
    tag
}

/// Recomputes the tag of `message` and compares it to `tag` in constant time.
pub fn verify(tag: &[u8; TAG_BYTES], message: &[u8], key: &[u8; KEY_BYTES]) -> Result<()> {
    let expected = auth(message, key);

    verify_32(tag, &expected).inspect_err(|_| {
        tracing::debug!(message_len = message.len(), "hmac-sha512 tag rejected");
    })
}
