use zeroize::Zeroize;

use crate::encryption::poly1305::{onetimeauth, onetimeauth_verify};
use crate::encryption::salsa20::{stream, stream_xor};
use crate::error::{Error, Result};

/// Key size in bytes.
pub const KEY_BYTES: usize = 32;

/// Nonce size in bytes.
pub const NONCE_BYTES: usize = 24;

/// Zero padding required at the start of every plaintext.
pub const ZERO_BYTES: usize = 32;

/// Zero bytes at the start of every ciphertext, ahead of the tag.
pub const BOX_ZERO_BYTES: usize = 16;

fn check_lengths(output: &[u8], input: &[u8]) -> Result<()> {
    if input.len() < ZERO_BYTES {
        return Err(Error::BufferTooShort {
            minimum: ZERO_BYTES,
            actual: input.len(),
        });
    }

    if output.len() != input.len() {
        return Err(Error::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    Ok(())
}

/// Encrypts and authenticates `message` into `ciphertext`.
///
/// ## Algorithm
///
/// 1. XOR the whole message, header included, with the XSalsa20 keystream.
///    The zero header turns into the first 32 keystream bytes.
/// 2. Use those 32 bytes as the Poly1305 one-time key over `ciphertext[32..]`.
/// 3. Store the tag in `ciphertext[16..32]` and zero `ciphertext[..16]`.
///
/// The first 32 bytes of `message` are expected to be zero; this is not
/// checked. `ciphertext` must be the same length as `message`.
pub fn seal(
    ciphertext: &mut [u8],
    message: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    check_lengths(ciphertext, message)?;

    stream_xor(ciphertext, message, nonce, key)?;

    let mut one_time_key = [0u8; 32];
    one_time_key.copy_from_slice(&ciphertext[..32]);

    let tag = onetimeauth(&ciphertext[ZERO_BYTES..], &one_time_key);
    one_time_key.zeroize();

    ciphertext[BOX_ZERO_BYTES..ZERO_BYTES].copy_from_slice(&tag);
    ciphertext[..BOX_ZERO_BYTES].fill(0);

    Ok(())
}

/// Verifies and decrypts `ciphertext` into `message`.
///
/// The tag is checked before any decryption happens. On success the first
/// 32 bytes of `message` are zero and the payload follows. On
/// authentication failure `message` is zero-filled; on a length error it
/// is left untouched.
pub fn open(
    message: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    check_lengths(message, ciphertext).inspect_err(|_| {
        tracing::debug!(
            ciphertext_len = ciphertext.len(),
            message_len = message.len(),
            "secretbox open rejected buffer lengths"
        );
    })?;

    let mut one_time_key = [0u8; 32];
    stream(&mut one_time_key, nonce, key);

    let mut tag = [0u8; 16];
    tag.copy_from_slice(&ciphertext[BOX_ZERO_BYTES..ZERO_BYTES]);

    let verified = onetimeauth_verify(&tag, &ciphertext[ZERO_BYTES..], &one_time_key);
    one_time_key.zeroize();

    if let Err(e) = verified {
        message.fill(0);
        tracing::debug!(
            ciphertext_len = ciphertext.len(),
            "secretbox authentication failed"
        );
        return Err(e);
    }

    stream_xor(message, ciphertext, nonce, key)?;
    message[..ZERO_BYTES].fill(0);

    Ok(())
}
