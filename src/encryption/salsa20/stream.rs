//! XSalsa20 stream cipher.
//!
//! The 24-byte nonce is split in two: the first 16 bytes go through
//! HSalsa20 with the caller's key to derive a per-nonce subkey, the last 8
//! bytes seed Salsa20 under that subkey. The Salsa20 input is
//! `nonce[16..24] ‖ counter`, with a 64-bit little-endian block counter that
//! starts at zero and increments once per 64-byte block.

use zeroize::Zeroize;

use super::core::{SIGMA, core_hsalsa20, core_salsa20};
use crate::error::{Error, Result};

/// XSalsa20 key size in bytes.
pub const KEY_BYTES: usize = 32;

/// XSalsa20 nonce size in bytes.
pub const NONCE_BYTES: usize = 24;

/// Writes Salsa20 keystream into `output`, XORed with `input` when present.
///
/// With `input == None` the raw keystream is produced.
fn salsa20_xor(output: &mut [u8], input: Option<&[u8]>, nonce: &[u8; 8], key: &[u8; 32]) {
    let mut block_input = [0u8; 16];
    block_input[..8].copy_from_slice(nonce);

    let mut counter = 0u64;
    let mut offset = 0usize;

    for chunk in output.chunks_mut(64) {
        block_input[8..].copy_from_slice(&counter.to_le_bytes());
        let mut keystream = core_salsa20(&block_input, key, &SIGMA);

        match input {
            Some(message) => {
                for (o, (m, k)) in chunk
                    .iter_mut()
                    .zip(message[offset..].iter().zip(&keystream))
                {
                    *o = m ^ k;
                }
            }
            None => chunk.copy_from_slice(&keystream[..chunk.len()]),
        }

        keystream.zeroize();
        offset += chunk.len();
        counter = counter.wrapping_add(1);
    }
}

/// Derives the Salsa20 subkey and returns it with the trailing nonce bytes.
fn derive(nonce: &[u8; NONCE_BYTES], key: &[u8; KEY_BYTES]) -> ([u8; 32], [u8; 8]) {
    let mut head = [0u8; 16];
    head.copy_from_slice(&nonce[..16]);

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&nonce[16..]);

    (core_hsalsa20(&head, key, &SIGMA), tail)
}

/// Fills `output` with XSalsa20 keystream.
pub fn stream(output: &mut [u8], nonce: &[u8; NONCE_BYTES], key: &[u8; KEY_BYTES]) {
    let (mut subkey, tail) = derive(nonce, key);
    salsa20_xor(output, None, &tail, &subkey);
    subkey.zeroize();
}

/// XORs `input` with XSalsa20 keystream into `output`.
///
/// Encryption and decryption are the same operation. `output` must be
/// exactly as long as `input`; otherwise nothing is written.
pub fn stream_xor(
    output: &mut [u8],
    input: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    if output.len() != input.len() {
        return Err(Error::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    let (mut subkey, tail) = derive(nonce, key);
    salsa20_xor(output, Some(input), &tail, &subkey);
    subkey.zeroize();

    Ok(())
}
