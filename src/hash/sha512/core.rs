//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - multi-block compression over a serialized state (`hashblocks`)
//! - a complete SHA-512 hashing function for arbitrary-length input
//! - an incremental hasher for inputs assembled from several pieces
//!
//! No heap allocation is performed anywhere in this module.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::computations::all_rounds;
use super::{BLOCK_BYTES, DIGEST_BYTES, H512_INIT};

#[inline(always)]
fn load_be64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(word)
}

#[inline(always)]
fn compress_slice(block: &[u8], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = load_be64(chunk);
    }

    all_rounds(state, w);
}

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    compress_slice(block, state);
}

/// Compresses every full block of `message` into a serialized state.
///
/// `state` is the 64-byte big-endian encoding of the eight chaining words.
/// It is decoded, updated with each complete 128-byte block of `message`
/// and written back. Trailing bytes that do not fill a block are left
/// unprocessed; their count is returned so the caller can pad them.
pub fn hashblocks(state: &mut [u8; 64], message: &[u8]) -> usize {
    let mut words = [0u64; 8];

    for (word, chunk) in words.iter_mut().zip(state.chunks_exact(8)) {
        *word = load_be64(chunk);
    }

    let mut blocks = message.chunks_exact(BLOCK_BYTES);
    for block in &mut blocks {
        compress_slice(block, &mut words);
    }

    for (chunk, word) in state.chunks_exact_mut(8).zip(&words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    blocks.remainder().len()
}

/// Pads the final partial block, compresses it and serializes the digest.
///
/// The padding is a single `0x80` byte, zeros, and the 128-bit big-endian
/// bit length of the whole message. A 256-byte buffer is used so that a tail
/// of 112 bytes or more, which leaves no room for the length field, spills
/// into a second block.
fn finish(mut state: [u64; 8], tail: &[u8], total_len: u128) -> [u8; 64] {
    let mut last = [0u8; 2 * BLOCK_BYTES];

    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = 0x80;

    let end = if tail.len() < 112 {
        BLOCK_BYTES
    } else {
        2 * BLOCK_BYTES
    };

    last[end - 16..end].copy_from_slice(&(total_len << 3).to_be_bytes());

    for block in last[..end].chunks_exact(BLOCK_BYTES) {
        compress_slice(block, &mut state);
    }

    last.zeroize();

    let mut out = [0u8; DIGEST_BYTES];
    for (chunk, word) in out.chunks_exact_mut(8).zip(&state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Computes the SHA-512 hash of the given input.
///
/// This function processes the input message in 1024-bit blocks, applies
/// the SHA-512 padding rules, and returns the final 512-bit hash value.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state uses 8 × 64-bit words and is serialized in big-endian.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut state = H512_INIT;

    let mut blocks = input.chunks_exact(BLOCK_BYTES);
    for block in &mut blocks {
        compress_slice(block, &mut state);
    }

    finish(state, blocks.remainder(), input.len() as u128)
}

/// Incremental SHA-512 hasher.
///
/// Produces exactly the same digest as [`sha512`] over the concatenation of
/// every slice passed to [`Sha512::update`]. Ed25519 uses it to hash
/// `prefix ‖ message` and `R ‖ A ‖ message` without building the
/// concatenation in memory.
///
/// The buffered tail may hold secret bytes, so it is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; BLOCK_BYTES],
    buffered: usize,
    length: u128,
}

impl Sha512 {
    /// Creates a hasher initialized with the SHA-512 IV.
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            buffer: [0u8; BLOCK_BYTES],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorbs `data` into the running hash.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length += data.len() as u128;

        if self.buffered > 0 {
            let take = (BLOCK_BYTES - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_BYTES {
                return;
            }

            compress_slice(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_BYTES);
        for block in &mut blocks {
            compress_slice(block, &mut self.state);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Applies the final padding and returns the 64-byte digest.
    pub fn finalize(self) -> [u8; 64] {
        finish(self.state, &self.buffer[..self.buffered], self.length)
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}
