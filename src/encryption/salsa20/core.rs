//! Salsa20 and HSalsa20 core functions
//!
//! Both cores run the same 20-round ARX permutation over a 4×4 matrix of
//! little-endian 32-bit words laid out as:
//!
//! ```text
//! c0 k0 k1 k2
//! k3 c1 i0 i1
//! i2 i3 c2 k4
//! k5 k6 k7 c3
//! ```
//!
//! where `c` is the 16-byte constant, `k` the 32-byte key and `i` the
//! 16-byte input (nonce ‖ block counter for the stream cipher).
//!
//! - `core_salsa20` adds the initial matrix back in (feed-forward) and
//!   returns all 64 bytes: one keystream block.
//! - `core_hsalsa20` returns the diagonal and input words of the permuted
//!   matrix without the feed-forward, as a 32-byte derived key.

/// The Salsa20 constant `"expand 32-byte k"`.
pub const SIGMA: [u8; 16] = *b"expand 32-byte k";

#[inline(always)]
fn load_le32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Performs one Salsa20 quarter round on words `(a, b, c, d)`.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// Applies the full Salsa20 permutation (20 rounds).
///
/// Each of the 10 iterations is a column round followed by a row round.
pub(crate) fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column round
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 5, 9, 13, 1);
        quarter_round(state, 10, 14, 2, 6);
        quarter_round(state, 15, 3, 7, 11);

        // Row round
        quarter_round(state, 0, 1, 2, 3);
        quarter_round(state, 5, 6, 7, 4);
        quarter_round(state, 10, 11, 8, 9);
        quarter_round(state, 15, 12, 13, 14);
    }
}

fn initial_state(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u32; 16] {
    let mut state = [0u32; 16];

    for i in 0..4 {
        state[5 * i] = load_le32(&constant[4 * i..]);
        state[1 + i] = load_le32(&key[4 * i..]);
        state[6 + i] = load_le32(&input[4 * i..]);
        state[11 + i] = load_le32(&key[16 + 4 * i..]);
    }

    state
}

/// Computes one 64-byte Salsa20 block.
pub fn core_salsa20(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 64] {
    let original = initial_state(input, key, constant);
    let mut state = original;

    rounds(&mut state);

    // Feed-forward
    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// Computes the 32-byte HSalsa20 output used for key derivation.
///
/// The output is words 0, 5, 10, 15 (diagonal) followed by words 6..=9
/// (input positions) of the permuted matrix.
pub fn core_hsalsa20(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 32] {
    let mut state = initial_state(input, key, constant);

    rounds(&mut state);

    let words = [
        state[0], state[5], state[10], state[15], state[6], state[7], state[8], state[9],
    ];

    let mut out = [0u8; 32];
    out.chunks_exact_mut(4)
        .zip(&words)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}
