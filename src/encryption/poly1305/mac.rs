use zeroize::{Zeroize, ZeroizeOnDrop};

/// `2^136 - p` in 17 base-2^8 limbs, where `p = 2^130 - 5`.
///
/// Adding it to `h` and looking at bit 135 tells whether `h >= p`.
const MINUS_P: [u32; 17] = [5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 252];

/// Adds `c` into `h` limb by limb with carry, keeping 8 bits per limb.
///
/// The carry out of limb 16 is dropped, so the sum is taken mod `2^136`.
#[inline(always)]
fn add1305(h: &mut [u32; 17], c: &[u32; 17]) {
    let mut u = 0u32;

    for (hj, cj) in h.iter_mut().zip(c) {
        u += *hj + cj;
        *hj = u & 255;
        u >>= 8;
    }
}

/// Internal Poly1305 state.
///
/// The accumulator, the clamped multiplier `r` and the final addend `s` are
/// all held as 17 limbs of 8 bits each (little-endian). The 17th limb of
/// the accumulator absorbs the bits above 2^128 between reductions.
///
/// It is a stateful accumulator and **must never be reused** across
/// different messages or keys. A fresh instance must be created for each
/// authentication.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305 {
    /// Clamped `r`, the first half of the one-time key.
    r: [u32; 17],

    /// Running accumulator `h`.
    h: [u32; 17],

    /// `s`, the second half of the one-time key, added at finalization.
    s: [u32; 17],
}

impl Poly1305 {
    /// Creates a new Poly1305 instance from a one-time 32-byte key.
    ///
    /// - `key[0..16]` → `r`, clamped: the top four bits of bytes 3, 7, 11
    ///   and 15 and the bottom two bits of bytes 4, 8 and 12 are cleared
    /// - `key[16..32]` → `s`
    pub(crate) fn new(one_time_key: &[u8; 32]) -> Self {
        let mut r = [0u32; 17];
        let mut s = [0u32; 17];

        for (rj, &k) in r.iter_mut().zip(&one_time_key[..16]) {
            *rj = k as u32;
        }

        r[3] &= 15;
        r[4] &= 252;
        r[7] &= 15;
        r[8] &= 252;
        r[11] &= 15;
        r[12] &= 252;
        r[15] &= 15;

        for (sj, &k) in s.iter_mut().zip(&one_time_key[16..]) {
            *sj = k as u32;
        }

        Poly1305 { r, h: [0; 17], s }
    }

    /// Absorbs a single message block of at most 16 bytes.
    ///
    /// The block is read as a little-endian integer with a `1` byte appended
    /// right after its last byte (so a short final block is padded at its
    /// true length, not at byte 16). The accumulator is then updated as:
    ///
    /// ```text
    /// h = (h + block) * r mod (2^130 - 5)
    /// ```
    ///
    /// Reduction uses `2^130 ≡ 5`: limb products that land at or above
    /// 2^136 are folded back multiplied by `5 * 2^6 = 320`, and the bits of
    /// limb 16 above 2^130 are folded into limb 0 multiplied by 5.
    pub(crate) fn update_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= 16);

        let mut c = [0u32; 17];
        for (cj, &b) in c.iter_mut().zip(block) {
            *cj = b as u32;
        }
        c[block.len()] = 1;

        add1305(&mut self.h, &c);

        let mut x = [0u32; 17];
        for (i, xi) in x.iter_mut().enumerate() {
            for j in 0..17 {
                let rj = if j <= i {
                    self.r[i - j]
                } else {
                    320 * self.r[i + 17 - j]
                };
                *xi += self.h[j] * rj;
            }
        }

        let mut u = 0u32;
        for j in 0..16 {
            u += x[j];
            self.h[j] = u & 255;
            u >>= 8;
        }

        u += x[16];
        self.h[16] = u & 3;
        u = 5 * (u >> 2);

        for j in 0..16 {
            u += self.h[j];
            self.h[j] = u & 255;
            u >>= 8;
        }

        u += self.h[16];
        self.h[16] = u;

        c.zeroize();
        x.zeroize();
    }

    /// Finalizes the computation and returns the 16-byte tag.
    ///
    /// `p` is subtracted once if `h >= p`, selected with a mask derived from
    /// the borrow bit rather than a branch, then `s` is added mod 2^128.
    pub(crate) fn finalize(mut self) -> [u8; 16] {
        let g = self.h;

        add1305(&mut self.h, &MINUS_P);
        let mask = 0u32.wrapping_sub(self.h[16] >> 7);

        for (hj, gj) in self.h.iter_mut().zip(&g) {
            *hj ^= mask & (gj ^ *hj);
        }

        add1305(&mut self.h, &self.s);

        let mut tag = [0u8; 16];
        for (t, &hj) in tag.iter_mut().zip(&self.h) {
            *t = hj as u8;
        }

        tag
    }
}
