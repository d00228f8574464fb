//! Scalars modulo the group order
//!
//! ```text
//! L = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars travel as 32-byte little-endian strings. Intermediate values
//! are held in 64 signed limbs of nominally 8 bits so that a 512-bit hash
//! or a 32×32-byte product fits before reduction.

use zeroize::Zeroize;

use super::constants::L;

/// Reduces a 64-limb value modulo `L` and returns the 32-byte result.
///
/// The limbs at 2²⁵⁶ and above are folded down one at a time using
/// `2²⁵² ≡ −(L − 2²⁵²)`, with a signed carry that keeps limbs near 8 bits.
/// The remaining top nibble is then cleared the same way, and a final
/// carry pass produces bytes in `[0, L)`.
fn mod_l(x: &mut [i64; 64]) -> [u8; 32] {
    for i in (32..64).rev() {
        let mut carry = 0i64;

        for j in (i - 32)..(i - 12) {
            x[j] += carry - 16 * x[i] * L[j - (i - 32)];
            carry = (x[j] + 128) >> 8;
            x[j] -= carry << 8;
        }

        x[i - 12] += carry;
        x[i] = 0;
    }

    let mut carry = 0i64;
    for j in 0..32 {
        x[j] += carry - (x[31] >> 4) * L[j];
        carry = x[j] >> 8;
        x[j] &= 255;
    }

    for j in 0..32 {
        x[j] -= carry * L[j];
    }

    let mut out = [0u8; 32];
    for i in 0..32 {
        x[i + 1] += x[i] >> 8;
        out[i] = x[i] as u8;
    }

    out
}

/// Reduces a 64-byte little-endian value (typically a SHA-512 digest)
/// modulo `L`.
pub(crate) fn reduce(wide: &[u8; 64]) -> [u8; 32] {
    let mut x = [0i64; 64];
    for (limb, &byte) in x.iter_mut().zip(wide) {
        *limb = byte as i64;
    }

    let out = mod_l(&mut x);
    x.zeroize();

    out
}

/// Computes `(a·b + c) mod L`.
///
/// Ed25519 signing uses it as `S = (h·a + r) mod L`.
pub(crate) fn mul_add(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let mut x = [0i64; 64];
    for (limb, &byte) in x.iter_mut().zip(c) {
        *limb = byte as i64;
    }

    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            x[i + j] += ai as i64 * bj as i64;
        }
    }

    let out = mod_l(&mut x);
    x.zeroize();

    out
}

/// Clamps a 32-byte secret scalar.
///
/// Clears the low three bits (a multiple of the cofactor 8), clears bit
/// 255 and sets bit 254.
pub(crate) fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn order() -> [u8; 32] {
        std::array::from_fn(|i| L[i] as u8)
    }

    fn widen(narrow: &[u8; 32]) -> [u8; 64] {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(narrow);
        wide
    }

    /// Little-endian comparison `a < b`.
    fn less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
        for i in (0..32).rev() {
            if a[i] != b[i] {
                return a[i] < b[i];
            }
        }
        false
    }

    /// Little-endian byte addition, no overflow past 256 bits expected.
    fn add_bytes(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut out = [0u8; 32];
        let mut carry = 0u16;
        for i in 0..32 {
            let sum = a[i] as u16 + b[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }
        out
    }

    #[test]
    fn order_reduces_to_zero() {
        assert_eq!(reduce(&widen(&order())), [0u8; 32]);

        let mut l_plus_one = order();
        l_plus_one[0] += 1;
        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(reduce(&widen(&l_plus_one)), one);
    }

    #[test]
    fn small_values_are_unchanged() {
        let mut small = [0u8; 32];
        small[..8].copy_from_slice(&0x0123_4567_89ab_cdefu64.to_le_bytes());

        assert_eq!(reduce(&widen(&small)), small);
    }

    #[test]
    fn reduction_is_below_order_and_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5c);
        let l = order();

        for _ in 0..64 {
            let mut wide = [0u8; 64];
            rng.fill(&mut wide[..]);

            let r = reduce(&wide);
            assert!(less_than(&r, &l));
            assert_eq!(reduce(&widen(&r)), r);
        }

        assert!(less_than(&reduce(&[0xffu8; 64]), &l));
    }

    #[test]
    fn mul_add_agrees_with_reduce() {
        let mut rng = StdRng::seed_from_u64(0x5d);
        let mut one = [0u8; 32];
        one[0] = 1;

        for _ in 0..16 {
            let mut a = [0u8; 32];
            let mut c = [0u8; 32];
            rng.fill(&mut a);
            rng.fill(&mut c);
            a[31] &= 0x0f;
            c[31] &= 0x0f;

            // a·1 + c = a + c, which fits in 256 bits.
            assert_eq!(mul_add(&a, &one, &c), reduce(&widen(&add_bytes(&a, &c))));
        }
    }

    #[test]
    fn mul_add_by_zero_reduces_the_addend() {
        let c = [0xeeu8; 32];
        assert_eq!(mul_add(&[0u8; 32], &[0x77u8; 32], &c), reduce(&widen(&c)));
    }

    #[test]
    fn clamp_sets_and_clears_fixed_bits() {
        let mut s = [0xffu8; 32];
        clamp(&mut s);
        assert_eq!(s[0], 0xf8);
        assert_eq!(s[31], 0x7f);

        let mut z = [0u8; 32];
        clamp(&mut z);
        assert_eq!(z[31], 0x40);
    }
}
