//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! shared by the Montgomery ladder (X25519) and the Edwards group (Ed25519).
//!
//! ## Representation
//!
//! Field elements are 16 signed 64-bit limbs holding a radix-2¹⁶
//! little-endian expansion:
//!
//! ```text
//! a = Σ a[i] · 2^(16·i)
//! ```
//!
//! A value has two states that share this type:
//!
//! - **unreduced**: the output of `+`, `-` or of decoding. Limbs may exceed
//!   16 bits (or be negative) and the integer may exceed `p`.
//! - **canonical**: the 32-byte output of [`FieldElement::to_bytes`], fully
//!   reduced below `p`.
//!
//! Raw limbs of two elements are never compared. Equality and parity are
//! always computed on the canonical encoding.
//!
//! ## Carries
//!
//! Multiplication folds the upper half of the 31-limb product back with
//! `2²⁵⁶ ≡ 38 (mod p)` and carries twice. Encoding carries three times and
//! then subtracts `p` twice under a borrow-derived mask.
//!
//! All operations are constant-time: loops have fixed trip counts and the
//! only branches are on public loop indices.

use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Field element modulo `2^255 - 19`, 16 limbs of nominally 16 bits.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i64; 16]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; 16]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Propagates limb overflow upward, one pass.
    ///
    /// Each limb is biased by `2^16` so that negative limbs borrow cleanly.
    /// The carry out of limb 15 has weight `2^256 ≡ 38 (mod p)` and is
    /// folded back into limb 0: once as the plain carry and once as the
    /// `×37` correction.
    pub(crate) fn carry(&mut self) {
        for i in 0..16 {
            self.0[i] += 1 << 16;
            let c = self.0[i] >> 16;

            if i < 15 {
                self.0[i + 1] += c - 1;
            } else {
                self.0[0] += (c - 1) + 37 * (c - 1);
            }

            self.0[i] -= c << 16;
        }
    }

    /// Decodes a 32-byte little-endian encoding.
    ///
    /// Bit 255 is ignored. The value is taken mod `2^255`; reduction mod
    /// `p` is deferred to the first arithmetic operation.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0i64; 16];

        for (limb, pair) in limbs.iter_mut().zip(bytes.chunks_exact(2)) {
            *limb = pair[0] as i64 | ((pair[1] as i64) << 8);
        }

        limbs[15] &= 0x7fff;

        FieldElement(limbs)
    }

    /// Encodes this element into its canonical 32-byte little-endian form.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut t = *self;

        t.carry();
        t.carry();
        t.carry();

        for _ in 0..2 {
            let mut m = [0i64; 16];

            m[0] = t.0[0] - 0xffed;
            for i in 1..15 {
                m[i] = t.0[i] - 0xffff - ((m[i - 1] >> 16) & 1);
                m[i - 1] &= 0xffff;
            }
            m[15] = t.0[15] - 0x7fff - ((m[14] >> 16) & 1);
            m[14] &= 0xffff;

            // Keep t - p unless the subtraction borrowed out of limb 15.
            let borrow = ((m[15] >> 16) & 1) as u8;
            t.conditional_assign(&FieldElement(m), Choice::from(1 - borrow));
        }

        let mut out = [0u8; 32];
        for (pair, limb) in out.chunks_exact_mut(2).zip(&t.0) {
            pair[0] = *limb as u8;
            pair[1] = (*limb >> 8) as u8;
        }

        out
    }

    /// Returns the lowest bit of the canonical encoding.
    ///
    /// Ed25519 calls an element "negative" when this bit is set.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Computes `self²`.
    pub(crate) fn square(&self) -> Self {
        *self * *self
    }

    /// Computes `self^(p - 2) = self⁻¹` by Fermat's little theorem.
    ///
    /// `p - 2 = 2^255 - 21` has every bit from 254 down to 0 set except bits
    /// 2 and 4, so the chain is 254 squarings with a multiplication after
    /// each one except at those two positions. Zero maps to zero.
    pub(crate) fn invert(&self) -> Self {
        let mut c = *self;

        for bit in (0..=253).rev() {
            c = c.square();

            if bit != 2 && bit != 4 {
                c = c * *self;
            }
        }

        c
    }

    /// Computes `self^((p - 5) / 8) = self^(2^252 - 3)`.
    ///
    /// Used to take square roots during point decompression. The exponent
    /// has every bit from 251 down to 0 set except bit 1.
    pub(crate) fn pow2523(&self) -> Self {
        let mut c = *self;

        for bit in (0..=250).rev() {
            c = c.square();

            if bit != 1 {
                c = c * *self;
            }
        }

        c
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for (o, r) in out.0.iter_mut().zip(&rhs.0) {
            *o += r;
        }
        out
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for (o, r) in out.0.iter_mut().zip(&rhs.0) {
            *o -= r;
        }
        out
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElement::ZERO - self
    }
}

/// Schoolbook multiplication followed by the `38` fold and two carries.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        #[cfg(test)]
        op_count::record_mul();

        let mut t = [0i64; 31];

        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                t[i + j] += a * b;
            }
        }

        for i in 0..15 {
            t[i] += 38 * t[i + 16];
        }

        let mut out = FieldElement::ZERO;
        out.0.copy_from_slice(&t[..16]);

        out.carry();
        out.carry();

        out
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = *a;
        for (o, (x, y)) in out.0.iter_mut().zip(a.0.iter().zip(&b.0)) {
            *o = i64::conditional_select(x, y, choice);
        }
        out
    }

    /// Swaps `a` and `b` when `choice` is set, using an all-ones or
    /// all-zeros mask so no branch depends on the choice.
    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        #[cfg(test)]
        op_count::record_swap();

        let mask = -(choice.unwrap_u8() as i64);

        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            let t = mask & (*x ^ *y);
            *x ^= t;
            *y ^= t;
        }
    }
}

/// Equality on canonical encodings, XOR-accumulated over all 32 bytes.
impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// `p = 2^255 - 19`, little-endian.
    const P_BYTES: [u8; 32] = {
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        p
    };

    fn random_element(rng: &mut StdRng) -> FieldElement {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        FieldElement::from_bytes(&bytes)
    }

    #[test]
    fn canonical_bytes_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x2551);

        for _ in 0..64 {
            let mut bytes = [0u8; 32];
            rng.fill(&mut bytes);
            bytes[31] &= 0x3f;

            assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
        }
    }

    #[test]
    fn encoding_reduces_values_at_or_above_p() {
        assert_eq!(FieldElement::from_bytes(&P_BYTES).to_bytes(), [0u8; 32]);

        let mut p_plus_one = P_BYTES;
        p_plus_one[0] += 1;
        assert_eq!(
            FieldElement::from_bytes(&p_plus_one).to_bytes(),
            FieldElement::ONE.to_bytes()
        );
    }

    #[test]
    fn top_bit_is_ignored_on_decode() {
        let mut bytes = [0u8; 32];
        bytes[0] = 9;
        bytes[31] = 0x80;

        let mut expected = [0u8; 32];
        expected[0] = 9;

        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), expected);
    }

    #[test]
    fn unreduced_values_compare_equal_after_normalizing() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_element(&mut rng);
        let b = random_element(&mut rng);

        let lhs = (a + b) - b;
        assert!(bool::from(lhs.ct_eq(&a)));
        assert!(!bool::from((a + FieldElement::ONE).ct_eq(&a)));
    }

    #[test]
    fn carry_leaves_sixteen_bit_limbs() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_element(&mut rng);

        let mut t = (a + a + a) - (a * a);
        t.carry();
        t.carry();
        t.carry();

        assert!(t.0.iter().all(|&limb| (0..1 << 16).contains(&limb)));
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..16 {
            let a = random_element(&mut rng);
            let b = random_element(&mut rng);
            let c = random_element(&mut rng);

            let lhs = a * (b + c);
            let rhs = a * b + a * c;
            assert_eq!(lhs.to_bytes(), rhs.to_bytes());
        }
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..8 {
            let a = random_element(&mut rng);
            assert_eq!((a * a.invert()).to_bytes(), FieldElement::ONE.to_bytes());
        }

        assert_eq!(FieldElement::ZERO.invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn pow2523_satisfies_its_exponent() {
        // (a^((p-5)/8))^8 · a^5 = a^p = a
        let mut rng = StdRng::seed_from_u64(19);
        let a = random_element(&mut rng);

        let t = a.pow2523();
        let t8 = t.square().square().square();
        let a5 = a.square().square() * a;

        assert_eq!((t8 * a5).to_bytes(), a.to_bytes());
    }

    #[test]
    fn negation_and_parity() {
        let two = FieldElement::ONE + FieldElement::ONE;

        assert!(!bool::from(two.is_negative()));
        // -2 = p - 2, which is odd.
        assert!(bool::from((-two).is_negative()));
        assert_eq!((two + -two).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn conditional_swap_follows_choice() {
        let mut rng = StdRng::seed_from_u64(23);
        let a = random_element(&mut rng);
        let b = random_element(&mut rng);

        let (mut x, mut y) = (a, b);
        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(0));
        assert_eq!(x.to_bytes(), a.to_bytes());
        assert_eq!(y.to_bytes(), b.to_bytes());

        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(1));
        assert_eq!(x.to_bytes(), b.to_bytes());
        assert_eq!(y.to_bytes(), a.to_bytes());

        let picked = FieldElement::conditional_select(&a, &b, Choice::from(1));
        assert_eq!(picked.to_bytes(), b.to_bytes());
    }
}
