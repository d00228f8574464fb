//! Edwards25519 group operations.
//!
//! The curve is the twisted Edwards form
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! over 𝔽ₚ. Points are kept in extended coordinates `(X : Y : Z : T)` with
//! `x = X/Z`, `y = Y/Z` and `T = X·Y/Z`.
//!
//! Addition uses the unified formula, valid for doubling and for the
//! identity, so scalar multiplication needs a single code path: a
//! double-and-add ladder over all 256 bits with conditional swaps. The
//! sequence of field operations is the same for every scalar.
//!
//! Decompression runs on public data only and is allowed to branch.

use std::ops::{Add, Neg};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::constants::{BASE_X, BASE_Y, D, D2, SQRT_M1};
use super::field::FieldElement;
use crate::error::{Error, Result};

/// Group element in extended coordinates.
#[derive(Clone, Copy)]
pub(crate) struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = EdwardsPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The Ed25519 base point `B`, with `y = 4/5` and positive `x`.
    pub(crate) fn base_point() -> Self {
        EdwardsPoint {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_X * BASE_Y,
        }
    }

    /// Computes `[scalar]·self` for a 32-byte little-endian scalar.
    ///
    /// All 256 bits are processed from the most significant down. Each step
    /// swaps the accumulator pair on the current bit, adds, doubles and
    /// swaps back, so the work done is independent of the scalar.
    pub(crate) fn scalar_mul(&self, scalar: &[u8; 32]) -> Self {
        let mut p = EdwardsPoint::IDENTITY;
        let mut q = *self;

        for i in (0..256).rev() {
            let bit = Choice::from((scalar[i / 8] >> (i & 7)) & 1);

            EdwardsPoint::conditional_swap(&mut p, &mut q, bit);
            q = q + p;
            p = p + p;
            EdwardsPoint::conditional_swap(&mut p, &mut q, bit);
        }

        p
    }

    /// Computes `[scalar]·B`.
    pub(crate) fn mul_base(scalar: &[u8; 32]) -> Self {
        EdwardsPoint::base_point().scalar_mul(scalar)
    }

    /// Encodes the point as 32 bytes: the canonical `y` with the parity of
    /// `x` in bit 255.
    pub(crate) fn compress(&self) -> [u8; 32] {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut out = y.to_bytes();
        out[31] ^= x.is_negative().unwrap_u8() << 7;

        out
    }

    /// Decodes a compressed point.
    ///
    /// Recovers `x` from `x² = (y² − 1) / (d·y² + 1)` with the
    /// `(p − 5) / 8` exponentiation:
    ///
    /// ```text
    /// x = u·v³ · (u·v⁷)^((p − 5) / 8)
    /// ```
    ///
    /// If `v·x²` equals `−u` instead of `u`, `x` is multiplied by `√−1`. If
    /// neither matches, the encoding is not on the curve. Finally `x` is
    /// negated when its parity disagrees with the sign bit.
    ///
    /// `y` is not required to be canonical, and `x = 0` with the sign bit
    /// set is accepted as `x = 0`.
    pub(crate) fn decompress(bytes: &[u8; 32]) -> Result<Self> {
        let y = FieldElement::from_bytes(bytes);
        let z = FieldElement::ONE;

        let y2 = y.square();
        let u = y2 - z;
        let v = y2 * D + z;

        let v2 = v.square();
        let v4 = v2.square();
        let v7 = v4 * v2 * v;

        let mut x = (v7 * u).pow2523() * u * v * v2;

        if !bool::from((x.square() * v).ct_eq(&u)) {
            x = x * SQRT_M1;
        }

        if !bool::from((x.square() * v).ct_eq(&u)) {
            tracing::debug!("point decompression failed: not on curve");
            return Err(Error::InvalidPoint);
        }

        if x.is_negative().unwrap_u8() != bytes[31] >> 7 {
            x = -x;
        }

        Ok(EdwardsPoint { x, y, z, t: x * y })
    }
}

/// Unified addition in extended coordinates.
///
/// ```text
/// A = (Y₁ − X₁)(Y₂ − X₂)     E = B − A
/// B = (Y₁ + X₁)(Y₂ + X₂)     F = D − C
/// C = T₁·T₂·2d              G = D + C
/// D = 2·Z₁·Z₂               H = B + A
///
/// X₃ = E·F   Y₃ = G·H   Z₃ = F·G   T₃ = E·H
/// ```
impl Add for EdwardsPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let a = (self.y - self.x) * (rhs.y - rhs.x);
        let b = (self.y + self.x) * (rhs.y + rhs.x);
        let c = self.t * rhs.t * D2;
        let d = self.z * rhs.z;
        let d = d + d;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        EdwardsPoint {
            x: e * f,
            y: h * g,
            z: g * f,
            t: e * h,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = Self;

    fn neg(self) -> Self {
        EdwardsPoint {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        FieldElement::conditional_swap(&mut a.x, &mut b.x, choice);
        FieldElement::conditional_swap(&mut a.y, &mut b.y, choice);
        FieldElement::conditional_swap(&mut a.z, &mut b.z, choice);
        FieldElement::conditional_swap(&mut a.t, &mut b.t, choice);
    }
}
