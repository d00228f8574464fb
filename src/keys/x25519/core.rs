use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::curve25519::constants::A24;
use crate::curve25519::field::FieldElement;
use crate::curve25519::scalar::clamp;

/// Scalar size in bytes.
pub const SCALAR_BYTES: usize = 32;

/// Encoded u-coordinate size in bytes.
pub const POINT_BYTES: usize = 32;

/// u-coordinate of the Curve25519 base point.
const BASE: [u8; POINT_BYTES] = {
    let mut base = [0u8; POINT_BYTES];
    base[0] = 9;
    base
};

/// X25519 scalar multiplication (RFC 7748).
///
/// Computes the u-coordinate of `[scalar]·P` where `point` is the
/// u-coordinate of `P`.
///
/// ## Algorithm
///
/// 1. Clamp a copy of the scalar.
/// 2. Decode `point` as a field element `x` (bit 255 ignored).
/// 3. Run the Montgomery ladder from bit 254 down to bit 0. The pairs
///    `(a : c)` and `(b : d)` hold `[k]P` and `[k + 1]P`; before and after
///    each differential add-and-double step they are conditionally swapped
///    on the current scalar bit.
/// 4. Return `a · c⁻¹`, canonically encoded.
///
/// ## Security
///
/// - Constant-time with respect to the scalar: every bit runs the same
///   field operations and the swap is mask-based.
/// - The input point is not validated.
pub fn scalarmult(scalar: &[u8; SCALAR_BYTES], point: &[u8; POINT_BYTES]) -> [u8; POINT_BYTES] {
    let mut k = *scalar;
    clamp(&mut k);

    let x = FieldElement::from_bytes(point);

    let mut a = FieldElement::ONE;
    let mut b = x;
    let mut c = FieldElement::ZERO;
    let mut d = FieldElement::ONE;

    for i in (0..=254).rev() {
        let bit = Choice::from((k[i >> 3] >> (i & 7)) & 1);

        FieldElement::conditional_swap(&mut a, &mut b, bit);
        FieldElement::conditional_swap(&mut c, &mut d, bit);

        let mut e = a + c;
        a = a - c;
        c = b + d;
        b = b - d;
        d = e.square();
        let f = a.square();
        a = c * a;
        c = b * e;
        e = a + c;
        a = a - c;
        b = a.square();
        c = d - f;
        a = c * A24;
        a = a + d;
        c = c * a;
        a = d * f;
        d = b * x;
        b = e.square();

        FieldElement::conditional_swap(&mut a, &mut b, bit);
        FieldElement::conditional_swap(&mut c, &mut d, bit);
    }

    k.zeroize();

    (a * c.invert()).to_bytes()
}

/// Computes the public u-coordinate `[scalar]·9`.
pub fn scalarmult_base(scalar: &[u8; SCALAR_BYTES]) -> [u8; POINT_BYTES] {
    scalarmult(scalar, &BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve25519::field::op_count;

    #[test]
    fn ladder_shape_does_not_depend_on_the_scalar() {
        let point = [0x42u8; 32];

        op_count::take();
        scalarmult(&[0u8; 32], &point);
        let zeros = op_count::take();

        scalarmult(&[0xa5u8; 32], &point);
        let pattern = op_count::take();

        assert_eq!(zeros, pattern);
        assert_eq!(zeros.1, 255 * 4);
    }

    #[test]
    fn clamped_bits_do_not_affect_the_result() {
        let mut scalar = [0x33u8; 32];
        let expected = scalarmult_base(&scalar);

        scalar[0] |= 0x07;
        scalar[31] |= 0x80;
        assert_eq!(scalarmult_base(&scalar), expected);
    }
}
