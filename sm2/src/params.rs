//! SM2 recommended domain parameters.

use crate::arithmetic::{
    AffinePoint, FieldElement,
    field::{self, FIELD_BYTES},
};
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Order of SM2's elliptic curve group (i.e. scalar modulus).
const ORDER_BYTES: [u8; FIELD_BYTES] =
    hex!("fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123");

/// a = -3 (0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFC)
const EQUATION_A_BYTES: [u8; FIELD_BYTES] =
    hex!("fffffffeffffffffffffffffffffffffffffffff00000000fffffffffffffffc");

/// b = 0x28E9FA9E 9D9F5E34 4D5A9E4B CF6509A7 F39789F5 15AB8F92 DDBCBD41 4D940E93
const EQUATION_B_BYTES: [u8; FIELD_BYTES] =
    hex!("28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93");

/// Base point of SM2.
///
/// ```text
/// Gₓ = 0x32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7
/// Gᵧ = 0xBC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0
/// ```
const GENERATOR_BYTES: ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) = (
    hex!("32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7"),
    hex!("bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0"),
);

static SM2_P256: Lazy<CurveParams> = Lazy::new(CurveParams::sm2p256);

/// Returns the SM2-P256 domain parameters.
///
/// The parameters are built once, on first access, behind a one-time
/// initialization barrier: concurrent first callers block until the single
/// initialization completes and all observe the same instance.
pub fn sm2p256() -> &'static CurveParams {
    &SM2_P256
}

/// Domain parameters of a short Weierstrass curve `y² = x³ + a·x + b (mod p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    name: &'static str,
    n: BigUint,
    a: FieldElement,
    b: FieldElement,
    gx: FieldElement,
    gy: FieldElement,
    bit_size: usize,
}

impl CurveParams {
    fn sm2p256() -> Self {
        Self {
            name: "SM2-P256",
            n: BigUint::from_bytes_be(&ORDER_BYTES),
            a: FieldElement::reduce(&BigUint::from_bytes_be(&EQUATION_A_BYTES)),
            b: FieldElement::reduce(&BigUint::from_bytes_be(&EQUATION_B_BYTES)),
            gx: FieldElement::reduce(&BigUint::from_bytes_be(&GENERATOR_BYTES.0)),
            gy: FieldElement::reduce(&BigUint::from_bytes_be(&GENERATOR_BYTES.1)),
            bit_size: 256,
        }
    }

    /// Canonical name of the curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Order of the underlying field.
    ///
    /// This is the modulus every [`FieldElement`] is reduced by.
    pub fn p(&self) -> &'static BigUint {
        field::modulus()
    }

    /// Order of the base point.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// x-coordinate of the base point.
    pub fn gx(&self) -> &FieldElement {
        &self.gx
    }

    /// y-coordinate of the base point.
    pub fn gy(&self) -> &FieldElement {
        &self.gy
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Coordinates {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    /// Size of the underlying field in bits.
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Size of a serialized field element in bytes.
    pub fn field_bytes_len(&self) -> usize {
        self.bit_size.div_ceil(8)
    }
}

#[cfg(test)]
mod tests {
    use super::{FIELD_BYTES, sm2p256};
    use crate::{Curve, FieldElement};

    #[test]
    fn generator_is_on_curve() {
        let curve = sm2p256();
        assert!(curve.is_on_curve(curve.gx(), curve.gy()));
    }

    #[test]
    fn equation_a_is_minus_three() {
        assert_eq!(*sm2p256().a(), -FieldElement::from_u64(3));
    }

    #[test]
    fn field_elements_reduce_by_p() {
        let p = sm2p256().p();
        assert!(FieldElement::reduce(p).is_zero());
        assert!(FieldElement::from_uint(p.clone()).is_none());
        assert_eq!(FieldElement::from_uint(p.clone() - 1u32), Some(-FieldElement::one()));
    }

    #[test]
    fn field_size() {
        let curve = sm2p256();
        assert_eq!(curve.p().bits(), 256);
        assert_eq!(curve.n().bits(), 256);
        assert_eq!(curve.bit_size(), 256);
        assert_eq!(curve.field_bytes_len(), FIELD_BYTES);
        assert_eq!(curve.name(), "SM2-P256");
    }
}
