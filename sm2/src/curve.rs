//! Curve capability surface.

use crate::{
    AffinePoint, CurveParams, FieldElement, JacobianPoint,
    arithmetic::{mul, point_arithmetic},
};

/// Operations on an elliptic curve over affine points.
///
/// This is the contract higher-level schemes (signatures, encryption) build
/// upon. Points passed in are never modified; every operation returns a new
/// value.
pub trait Curve {
    /// Domain parameters of the curve.
    fn params(&self) -> &CurveParams;

    /// Does `(x, y)` satisfy the curve equation `y² = x³ + a·x + b`?
    fn is_on_curve(&self, x: &FieldElement, y: &FieldElement) -> bool;

    /// Returns `lhs + rhs`.
    fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint;

    /// Returns `point + point`.
    fn double(&self, point: &AffinePoint) -> AffinePoint;

    /// Returns `k * point`, where `k` is a big endian integer of any length.
    ///
    /// `k` is not reduced modulo the group order.
    fn scalar_mult(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint;

    /// Returns `k * G`, where `G` is the base point of the curve.
    fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint {
        self.scalar_mult(&self.params().generator(), k)
    }
}

impl Curve for CurveParams {
    fn params(&self) -> &CurveParams {
        self
    }

    fn is_on_curve(&self, x: &FieldElement, y: &FieldElement) -> bool {
        // y² = x³ + ax + b
        let lhs = y.square();
        let rhs = &(&(&x.square() * x) + &(self.a() * x)) + self.b();
        lhs == rhs
    }

    fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        point_arithmetic::add(self, &JacobianPoint::from(lhs), &JacobianPoint::from(rhs))
            .to_affine()
    }

    fn double(&self, point: &AffinePoint) -> AffinePoint {
        point_arithmetic::double(self, &JacobianPoint::from(point)).to_affine()
    }

    fn scalar_mult(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        mul::mul_vartime(self, point, k)
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::{AffinePoint, FieldElement, sm2p256};

    #[test]
    fn params_is_self() {
        let curve = sm2p256();
        assert!(core::ptr::eq(curve.params(), curve));
    }

    #[test]
    fn is_on_curve_rejects_perturbed_generator() {
        let curve = sm2p256();
        let y = curve.gy() + &FieldElement::one();
        assert!(!curve.is_on_curve(curve.gx(), &y));
        assert!(!curve.is_on_curve(&FieldElement::zero(), &FieldElement::zero()));
    }

    #[test]
    fn affine_identity_operands() {
        let curve = sm2p256();
        let g = curve.generator();
        let legacy_identity = AffinePoint::new(FieldElement::zero(), FieldElement::zero());

        assert_eq!(curve.add(&g, &AffinePoint::IDENTITY), g);
        assert_eq!(curve.add(&legacy_identity, &g), g);
        assert_eq!(curve.double(&AffinePoint::IDENTITY), AffinePoint::IDENTITY);
    }

    #[test]
    fn base_mult_uses_generator() {
        let curve = sm2p256();
        assert_eq!(curve.scalar_base_mult(&[1]), curve.generator());
        assert_eq!(
            curve.scalar_base_mult(&[0x01, 0x00]),
            curve.scalar_mult(&curve.generator(), &[0x01, 0x00])
        );
    }
}
