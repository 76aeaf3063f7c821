//! Jacobian curve points.

use crate::{AffinePoint, FieldElement};

/// Point on the SM2 curve in Jacobian coordinates.
///
/// `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)` when `Z ≠ 0` and the
/// point at infinity when `Z = 0`.
#[derive(Clone, Debug)]
pub struct JacobianPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl JacobianPoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            z: FieldElement::zero(),
        }
    }

    /// Create a point from its Jacobian coordinates.
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Self { x, y, z }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Borrow the `(X, Y, Z)` coordinates.
    pub fn coordinates(&self) -> (&FieldElement, &FieldElement, &FieldElement) {
        (&self.x, &self.y, &self.z)
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint {
        // `p` is prime, so only zero lacks an inverse.
        let Some(z_inv) = self.z.invert() else {
            return AffinePoint::Identity;
        };

        let z_inv2 = z_inv.square();
        let z_inv3 = &z_inv2 * &z_inv;

        AffinePoint::new(&self.x * &z_inv2, &self.y * &z_inv3)
    }
}

impl Default for JacobianPoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&AffinePoint> for JacobianPoint {
    fn from(p: &AffinePoint) -> Self {
        match p {
            AffinePoint::Identity => Self::identity(),
            AffinePoint::Coordinates { x, y } if x.is_zero() && y.is_zero() => Self::identity(),
            AffinePoint::Coordinates { x, y } => Self {
                x: x.clone(),
                y: y.clone(),
                z: FieldElement::one(),
            },
        }
    }
}

impl From<AffinePoint> for JacobianPoint {
    fn from(p: AffinePoint) -> Self {
        match p {
            AffinePoint::Identity => Self::identity(),
            AffinePoint::Coordinates { x, y } if x.is_zero() && y.is_zero() => Self::identity(),
            AffinePoint::Coordinates { x, y } => Self {
                x,
                y,
                z: FieldElement::one(),
            },
        }
    }
}

impl From<&JacobianPoint> for AffinePoint {
    fn from(p: &JacobianPoint) -> AffinePoint {
        p.to_affine()
    }
}

impl From<JacobianPoint> for AffinePoint {
    fn from(p: JacobianPoint) -> AffinePoint {
        p.to_affine()
    }
}

impl PartialEq for JacobianPoint {
    /// Compares the represented points: `X1·Z2² = X2·Z1²` and `Y1·Z2³ = Y2·Z1³`.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();

                &self.x * &z2z2 == &other.x * &z1z1
                    && &self.y * &(&z2z2 * &other.z) == &other.y * &(&z1z1 * &self.z)
            }
            _ => false,
        }
    }
}

impl Eq for JacobianPoint {}

#[cfg(test)]
mod tests {
    use super::JacobianPoint;
    use crate::{AffinePoint, FieldElement, sm2p256};

    #[test]
    fn identity_to_affine() {
        assert_eq!(JacobianPoint::identity().to_affine(), AffinePoint::Identity);

        let zero_z = JacobianPoint::new(
            FieldElement::from_u64(5),
            FieldElement::from_u64(7),
            FieldElement::zero(),
        );
        assert_eq!(zero_z.to_affine(), AffinePoint::Identity);
    }

    #[test]
    fn lift_identity() {
        assert!(JacobianPoint::from(&AffinePoint::IDENTITY).is_identity());
        assert!(
            JacobianPoint::from(AffinePoint::new(FieldElement::zero(), FieldElement::zero()))
                .is_identity()
        );
    }

    #[test]
    fn lift_zero_coordinates() {
        let zero_zero = AffinePoint::Coordinates {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        };
        assert!(JacobianPoint::from(&zero_zero).is_identity());
        assert!(JacobianPoint::from(zero_zero).is_identity());
    }

    #[test]
    fn zero_coordinates_convert_to_identity() {
        let point = JacobianPoint::new(
            FieldElement::zero(),
            FieldElement::zero(),
            FieldElement::one(),
        );
        assert_eq!(point.to_affine(), AffinePoint::Identity);
    }

    #[test]
    fn rescaled_generator() {
        let g = sm2p256().generator();
        let (x, y) = g.coordinates().unwrap();
        let z = FieldElement::from_u64(0xdead_beef);
        let z2 = z.square();
        let z3 = &z2 * &z;

        let rescaled = JacobianPoint::new(x * &z2, y * &z3, z);
        assert_eq!(rescaled.to_affine(), g);
        assert_eq!(rescaled, JacobianPoint::from(&g));
        assert_ne!(rescaled, JacobianPoint::identity());
    }
}
