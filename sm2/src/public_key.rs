//! SM2 public keys.

use crate::{AffinePoint, Curve, CurveParams, Error, FieldElement, Result, sm2p256};
use core::fmt;
use num_bigint::BigUint;
use zeroize::Zeroizing;

/// SM2 public key: a point on the curve other than the identity.
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    curve: &'static CurveParams,
    x: FieldElement,
    y: FieldElement,
}

impl PublicKey {
    /// Create a public key from an affine point.
    ///
    /// Fails with [`Error::InvalidPoint`] if the point is the identity or does
    /// not satisfy the curve equation.
    pub fn from_affine(point: &AffinePoint) -> Result<Self> {
        let curve = sm2p256();

        match point {
            AffinePoint::Coordinates { x, y } if curve.is_on_curve(x, y) => Ok(Self {
                curve,
                x: x.clone(),
                y: y.clone(),
            }),
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Compute `d * G` for a secret scalar `d`.
    ///
    /// Fails with [`Error::InvalidScalar`] if `d` is a multiple of `n`.
    pub(crate) fn from_secret_scalar(curve: &'static CurveParams, d: &BigUint) -> Result<Self> {
        let k = Zeroizing::new(d.to_bytes_be());
        let point = curve.scalar_base_mult(&k);

        match point.coordinates() {
            Some((x, y)) => Ok(Self {
                curve,
                x: x.clone(),
                y: y.clone(),
            }),
            None => Err(Error::InvalidScalar),
        }
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// x-coordinate of the public point.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// y-coordinate of the public point.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Returns the public point in affine coordinates.
    pub fn to_affine(&self) -> AffinePoint {
        AffinePoint::Coordinates {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}

impl From<&PublicKey> for AffinePoint {
    fn from(public_key: &PublicKey) -> AffinePoint {
        public_key.to_affine()
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        AffinePoint::Coordinates {
            x: public_key.x,
            y: public_key.y,
        }
    }
}

impl TryFrom<&AffinePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: &AffinePoint) -> Result<Self> {
        Self::from_affine(point)
    }
}

impl TryFrom<AffinePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<Self> {
        Self::from_affine(&point)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve.name())
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
