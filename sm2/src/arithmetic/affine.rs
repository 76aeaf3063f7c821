//! Affine curve points.

use crate::{Curve, CurveParams, FieldElement};
use core::ops::Neg;

/// Point on the SM2 curve in affine coordinates.
///
/// The point at infinity is a variant of its own rather than an encoding
/// overloaded onto some pair of coordinates.
#[derive(Clone, Debug)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Finite point.
    Coordinates {
        /// x-coordinate
        x: FieldElement,

        /// y-coordinate
        y: FieldElement,
    },
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self::Identity;

    /// Create a point from its coordinates.
    ///
    /// `(0, 0)` is not on the curve and is read as the point at infinity,
    /// the way callers using untagged coordinate pairs encode it.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        if x.is_zero() && y.is_zero() {
            Self::Identity
        } else {
            Self::Coordinates { x, y }
        }
    }

    /// Is this point the point at infinity?
    ///
    /// Coordinates `(0, 0)` built without [`AffinePoint::new`] count as well.
    pub fn is_identity(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Coordinates { x, y } => x.is_zero() && y.is_zero(),
        }
    }

    /// Borrow the coordinates of a finite point.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Self::Coordinates { x, y } if !self.is_identity() => Some((x, y)),
            _ => None,
        }
    }

    /// x-coordinate of a finite point.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate of a finite point.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Is this point an element of the group defined by `curve`?
    ///
    /// The identity is the group's neutral element and is accepted.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        match self {
            Self::Coordinates { x, y } if !self.is_identity() => curve.is_on_curve(x, y),
            _ => true,
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates() == other.coordinates()
    }
}

impl Eq for AffinePoint {}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        match self {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Coordinates { x, y } => AffinePoint::Coordinates {
                x: x.clone(),
                y: -y,
            },
        }
    }
}
